use async_trait::async_trait;
use common::endpoints::{historical_yield_path, PREDICT_PATH};
use common::{
    ClientError, HistoricalYieldSeries, PredictionApi, PredictionRequest, PredictionResponse,
};

use crate::api_client;

/// [`PredictionApi`] backed by the browser's fetch.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpPredictionApi;

#[async_trait(?Send)]
impl PredictionApi for HttpPredictionApi {
    async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResponse, ClientError> {
        log::trace!("Requesting prediction for district: {}", request.district);
        let result = api_client::post::<PredictionResponse, _>(PREDICT_PATH, request).await;

        match &result {
            Ok(response) => log::info!("Received {} crop recommendations", response.len()),
            Err(e) => log::error!("Failed to fetch prediction: {}", e),
        }

        result
    }

    async fn historical_yield(
        &self,
        district: &str,
        crop: &str,
    ) -> Result<HistoricalYieldSeries, ClientError> {
        log::trace!("Fetching historical yield for {} in {}", crop, district);
        let result =
            api_client::get::<HistoricalYieldSeries>(&historical_yield_path(district, crop)).await;

        if let Err(ref e) = result {
            log::error!("Error fetching historical data for {}: {}", crop, e);
        }

        result
    }
}
