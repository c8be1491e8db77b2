//! Form submission to rendered results.
//!
//! Historical series are fetched strictly one crop at a time, in response
//! order: a crop's fetch finishes (or fails) before the next one starts, and
//! the prediction request finishes before any of them.

use std::cell::RefCell;

use async_trait::async_trait;
use tracing::{debug, info, instrument, warn};

use crate::error::ClientError;
use crate::request::{PredictionForm, PredictionRequest};
use crate::response::{CropResult, HistoricalYieldSeries, PredictionResponse};
use crate::results::{ResultsAction, ResultsState};

/// Network side of the advisor.
#[async_trait(?Send)]
pub trait PredictionApi {
    async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResponse, ClientError>;

    async fn historical_yield(
        &self,
        district: &str,
        crop: &str,
    ) -> Result<HistoricalYieldSeries, ClientError>;
}

/// Handle to the results area.
pub trait ResultsView {
    fn apply(&self, action: ResultsAction);

    fn reset(&self) {
        self.apply(ResultsAction::Reset);
    }

    fn show_error(&self, message: String) {
        self.apply(ResultsAction::Failed(message));
    }

    fn append_crop(&self, crop: &str, result: &CropResult) {
        self.apply(ResultsAction::AppendCrop {
            crop: crop.to_string(),
            result: result.clone(),
        });
    }

    fn render_chart(&self, crop: &str, series: HistoricalYieldSeries) {
        self.apply(ResultsAction::ChartLoaded {
            crop: crop.to_string(),
            series,
        });
    }

    fn chart_failed(&self, crop: &str, message: String) {
        self.apply(ResultsAction::ChartFailed {
            crop: crop.to_string(),
            message,
        });
    }
}

impl ResultsView for RefCell<ResultsState> {
    fn apply(&self, action: ResultsAction) {
        self.borrow_mut().apply(action);
    }
}

/// Summary of one render pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOutcome {
    pub crops: usize,
    pub charts: usize,
    pub chart_failures: usize,
}

/// Sends the form and renders whatever comes back.
///
/// A failed prediction leaves a single error message in the view and is also
/// returned to the caller for logging.
#[instrument(skip(api, view))]
pub async fn submit_prediction<A, V>(
    api: &A,
    view: &V,
    form: &PredictionForm,
) -> Result<RenderOutcome, ClientError>
where
    A: PredictionApi + ?Sized,
    V: ResultsView + ?Sized,
{
    let request = form.to_request();
    let unparsed = form.unparsed_fields();
    if !unparsed.is_empty() {
        warn!(?unparsed, "sending prediction request with unparsed numeric fields");
    }

    let response = match api.predict(&request).await {
        Ok(response) => response,
        Err(err) => {
            warn!(%err, status = ?err.status(), "prediction request failed");
            view.show_error(err.to_string());
            return Err(err);
        }
    };

    info!(crops = response.len(), district = %request.district, "prediction received");
    Ok(display_results(api, view, &response, &request.district).await)
}

/// Renders every crop of `response`, then its historical chart.
///
/// A failing historical fetch only affects that crop's chart.
pub async fn display_results<A, V>(
    api: &A,
    view: &V,
    response: &PredictionResponse,
    district: &str,
) -> RenderOutcome
where
    A: PredictionApi + ?Sized,
    V: ResultsView + ?Sized,
{
    view.reset();
    let mut outcome = RenderOutcome::default();

    for (crop, details) in response.iter() {
        view.append_crop(crop, details);
        outcome.crops += 1;

        match api.historical_yield(district, crop).await {
            Ok(series) => {
                debug!(crop, points = series.len(), "historical yield received");
                view.render_chart(crop, series);
                outcome.charts += 1;
            }
            Err(err) => {
                warn!(crop, %err, status = ?err.status(), "historical yield request failed");
                view.chart_failed(crop, err.to_string());
                outcome.chart_failures += 1;
            }
        }
    }

    outcome
}
