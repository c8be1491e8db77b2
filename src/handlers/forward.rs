//! Prediction endpoints, relayed to the prediction service unchanged.

use axum::{
    body::Bytes,
    extract::{RawQuery, State},
};
use common::endpoints::{HISTORICAL_YIELD_PATH, PREDICT_PATH};
use common::{HistoricalYieldSeries, PredictionRequest, PredictionResponse};
use tracing::{debug, instrument};

use crate::schemas::AppState;
use crate::upstream::{ProxyError, UpstreamResponse};

/// Predict the best crops for a district and soil
#[utoipa::path(
    post,
    path = "/predict",
    tag = "prediction",
    request_body = PredictionRequest,
    responses(
        (status = 200, description = "Top crops with yield difference and nutrient recommendations", body = PredictionResponse),
        (status = 502, description = "Prediction service unreachable", body = crate::schemas::ErrorResponse),
        (status = 504, description = "Prediction service timed out", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state, body))]
pub async fn forward_predict(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<UpstreamResponse, ProxyError> {
    debug!(bytes = body.len(), "Forwarding prediction request");
    state.upstream.post_json(PREDICT_PATH, body).await
}

/// Historical yields of one crop in one district
#[utoipa::path(
    get,
    path = "/historical_yield",
    tag = "prediction",
    params(crate::schemas::HistoricalYieldQuery),
    responses(
        (status = 200, description = "Years and yields, parallel arrays", body = HistoricalYieldSeries),
        (status = 400, description = "Unknown crop", body = crate::schemas::ErrorResponse),
        (status = 404, description = "No data for the district and crop", body = crate::schemas::ErrorResponse),
        (status = 502, description = "Prediction service unreachable", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn forward_historical_yield(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<UpstreamResponse, ProxyError> {
    state
        .upstream
        .get(HISTORICAL_YIELD_PATH, query.as_deref())
        .await
}
