use std::path::PathBuf;
use std::time::Duration;

use common::{CropResult, HistoricalYieldSeries, PredictionRequest, PredictionResponse};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, OpenApi, ToSchema};

use crate::upstream::UpstreamClient;

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Prediction service the API routes forward to
    pub upstream: UpstreamClient,
    /// Directory holding the built frontend
    pub static_dir: PathBuf,
    /// Upper bound for a whole request, forwarding included
    pub request_timeout: Duration,
}

/// Query parameters of the historical yield endpoint
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct HistoricalYieldQuery {
    /// District name, lowercase
    pub district: String,
    /// Crop name, lowercase
    pub crop: String,
}

/// Error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Whether the prediction service answers
    pub upstream: String,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::forward::forward_predict,
        crate::handlers::forward::forward_historical_yield,
    ),
    components(
        schemas(
            ErrorResponse,
            HealthResponse,
            PredictionRequest,
            PredictionResponse,
            CropResult,
            HistoricalYieldSeries,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "prediction", description = "Endpoints forwarded to the prediction service"),
    ),
    info(
        title = "Crop Advisor API",
        description = "Crop recommendations and historical yields for Uttar Pradesh districts",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
