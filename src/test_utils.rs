use std::path::PathBuf;
use std::time::Duration;

use axum::{
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use crate::router::create_router;
use crate::schemas::AppState;
use crate::upstream::UpstreamClient;

#[derive(Deserialize)]
struct HistoryParams {
    district: String,
    crop: String,
}

/// Stand-in for the prediction service.
///
/// `/predict` answers 500 for the district `"broken"`, otherwise three crops.
/// `/historical_yield` answers 404 for potato and echoes the district back in
/// an extra field otherwise.
fn stub_prediction_service() -> Router {
    async fn predict(Json(body): Json<Value>) -> Response {
        if body["District"] == "broken" {
            return (StatusCode::INTERNAL_SERVER_ERROR, "model crashed").into_response();
        }
        Json(json!({
            "wheat": {"Yield_Difference": 1.25, "Nutrient_Recommendations": ["N: Low"]},
            "potato": {"Yield_Difference": 0.5, "Nutrient_Recommendations": []},
            "mustard": {"Yield_Difference": -0.75, "Nutrient_Recommendations": ["K2O: High"]}
        }))
        .into_response()
    }

    async fn historical_yield(Query(params): Query<HistoryParams>) -> Response {
        if params.crop == "potato" {
            return (
                StatusCode::NOT_FOUND,
                Json(json!({"error": "No data available for the specified district and crop"})),
            )
                .into_response();
        }
        Json(json!({
            "years": [2019, 2020, 2021],
            "yields": [2.5, 2.75, 3.0],
            "district": params.district,
        }))
        .into_response()
    }

    Router::new()
        .route("/", get(|| async { "ok" }))
        .route("/predict", post(predict))
        .route("/historical_yield", get(historical_yield))
}

/// Start the stub service on an ephemeral port and return its base URL.
pub async fn spawn_stub_upstream() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub upstream");
    let address = listener.local_addr().expect("Stub upstream has no address");

    tokio::spawn(async move {
        axum::serve(listener, stub_prediction_service())
            .await
            .expect("Stub upstream crashed");
    });

    format!("http://{}", address)
}

/// Directory with a minimal built frontend.
pub fn create_static_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("cropadvisor-{}-{}", name, std::process::id()));
    std::fs::create_dir_all(&dir).expect("Failed to create static dir");
    std::fs::write(
        dir.join("index.html"),
        "<!DOCTYPE html><html><body>crop advisor</body></html>",
    )
    .expect("Failed to write index.html");
    dir
}

/// Initialize tracing for tests with output captured by the test harness.
///
/// The log level is determined by the RUST_LOG environment variable,
/// defaulting to WARN if not set. The subscriber is global, so only the
/// first call installs it.
pub fn init_test_tracing() {
    let log_level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|level| match level.to_uppercase().as_str() {
            "ERROR" => Some(Level::ERROR),
            "WARN" => Some(Level::WARN),
            "INFO" => Some(Level::INFO),
            "DEBUG" => Some(Level::DEBUG),
            "TRACE" => Some(Level::TRACE),
            _ => None,
        })
        .unwrap_or(Level::WARN);

    // Fails once a subscriber is already installed
    let _ = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_test_writer()
        .try_init();
}

/// Create axum app forwarding to `upstream_url`
pub fn setup_test_app(upstream_url: &str, static_dir: PathBuf) -> Router {
    init_test_tracing();

    let upstream = UpstreamClient::new(upstream_url, Duration::from_secs(5))
        .expect("Failed to build upstream client");

    create_router(AppState {
        upstream,
        static_dir,
        request_timeout: Duration::from_secs(10),
    })
}
