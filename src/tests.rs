use axum::http::StatusCode;
use axum_test::TestServer;
use common::{HistoricalYieldSeries, PredictionForm, PredictionResponse};
use serde_json::Value;

use crate::schemas::{ErrorResponse, HealthResponse};
use crate::test_utils::{create_static_dir, init_test_tracing, setup_test_app, spawn_stub_upstream};

/// Nothing listens on port 1.
const DEAD_UPSTREAM: &str = "http://127.0.0.1:1";

fn form(region: &str) -> PredictionForm {
    PredictionForm {
        region: region.to_string(),
        area: "10".to_string(),
        season: "Rabi".to_string(),
        nitrogen: "250".to_string(),
        phosphorus: "30".to_string(),
        potassium: "100".to_string(),
    }
}

async fn server_with_stub(name: &str) -> TestServer {
    let upstream = spawn_stub_upstream().await;
    let app = setup_test_app(&upstream, create_static_dir(name));
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let server = server_with_stub("health").await;

    let response = server.get("/health").await;

    response.assert_status(StatusCode::OK);
    let body: HealthResponse = response.json();
    assert_eq!(body.status, "healthy");
    assert_eq!(body.upstream, "reachable");
}

#[tokio::test]
async fn test_health_check_reports_unreachable_upstream() {
    let server = TestServer::new(setup_test_app(DEAD_UPSTREAM, create_static_dir("health-dead"))).unwrap();

    let response = server.get("/health").await;

    response.assert_status(StatusCode::OK);
    let body: HealthResponse = response.json();
    assert_eq!(body.upstream, "unreachable");
}

#[tokio::test]
async fn test_predict_is_forwarded_in_order() {
    let server = server_with_stub("predict").await;

    let response = server.post("/predict").json(&form("Agra").to_request()).await;

    response.assert_status(StatusCode::OK);
    let body: PredictionResponse = serde_json::from_str(&response.text()).unwrap();
    assert_eq!(body.crop_names(), vec!["wheat", "potato", "mustard"]);
    assert_eq!(body.get("wheat").unwrap().yield_difference, 1.25);
}

#[tokio::test]
async fn test_predict_upstream_status_is_relayed() {
    let server = server_with_stub("predict-500").await;

    let response = server.post("/predict").json(&form("broken").to_request()).await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.text(), "model crashed");
}

#[tokio::test]
async fn test_historical_yield_query_is_forwarded() {
    let server = server_with_stub("history").await;

    let response = server
        .get("/historical_yield")
        .add_query_param("district", "gautam buddha nagar")
        .add_query_param("crop", "wheat")
        .await;

    response.assert_status(StatusCode::OK);
    let raw: Value = response.json();
    assert_eq!(raw["district"], "gautam buddha nagar");

    let series: HistoricalYieldSeries = response.json();
    assert_eq!(series.years, vec![2019, 2020, 2021]);
    assert_eq!(series.yields, vec![2.5, 2.75, 3.0]);
}

#[tokio::test]
async fn test_historical_yield_not_found_is_relayed() {
    let server = server_with_stub("history-404").await;

    let response = server
        .get("/historical_yield")
        .add_query_param("district", "agra")
        .add_query_param("crop", "potato")
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["error"], "No data available for the specified district and crop");
}

#[tokio::test]
async fn test_unreachable_upstream_is_bad_gateway() {
    let server = TestServer::new(setup_test_app(DEAD_UPSTREAM, create_static_dir("dead"))).unwrap();

    let response = server.post("/predict").json(&form("Agra").to_request()).await;

    response.assert_status(StatusCode::BAD_GATEWAY);
    let body: ErrorResponse = response.json();
    assert!(!body.success);
    assert_eq!(body.code, "UPSTREAM_UNREACHABLE");
}

#[tokio::test]
async fn test_frontend_is_served_for_unknown_paths() {
    let server = server_with_stub("static").await;

    for path in ["/", "/index.html", "/results/wheat"] {
        let response = server.get(path).await;
        response.assert_status(StatusCode::OK);
        assert!(
            response.text().contains("crop advisor"),
            "{} should serve index.html",
            path
        );
    }
}

#[tokio::test]
async fn test_openapi_documents_prediction_endpoints() {
    let server = server_with_stub("openapi").await;

    let response = server.get("/api-docs/openapi.json").await;

    response.assert_status(StatusCode::OK);
    let doc: Value = response.json();
    assert!(doc["paths"]["/predict"]["post"].is_object());
    assert!(doc["paths"]["/historical_yield"]["get"].is_object());
    assert!(doc["components"]["schemas"]["PredictionRequest"].is_object());
    assert!(doc["components"]["schemas"]["PredictionResponse"].is_object());
}

#[test]
fn test_tracing_subscriber_stays_installed() {
    init_test_tracing();
    init_test_tracing();
    assert!(tracing::dispatcher::has_been_set());
}
