use crate::handlers::{
    forward::{forward_historical_yield, forward_predict},
    health::health_check,
};
use crate::schemas::{ApiDoc, AppState};
use axum::{
    routing::{get, post},
    Router,
};
use common::endpoints::{HISTORICAL_YIELD_PATH, PREDICT_PATH};
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    // Unknown paths get the single page app
    let index = state.static_dir.join("index.html");
    let frontend = ServeDir::new(&state.static_dir).fallback(ServeFile::new(index));
    let request_timeout = state.request_timeout;

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Prediction service
        .route(PREDICT_PATH, post(forward_predict))
        .route(HISTORICAL_YIELD_PATH, get(forward_historical_yield))
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Built frontend
        .fallback_service(frontend)
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(request_timeout))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
