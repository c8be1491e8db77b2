use anyhow::Result;
use tokio::net::TcpListener;
use tracing::{debug, error, info, trace};

use crate::config::{initialize_app_state, ServeConfig};
use crate::router::create_router;

pub async fn serve(config: &ServeConfig) -> Result<()> {
    trace!("Entering serve function");
    info!("Crop advisor host starting up");
    debug!("Configuration: {:?}", config);

    // Initialize application state
    trace!("Initializing application state");
    let state = match initialize_app_state(config) {
        Ok(state) => {
            debug!("Application state initialized successfully");
            state
        }
        Err(e) => {
            error!("Failed to initialize application state: {}", e);
            return Err(e);
        }
    };

    // Create router
    trace!("Creating application router");
    let app = create_router(state);
    debug!("Router created successfully");

    // Start server
    info!("Starting server on {}", config.bind_address);
    let listener = match TcpListener::bind(&config.bind_address).await {
        Ok(listener) => {
            debug!("Successfully bound to address: {}", config.bind_address);
            listener
        }
        Err(e) => {
            error!("Failed to bind to address {}: {}", config.bind_address, e);
            return Err(e.into());
        }
    };

    info!("Crop advisor running on http://{}", config.bind_address);
    info!("Swagger UI available at http://{}/swagger-ui", config.bind_address);

    trace!("Starting axum server");
    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    info!("Server shutdown gracefully");
    Ok(())
}
