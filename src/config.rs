use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;

use crate::schemas::AppState;
use crate::upstream::UpstreamClient;

/// Extra time the whole request gets on top of the upstream timeout
const REQUEST_TIMEOUT_MARGIN: Duration = Duration::from_secs(5);

/// Settings of the `serve` command
#[derive(Debug, Clone)]
pub struct ServeConfig {
    pub bind_address: String,
    pub upstream_url: String,
    pub static_dir: PathBuf,
    pub upstream_timeout: Duration,
}

/// Initialize application state from the serve settings
pub fn initialize_app_state(config: &ServeConfig) -> Result<AppState> {
    tracing::info!("Forwarding prediction requests to: {}", config.upstream_url);
    let upstream = UpstreamClient::new(&config.upstream_url, config.upstream_timeout)?;

    if !config.static_dir.join("index.html").is_file() {
        tracing::warn!(
            "No index.html in {}, the frontend will not be served",
            config.static_dir.display()
        );
    }

    Ok(AppState {
        upstream,
        static_dir: config.static_dir.clone(),
        request_timeout: config.upstream_timeout + REQUEST_TIMEOUT_MARGIN,
    })
}
