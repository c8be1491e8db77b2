use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod commands;

use crate::config::ServeConfig;
use commands::serve;

#[derive(Parser)]
#[command(name = "cropadvisor")]
#[command(about = "Crop advisor web frontend host")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the frontend and forward prediction requests
    Serve {
        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:3000, 127.0.0.1:8080)
        #[arg(short, long, env = "BIND_ADDRESS", default_value = "0.0.0.0:3000")]
        bind_address: String,

        /// Base URL of the prediction service
        ///
        /// `/predict` and `/historical_yield` are forwarded to this URL
        /// with their body and query string unchanged.
        #[arg(short, long, env = "PREDICTION_SERVICE_URL", default_value = "http://127.0.0.1:5000")]
        upstream_url: String,

        /// Directory with the built frontend (index.html, wasm, js)
        #[arg(short, long, env = "STATIC_DIR", default_value = "workspace/frontend/dist")]
        static_dir: PathBuf,

        /// Seconds to wait for the prediction service
        #[arg(long, env = "UPSTREAM_TIMEOUT_SECS", default_value_t = 30)]
        upstream_timeout_secs: u64,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve {
                bind_address,
                upstream_url,
                static_dir,
                upstream_timeout_secs,
            } => {
                let config = ServeConfig {
                    bind_address,
                    upstream_url,
                    static_dir,
                    upstream_timeout: Duration::from_secs(upstream_timeout_secs),
                };
                serve(&config).await?;
            }
        }
        Ok(())
    }
}
