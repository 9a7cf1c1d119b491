//! Feed API Server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p feed-api
//! ```
//!
//! Configuration is loaded from environment variables (and `.env`).

use feed_common::{try_init_tracing_with_config, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let config = AppConfig::from_env();

    let tracing_config = config
        .as_ref()
        .map(|c| TracingConfig::for_environment(c.app.env))
        .unwrap_or_default();
    if let Err(e) = try_init_tracing_with_config(tracing_config) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Failed to load configuration");
            std::process::exit(1);
        }
    };

    info!(
        app = %config.app.name,
        env = ?config.app.env,
        port = config.api.port,
        backend = %config.backend.url,
        "Configuration loaded"
    );

    if let Err(e) = feed_api::run(config).await {
        error!(error = %e, "Server failed");
        std::process::exit(1);
    }
}
