//! Linker API Server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p linker-api
//! ```
//!
//! Configuration is loaded from environment variables (and `.env` if present).

use linker_common::{try_init_tracing_with_config, AppConfig, Environment, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // Pick the log format before the full config is parsed so config errors are logged too
    let env = std::env::var("APP_ENV")
        .ok()
        .and_then(|value| Environment::parse(&value))
        .unwrap_or_default();

    if let Err(e) = try_init_tracing_with_config(TracingConfig::for_environment(env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    if let Err(e) = run().await {
        error!(error = %e, "Server failed to start");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    info!("Starting Linker API Server...");

    let config = AppConfig::from_env().map_err(|e| {
        error!(error = %e, "Failed to load configuration");
        e
    })?;

    info!(
        env = ?config.app.env,
        address = %config.server.address(),
        "Configuration loaded"
    );

    linker_api::run(config).await?;

    Ok(())
}
