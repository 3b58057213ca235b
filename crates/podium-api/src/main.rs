//! Scoreboard API server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p podium-api
//! ```
//!
//! Configuration is loaded from environment variables. The chat-transport
//! binding (which feeds `podium-gateway::EventIngest`) is hosted by the
//! deployment's bot process; this binary serves the read/command surface.

use podium_common::{try_init_tracing, AppConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Initialize tracing
    if let Err(e) = try_init_tracing() {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    // Run the server
    if let Err(e) = run().await {
        error!(error = %e, "Scoreboard API failed to start");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    info!("Starting scoreboard API server...");

    // Load configuration
    let config = AppConfig::from_env().map_err(|e| {
        error!(error = %e, "Failed to load configuration");
        e
    })?;

    info!(
        env = ?config.app.env,
        port = config.api.port,
        snapshot = %config.scoreboard.snapshot_path.display(),
        "Configuration loaded"
    );

    // Load persisted state, then serve
    let state = podium_api::create_app_state(config).await?;
    podium_api::run(state).await?;

    Ok(())
}
