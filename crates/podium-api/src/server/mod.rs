//! Server setup and initialization
//!
//! Provides the application builder and server runner. The ledger's
//! `load()` completes inside `create_app_state`, strictly before any
//! surface that could mutate state is reachable.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::info;

use podium_common::{AppConfig, AppError};
use podium_engine::VoteLedger;
use podium_store::SnapshotStore;

use crate::routes::create_router;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    create_router()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(TimeoutLayer::new(Duration::from_secs(10)))
        .with_state(state)
}

/// Initialize the store and ledger, load persisted state, and create
/// the AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    let store = Arc::new(SnapshotStore::new(config.scoreboard.snapshot_path.clone()));
    let ledger = Arc::new(VoteLedger::new(
        store,
        config.scoreboard.homeserver_domains.clone(),
    ));

    // Must finish before any live mutation can arrive; a concurrent load
    // would overwrite it.
    ledger
        .load()
        .await
        .map_err(|e| AppError::Storage(e.to_string()))?;

    Ok(AppState::new(ledger, config))
}

/// Run the HTTP server until it fails or the process stops
pub async fn run(state: AppState) -> Result<(), AppError> {
    let address = state.config().api.address();
    let listener = TcpListener::bind(&address)
        .await
        .map_err(AppError::internal)?;
    info!(%address, "Scoreboard API listening");

    let app = create_app(state);
    axum::serve(listener, app).await.map_err(AppError::internal)
}
