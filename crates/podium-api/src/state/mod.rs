//! Application state
//!
//! Holds the shared state for the Axum application: the vote ledger and
//! the application configuration.

use std::sync::Arc;

use podium_common::AppConfig;
use podium_engine::VoteLedger;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    ledger: Arc<VoteLedger>,
    config: Arc<AppConfig>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(ledger: Arc<VoteLedger>, config: AppConfig) -> Self {
        Self {
            ledger,
            config: Arc::new(config),
        }
    }

    /// Get the vote ledger
    pub fn ledger(&self) -> &VoteLedger {
        &self.ledger
    }

    /// Get the application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("ledger", &"VoteLedger")
            .field("config", &"AppConfig")
            .finish()
    }
}
