//! # podium-api
//!
//! HTTP surface for the scoreboard engine, built with Axum: cached
//! scoreboard reads for display widgets plus moderator reset/countdown
//! commands. The event-ingest side lives in `podium-gateway` and is driven
//! by the hosting process's chat transport; this crate only ever touches
//! the ledger's read cache and command operations.

pub mod handlers;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{create_app, create_app_state, run};
pub use state::AppState;
