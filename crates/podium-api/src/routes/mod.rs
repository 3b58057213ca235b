//! Route definitions

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{health, scoreboard};
use crate::state::AppState;

/// Create the main API router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route(
            "/rooms/:room_id/scoreboard",
            get(scoreboard::get_scoreboard),
        )
        .route("/rooms/:room_id/reset", post(scoreboard::reset_room))
        .route("/rooms/:room_id/countdown", post(scoreboard::set_countdown))
}
