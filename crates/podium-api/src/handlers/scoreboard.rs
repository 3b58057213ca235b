//! Scoreboard handlers
//!
//! Reads serve the ledger's cached view and never block on the mutation
//! lock; an unknown room yields an empty scoreboard rather than an error.

use axum::extract::{Path, State};
use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::Deserialize;
use tracing::instrument;

use podium_core::{RoomId, Scoreboard};

use crate::response::{ApiError, ApiJson, ApiResult, NoContent};
use crate::state::AppState;

/// Get a room's current scoreboard
///
/// GET /rooms/{room_id}/scoreboard
#[instrument(skip(state))]
pub async fn get_scoreboard(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
) -> ApiJson<Scoreboard> {
    let room_id = RoomId::new(room_id);
    let board = state
        .ledger()
        .scoreboard(&room_id)
        .map(|board| (*board).clone())
        .unwrap_or_default();
    ApiJson(board)
}

/// Reset a room's scoreboard
///
/// POST /rooms/{room_id}/reset
#[instrument(skip(state))]
pub async fn reset_room(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
) -> ApiResult<NoContent> {
    let room_id = RoomId::new(room_id);
    state.ledger().reset_room(&room_id).await?;
    Ok(NoContent)
}

/// Countdown request: either an absolute epoch-ms timestamp or a relative
/// seconds-from-now value, exactly one of the two.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountdownRequest {
    pub starts_at: Option<i64>,
    pub in_seconds: Option<i64>,
}

impl CountdownRequest {
    fn resolve(&self, now: DateTime<Utc>) -> Result<DateTime<Utc>, ApiError> {
        match (self.starts_at, self.in_seconds) {
            (Some(ms), None) => Utc
                .timestamp_millis_opt(ms)
                .single()
                .ok_or_else(|| ApiError::validation("startsAt is not a valid timestamp")),
            (None, Some(seconds)) if seconds >= 0 => Ok(now + Duration::seconds(seconds)),
            (None, Some(_)) => Err(ApiError::validation("inSeconds must be non-negative")),
            _ => Err(ApiError::validation(
                "exactly one of startsAt or inSeconds is required",
            )),
        }
    }
}

/// Set a room's Q&A countdown
///
/// POST /rooms/{room_id}/countdown
#[instrument(skip(state))]
pub async fn set_countdown(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
    axum::Json(request): axum::Json<CountdownRequest>,
) -> ApiResult<NoContent> {
    let room_id = RoomId::new(room_id);
    let starts_at = request.resolve(Utc::now())?;
    state.ledger().set_countdown(&room_id, starts_at).await?;
    Ok(NoContent)
}
