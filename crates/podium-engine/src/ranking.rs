//! Ranking projection
//!
//! A pure function of `RoomState`: no incremental state, no caching here.
//! Equal scores keep the room's tracking order (the sort is stable).

use podium_core::{RoomId, RoomState, Scoreboard, ScoreboardEntry};
use podium_core::EventId;

/// Project a room's vote state into its ranked scoreboard
pub fn rank_room(room_id: &RoomId, state: &RoomState, via_domains: &[String]) -> Scoreboard {
    let mut entries: Vec<ScoreboardEntry> = state
        .messages
        .iter()
        .map(|message| ScoreboardEntry {
            permalink: permalink(room_id, &message.event_id, via_domains),
            text: message.text.clone(),
            sender_name: message
                .sender_name
                .clone()
                .unwrap_or_else(|| message.sender_id.to_string()),
            sender_http_url: message.sender_http_url.clone(),
            score: message.score(),
        })
        .collect();

    // Stable: ties preserve tracking order
    entries.sort_by(|a, b| b.score.cmp(&a.score));

    Scoreboard {
        qa_start_time: state.qa_start_time,
        entries,
    }
}

/// Build a matrix.to-style permalink for an event, routing through the
/// configured home domains.
pub fn permalink(room_id: &RoomId, event_id: &EventId, via_domains: &[String]) -> String {
    let mut url = format!("https://matrix.to/#/{room_id}/{event_id}");
    for (i, domain) in via_domains.iter().enumerate() {
        url.push_str(if i == 0 { "?via=" } else { "&via=" });
        url.push_str(domain);
    }
    url
}
