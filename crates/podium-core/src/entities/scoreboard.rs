//! Scoreboard - the derived, score-sorted view of a room
//!
//! Always rebuilt fresh from `RoomState`; never updated incrementally.

use serde::{Deserialize, Serialize};

/// Ranked view of one room's tracked messages, best question first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scoreboard {
    /// Q&A countdown target, epoch milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qa_start_time: Option<i64>,
    #[serde(default)]
    pub entries: Vec<ScoreboardEntry>,
}

/// One ranked question as shown to display collaborators
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreboardEntry {
    pub permalink: String,
    pub text: String,
    pub sender_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_http_url: Option<String>,
    pub score: i64,
}

impl Scoreboard {
    /// Check whether the scoreboard lists no questions
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
