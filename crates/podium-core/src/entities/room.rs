//! Room state entity - one auditorium's vote state

use serde::{Deserialize, Serialize};

use crate::entities::TrackedMessage;
use crate::value_objects::EventId;

/// Vote state of a single auditorium room.
///
/// Messages are kept in the order they were first tracked (not the order
/// they were posted to the room); the ranking projection relies on this
/// order for tie-breaking.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomState {
    /// Q&A countdown target, epoch milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qa_start_time: Option<i64>,
    #[serde(default)]
    pub messages: Vec<TrackedMessage>,
}

impl RoomState {
    /// Check whether a message id is tracked in this room
    pub fn is_tracked(&self, message_id: &EventId) -> bool {
        self.messages.iter().any(|m| &m.event_id == message_id)
    }

    /// Get a tracked message by id
    pub fn message_mut(&mut self, message_id: &EventId) -> Option<&mut TrackedMessage> {
        self.messages.iter_mut().find(|m| &m.event_id == message_id)
    }

    /// Start tracking a message. Ids are unique within a room; tracking an
    /// already-tracked id is a no-op.
    pub fn track(&mut self, message: TrackedMessage) {
        if !self.is_tracked(&message.event_id) {
            self.messages.push(message);
        }
    }

    /// Remove a tracked message entirely. Returns `false` if absent.
    pub fn remove_message(&mut self, message_id: &EventId) -> bool {
        let before = self.messages.len();
        self.messages.retain(|m| &m.event_id != message_id);
        self.messages.len() != before
    }

    /// Remove a reaction id from whichever message and set contains it
    /// (at most one). Returns `false` if no message held it.
    pub fn remove_reaction(&mut self, reaction_id: &EventId) -> bool {
        self.messages.iter_mut().any(|m| m.remove_vote(reaction_id))
    }
}
