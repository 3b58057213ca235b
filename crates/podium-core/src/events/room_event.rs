//! Room event - the raw shape the transport delivers per event
//!
//! Content stays an untyped JSON value; the accessors below pull out the
//! few shapes this system cares about (annotation relations, plain text
//! bodies, redaction targets) and return `None` for anything malformed.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::value_objects::{EventId, UserId};

/// Event type of a room message
pub const EVENT_TYPE_MESSAGE: &str = "m.room.message";
/// Event type of a reaction
pub const EVENT_TYPE_REACTION: &str = "m.reaction";
/// Event type of a redaction
pub const EVENT_TYPE_REDACTION: &str = "m.room.redaction";
/// Relation type of an emoji annotation
pub const RELATION_ANNOTATION: &str = "m.annotation";
/// Message type of plain text
pub const MSGTYPE_TEXT: &str = "m.text";

/// A single inbound room event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomEvent {
    #[serde(rename = "type")]
    pub event_type: String,
    pub sender: UserId,
    pub event_id: EventId,
    #[serde(default)]
    pub content: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redacts: Option<EventId>,
}

/// An annotation relation extracted from a reaction event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    /// The event being annotated
    pub target: EventId,
    /// The annotation key (for reactions, the emoji)
    pub key: String,
}

#[derive(Debug, Deserialize)]
struct RelatesTo {
    rel_type: String,
    #[serde(default)]
    event_id: String,
    #[serde(default)]
    key: String,
}

impl RoomEvent {
    /// Extract the annotation relation, if this event carries a well-formed
    /// one with a non-empty target.
    pub fn annotation(&self) -> Option<Annotation> {
        let relates = self.content.get("m.relates_to")?;
        let relates: RelatesTo = serde_json::from_value(relates.clone()).ok()?;
        if relates.rel_type != RELATION_ANNOTATION || relates.event_id.is_empty() {
            return None;
        }
        Some(Annotation {
            target: EventId::new(relates.event_id),
            key: relates.key,
        })
    }

    /// Extract the plain-text body, if this is an `m.text` room message
    pub fn text_body(&self) -> Option<&str> {
        if self.event_type != EVENT_TYPE_MESSAGE {
            return None;
        }
        if self.content.get("msgtype")?.as_str()? != MSGTYPE_TEXT {
            return None;
        }
        self.content.get("body")?.as_str()
    }

    /// Extract the redaction target, if this is a redaction.
    ///
    /// The target may arrive as the top-level `redacts` field or embedded in
    /// content (newer room versions); both are honored.
    pub fn redaction_target(&self) -> Option<EventId> {
        if self.event_type != EVENT_TYPE_REDACTION {
            return None;
        }
        if let Some(target) = &self.redacts {
            if !target.is_empty() {
                return Some(target.clone());
            }
        }
        self.content
            .get("redacts")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(EventId::new)
    }
}
