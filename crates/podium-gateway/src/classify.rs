//! Inbound event classification
//!
//! Runs before any lock is taken or any collaborator is called. Only three
//! shapes matter to the engine: a vote reaction, a redaction, and plain
//! text (checked later for moderator commands). Everything else is noise.

use podium_core::events::{RoomEvent, EVENT_TYPE_REACTION};
use podium_core::{EventId, VoteKind};

/// What an inbound room event means to the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundEvent {
    /// A recognized vote reaction on some target event
    Vote {
        target: EventId,
        vote: VoteKind,
    },
    /// A redaction; the redacted id's original role is unknown
    Redaction {
        redacted: EventId,
    },
    /// A plain-text room message
    Text {
        body: String,
    },
    /// Anything the engine does not act on
    Ignored,
}

/// Classify a raw room event.
///
/// Reactions require an annotation relation with a non-empty target and a
/// key that normalizes to one of the two vote emoji; reactions with any
/// other key are filtered out here, before the ledger lock.
pub fn classify(event: &RoomEvent) -> InboundEvent {
    if let Some(redacted) = event.redaction_target() {
        return InboundEvent::Redaction { redacted };
    }

    if event.event_type == EVENT_TYPE_REACTION {
        if let Some(annotation) = event.annotation() {
            if let Some(vote) = VoteKind::from_annotation_key(&annotation.key) {
                return InboundEvent::Vote {
                    target: annotation.target,
                    vote,
                };
            }
        }
        return InboundEvent::Ignored;
    }

    if let Some(body) = event.text_body() {
        return InboundEvent::Text {
            body: body.to_string(),
        };
    }

    InboundEvent::Ignored
}
