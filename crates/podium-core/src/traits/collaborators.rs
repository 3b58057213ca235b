//! Collaborator traits (ports) - define what the engine consumes
//!
//! The domain layer defines what it needs from the chat transport and the
//! room registry; the hosting process provides the implementations. All
//! transport failures are degradable: callers proceed without the optional
//! data or drop the operation as a no-op.

use async_trait::async_trait;
use thiserror::Error;

use crate::events::RoomEvent;
use crate::value_objects::{EventId, RoomId, UserId};

/// Failures reported by the chat transport
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("transport request failed: {0}")]
    Request(String),

    #[error("malformed transport response: {0}")]
    Malformed(String),
}

/// Result type for transport operations
pub type TransportResult<T> = Result<T, TransportError>;

/// A user's public profile as known to the transport
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserProfile {
    pub display_name: Option<String>,
    /// Avatar already resolved to a plain HTTP URL
    pub avatar_http_url: Option<String>,
}

/// The chat transport collaborator
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Fetch a single event by id from a room. `Ok(None)` means the event
    /// does not exist (e.g. it was already redacted).
    async fn fetch_event(
        &self,
        room_id: &RoomId,
        event_id: &EventId,
    ) -> TransportResult<Option<RoomEvent>>;

    /// Resolve a user's profile
    async fn resolve_profile(&self, user_id: &UserId) -> TransportResult<UserProfile>;
}

/// The room-registry collaborator
#[async_trait]
pub trait RoomDirectory: Send + Sync {
    /// Check whether a room is a tracked auditorium
    async fn is_auditorium(&self, room_id: &RoomId) -> bool;
}
