//! # podium-core
//!
//! Domain layer containing entities, value objects, wire event shapes, and
//! collaborator traits. This crate has zero dependencies on infrastructure
//! (filesystem, web framework, chat client, etc.).

pub mod entities;
pub mod events;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    ResolvedMessage, RoomState, Scoreboard, ScoreboardEntry, Snapshot, TrackedMessage,
    SNAPSHOT_VERSION,
};
pub use events::{Annotation, RoomEvent};
pub use traits::{ChatTransport, RoomDirectory, TransportError, TransportResult, UserProfile};
pub use value_objects::{EventId, RoomId, UserId, VoteKind};
