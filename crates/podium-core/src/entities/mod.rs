//! Domain entities - the tracked vote state and its projections

mod message;
mod room;
mod scoreboard;
mod snapshot;

pub use message::{ResolvedMessage, TrackedMessage};
pub use room::RoomState;
pub use scoreboard::{Scoreboard, ScoreboardEntry};
pub use snapshot::{Snapshot, SNAPSHOT_VERSION};
