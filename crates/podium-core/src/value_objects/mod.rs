//! Value objects - opaque identifiers and the vote kind

mod ids;
mod vote;

pub use ids::{EventId, RoomId, UserId};
pub use vote::VoteKind;
