//! # podium-engine
//!
//! The aggregation engine: an authoritative per-room vote ledger behind a
//! single exclusive lock, a pure ranking projection, and a lock-free cache
//! of the latest scoreboard per room for readers.

mod error;
mod ledger;
pub mod ranking;

pub use error::{EngineError, LedgerResult};
pub use ledger::VoteLedger;
