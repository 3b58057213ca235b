//! # podium-gateway
//!
//! The inbound edge of the engine: classifies raw room events, resolves
//! reaction targets through the chat transport, dispatches moderator
//! commands, and drives the vote ledger. The transport collaborator calls
//! [`EventIngest::handle_event`] once per event; there is no backpressure
//! and nothing here blocks readers.

pub mod classify;
pub mod commands;
mod ingest;

pub use classify::{classify, InboundEvent};
pub use commands::{Command, CommandPolicy};
pub use ingest::EventIngest;
