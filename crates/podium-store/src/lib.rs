//! # podium-store
//!
//! Persistence layer: a durable, file-backed snapshot store. Saves are
//! atomic (write to a temp file, fsync, rename onto the canonical path) so
//! the canonical path always holds a complete snapshot; loads are tolerant
//! of missing, corrupt, or stale-format files.

mod snapshot_store;

pub use snapshot_store::{SnapshotStore, StoreError, StoreResult};
