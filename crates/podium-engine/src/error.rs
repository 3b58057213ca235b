//! Engine error types

use thiserror::Error;

use podium_store::StoreError;

/// Errors surfaced by ledger operations.
///
/// Only persistence can fail; everything else degrades to a no-op by
/// design (dropped reactions, absent ids, unknown rooms).
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("snapshot persistence failed: {0}")]
    Store(#[from] StoreError),
}

/// Result type for ledger operations
pub type LedgerResult<T> = Result<T, EngineError>;
