//! File-backed snapshot store
//!
//! The canonical path must always contain either the complete previous
//! snapshot or the complete new one. Saves therefore never touch the
//! canonical file directly: the serialized document goes to a uniquely
//! named temp file in the same directory (rename is only atomic within a
//! filesystem), is synced, and is then renamed into place.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::fs::{self, File};
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};
use uuid::Uuid;

use podium_core::Snapshot;

/// Persistence errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Durable snapshot store bound to one canonical path
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    /// Create a store for the given canonical path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The canonical snapshot path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Durably persist a snapshot.
    ///
    /// On success the canonical path holds exactly this snapshot; on any
    /// failure it still holds the previous one.
    pub async fn save(&self, snapshot: &Snapshot) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let bytes = serde_json::to_vec_pretty(snapshot)?;
        let tmp = self.temp_path();

        let result = self.write_and_rename(&tmp, &bytes).await;
        if result.is_err() {
            // Leftover temp files are harmless but tidy up when we can
            fs::remove_file(&tmp).await.ok();
        }
        result?;

        debug!(
            path = %self.path.display(),
            rooms = snapshot.rooms.len(),
            bytes = bytes.len(),
            "Snapshot persisted"
        );
        Ok(())
    }

    /// Load the snapshot from the canonical path.
    ///
    /// A missing file means no prior state. Corrupt contents or an
    /// unsupported format version are logged and likewise treated as no
    /// prior state; startup never aborts on bad persisted data. Other I/O
    /// failures propagate.
    pub async fn load(&self) -> StoreResult<Option<Snapshot>> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No snapshot on disk");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let snapshot: Snapshot = match serde_json::from_slice(&bytes) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Snapshot is not parseable, starting from empty state"
                );
                return Ok(None);
            }
        };

        if !snapshot.is_current_version() {
            warn!(
                path = %self.path.display(),
                version = snapshot.version,
                "Snapshot has an unsupported format version, starting from empty state"
            );
            return Ok(None);
        }

        Ok(Some(snapshot))
    }

    async fn write_and_rename(&self, tmp: &Path, bytes: &[u8]) -> StoreResult<()> {
        let mut file = File::create(tmp).await?;
        file.write_all(bytes).await?;
        file.sync_all().await?;
        drop(file);
        fs::rename(tmp, &self.path).await?;
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "snapshot".to_string());
        self.path
            .with_file_name(format!("{file_name}.{}.tmp", Uuid::new_v4()))
    }
}
