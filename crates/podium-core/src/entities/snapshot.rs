//! Snapshot - the unit of durability
//!
//! A snapshot is the complete serialized state of every tracked room. The
//! JSON shape is a stable external contract; loaders ignore any version
//! other than the current one rather than attempt migration.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::entities::RoomState;
use crate::value_objects::RoomId;

/// Current snapshot format version
pub const SNAPSHOT_VERSION: u32 = 1;

/// Versioned serialization of all room states.
///
/// Rooms are held in an ordered map so that identical state always
/// serializes to identical bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub version: u32,
    #[serde(default)]
    pub rooms: BTreeMap<RoomId, RoomState>,
}

impl Snapshot {
    /// Create a snapshot of the given rooms at the current format version
    pub fn new(rooms: BTreeMap<RoomId, RoomState>) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            rooms,
        }
    }

    /// Check whether this snapshot carries the current format version
    #[inline]
    pub fn is_current_version(&self) -> bool {
        self.version == SNAPSHOT_VERSION
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::new(BTreeMap::new())
    }
}
