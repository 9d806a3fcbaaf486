//! # Snapshot Store
//!
//! The persistence seam between the registry and durable storage.
//!
//! ## Implementations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      SnapshotStore trait                                │
//! │                                                                         │
//! │   load() ──► Vec<Member>        save(&[Member]) ──► overwrite blob     │
//! │                                                                         │
//! │   ┌───────────────────────┐    ┌───────────────────────────┐           │
//! │   │   JsonSnapshotStore   │    │    MemorySnapshotStore    │           │
//! │   │   one JSON file,      │    │    Mutex<Vec<Member>>,    │           │
//! │   │   missing file = []   │    │    for tests              │           │
//! │   └───────────────────────┘    └───────────────────────────┘           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The dump is field-for-field: `load()` immediately followed by `save()`
//! reproduces the identical member list, in the same order.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::debug;

use rollcall_core::Member;

use crate::error::StoreResult;

// =============================================================================
// Trait
// =============================================================================

/// A place the member registry can be snapshotted to and hydrated from.
///
/// Implementations must treat "nothing stored yet" as an empty member list,
/// not an error, so first startup works against a blank store.
pub trait SnapshotStore: Send + Sync {
    /// Loads the stored snapshot. Called once at startup.
    fn load(&self) -> StoreResult<Vec<Member>>;

    /// Overwrites the snapshot with the given member list. Called after
    /// every successful registry mutation.
    fn save(&self, members: &[Member]) -> StoreResult<()>;
}

// =============================================================================
// JSON File Store
// =============================================================================

/// File-backed store: one path, one JSON array of members.
#[derive(Debug)]
pub struct JsonSnapshotStore {
    path: PathBuf,
}

impl JsonSnapshotStore {
    /// Creates a store over the given snapshot path. The file is created on
    /// first save; a missing file loads as an empty member list.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonSnapshotStore { path: path.into() }
    }

    /// The snapshot path this store reads and overwrites.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for JsonSnapshotStore {
    fn load(&self) -> StoreResult<Vec<Member>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no snapshot file, starting empty");
            return Ok(Vec::new());
        }

        let raw = std::fs::read_to_string(&self.path)?;
        let members: Vec<Member> = serde_json::from_str(&raw)?;
        debug!(
            path = %self.path.display(),
            count = members.len(),
            "snapshot loaded"
        );
        Ok(members)
    }

    fn save(&self, members: &[Member]) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let raw = serde_json::to_string(members)?;
        std::fs::write(&self.path, raw)?;
        debug!(
            path = %self.path.display(),
            count = members.len(),
            "snapshot saved"
        );
        Ok(())
    }
}

// =============================================================================
// In-Memory Store
// =============================================================================

/// In-memory store for tests and ephemeral runs. Holds the snapshot behind
/// a `Mutex` so the trait's `&self` methods work unchanged.
#[derive(Debug, Default)]
pub struct MemorySnapshotStore {
    snapshot: Mutex<Vec<Member>>,
}

impl MemorySnapshotStore {
    /// Creates an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with a snapshot.
    pub fn with_snapshot(members: Vec<Member>) -> Self {
        MemorySnapshotStore {
            snapshot: Mutex::new(members),
        }
    }
}

impl SnapshotStore for MemorySnapshotStore {
    fn load(&self) -> StoreResult<Vec<Member>> {
        Ok(self.snapshot.lock().expect("snapshot mutex poisoned").clone())
    }

    fn save(&self, members: &[Member]) -> StoreResult<()> {
        *self.snapshot.lock().expect("snapshot mutex poisoned") = members.to_vec();
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
