//! # rollcall-store: Snapshot Persistence for Rollcall
//!
//! This crate persists the member registry as a single JSON snapshot.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Rollcall Data Flow                               │
//! │                                                                         │
//! │  Process start                                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  store.load() ──► registry.hydrate(snapshot)                           │
//! │                                                                         │
//! │  After every successful add/remove                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  store.save(registry.list()) ──► snapshot file OVERWRITTEN             │
//! │                                                                         │
//! │  The snapshot is a direct field-for-field dump of the member list.     │
//! │  No versioning, no migration: state never diverges from storage for    │
//! │  more than one operation.                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`snapshot`] - `SnapshotStore` trait, JSON file and in-memory impls
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust,no_run
//! use rollcall_store::{JsonSnapshotStore, SnapshotStore};
//!
//! let store = JsonSnapshotStore::new("/var/lib/rollcall/members.json");
//! let members = store.load().unwrap_or_default();
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod snapshot;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::StoreError;
pub use snapshot::{JsonSnapshotStore, MemorySnapshotStore, SnapshotStore};
