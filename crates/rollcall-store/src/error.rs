//! # Store Error Types
//!
//! Failures while loading or saving the member snapshot.
//!
//! ## Containment Contract
//! Store errors never propagate as domain errors: the app layer logs them
//! and carries on. A failed load yields an empty registry; a failed save
//! leaves the previous snapshot in place until the next mutation.

use thiserror::Error;

/// Snapshot persistence errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// File could not be read or written.
    #[error("snapshot I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot contents were not a valid member dump.
    #[error("snapshot could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Convenience type alias for Results with StoreError.
pub type StoreResult<T> = Result<T, StoreError>;
