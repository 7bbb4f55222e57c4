//! Storage error types for parks-storage.
//!
//! [`StorageError`] covers the failure modes of the storage layer: missing
//! records, attempts to mutate an unpersisted park, database failures and
//! rows that cannot be decoded back into a [`Park`](crate::Park).

use thiserror::Error;

use crate::types::ParkId;

/// Errors produced by storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// A park with the given ID was not found.
    #[error("park not found: {0}")]
    ParkNotFound(ParkId),

    /// The park has no identifier, so it was never inserted.
    #[error("park has not been persisted yet")]
    Unpersisted,

    /// The underlying SQLite call failed.
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Applying schema migrations failed.
    #[error("migration error: {0}")]
    Migration(String),

    /// A stored row could not be decoded.
    #[error("corrupt row: {reason}")]
    Corrupt { reason: String },
}
