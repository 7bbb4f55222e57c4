//! The [`ParkStore`] trait defining the repository contract for parks.
//!
//! All backends (InMemoryStore, SqliteStore) implement this trait, so the
//! server can swap them without changing handler logic.

use crate::error::StorageError;
use crate::types::{Park, ParkId};

/// The storage contract for park records.
///
/// The trait is synchronous; callers that share a store across async tasks
/// wrap it in an async mutex. Every mutating method is a single atomic write.
pub trait ParkStore {
    /// Lists all stored parks in the backend's natural (insertion) order.
    fn find_all(&self) -> Result<Vec<Park>, StorageError>;

    /// Retrieves a park by ID, or `None` if no such park exists.
    fn find_by_id(&self, id: ParkId) -> Result<Option<Park>, StorageError>;

    /// Inserts a park, assigning a fresh [`ParkId`] if it has none.
    ///
    /// Returns the persisted park, which always carries an ID.
    fn insert(&mut self, park: Park) -> Result<Park, StorageError>;

    /// Overwrites the stored name and coordinates of an existing park.
    fn update(&mut self, park: Park) -> Result<Park, StorageError>;

    /// Deletes an existing park.
    fn delete(&mut self, park: &Park) -> Result<(), StorageError>;
}
