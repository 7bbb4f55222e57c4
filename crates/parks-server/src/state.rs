//! Application state shared by every request.
//!
//! [`AppState`] holds the park store behind `Arc<tokio::sync::Mutex<>>` so
//! handlers await the lock without blocking the tokio runtime. A `Mutex`
//! rather than an `RwLock` because `rusqlite::Connection` is `!Sync`.

use std::sync::Arc;

use parks_storage::{ParkStore, SqliteStore};

use crate::error::ApiError;
use crate::render::Templates;

/// Store handle shared across handler tasks.
pub type SharedStore = Arc<tokio::sync::Mutex<dyn ParkStore + Send>>;

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    /// The park store (async Mutex, non-blocking await).
    pub store: SharedStore,
    /// Loaded page templates.
    pub templates: Arc<Templates>,
}

impl AppState {
    /// Wraps any store backend and template set.
    pub fn new<S>(store: S, templates: Templates) -> Self
    where
        S: ParkStore + Send + 'static,
    {
        let store: SharedStore = Arc::new(tokio::sync::Mutex::new(store));
        AppState {
            store,
            templates: Arc::new(templates),
        }
    }

    /// Creates an `AppState` with an in-memory database (for testing).
    pub fn in_memory() -> Result<Self, ApiError> {
        let store = SqliteStore::in_memory()?;
        Ok(AppState::new(store, Templates::embedded()?))
    }
}
