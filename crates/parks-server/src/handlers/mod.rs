//! HTTP handler modules.
//!
//! Handlers take their inputs as extractors, lock the shared store for the
//! duration of their store calls, and either render a page or return JSON.

pub mod api;
pub mod health;
pub mod website;

use parks_storage::{Park, ParkId};

use crate::error::ApiError;

/// Turns a store lookup miss into a 404.
fn require_park(found: Option<Park>, id: ParkId) -> Result<Park, ApiError> {
    found.ok_or_else(|| ApiError::NotFound(format!("park {} was not found", id)))
}
