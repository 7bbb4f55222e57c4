//! Park request/response types for the JSON API.

use serde::Serialize;

use parks_storage::{Coordinates, Park, ParkId};

use crate::error::ApiError;

/// A persisted park as returned by the API.
#[derive(Debug, Clone, Serialize)]
pub struct ParkView {
    pub id: ParkId,
    pub name: String,
    pub coordinates: Coordinates,
}

impl TryFrom<Park> for ParkView {
    type Error = ApiError;

    fn try_from(park: Park) -> Result<Self, Self::Error> {
        Ok(ParkView {
            id: park.persisted_id()?,
            name: park.name,
            coordinates: park.coordinates,
        })
    }
}

/// Response for listing all parks.
#[derive(Debug, Clone, Serialize)]
pub struct ParkListResponse {
    pub parks: Vec<ParkView>,
}
