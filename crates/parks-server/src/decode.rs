//! Request decoders for park input.
//!
//! Extractors here turn path segments, urlencoded forms and JSON bodies into
//! typed values. Every decoding failure is reported as
//! [`ApiError::BadRequest`] so clients get a uniform 400 response.

use axum::extract::{Form, FromRequest, FromRequestParts, Json, Path, Request};
use axum::http::request::Parts;
use serde::Deserialize;

use parks_storage::{Coordinates, Park, ParkId};

use crate::error::ApiError;

/// The `{id}` path segment, parsed as a park identifier.
#[derive(Debug, Clone, Copy)]
pub struct ParkIdParam(pub ParkId);

impl<S> FromRequestParts<S> for ParkIdParam
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
        raw.parse::<ParkId>()
            .map(ParkIdParam)
            .map_err(|_| ApiError::BadRequest(format!("'{}' is not a valid park id", raw)))
    }
}

/// Raw form fields submitted by the create and edit pages.
#[derive(Debug, Clone, Deserialize)]
pub struct ParkForm {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl ParkForm {
    /// Checks the decoded values and produces the fields to store.
    pub fn validate(self) -> Result<ParkFields, ApiError> {
        ParkFields::new(self.name, Coordinates::new(self.latitude, self.longitude))
    }
}

/// Validated park attributes, ready to build or update a [`Park`].
#[derive(Debug, Clone, PartialEq)]
pub struct ParkFields {
    pub name: String,
    pub coordinates: Coordinates,
}

impl ParkFields {
    /// Trims `name` and rejects blank names and non-finite coordinates.
    pub fn new(name: String, coordinates: Coordinates) -> Result<Self, ApiError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ApiError::BadRequest("name must not be empty".to_string()));
        }
        if !coordinates.latitude.is_finite() || !coordinates.longitude.is_finite() {
            return Err(ApiError::BadRequest(
                "latitude and longitude must be finite numbers".to_string(),
            ));
        }
        Ok(ParkFields {
            name: name.to_string(),
            coordinates,
        })
    }

    /// Builds a new, unpersisted park.
    pub fn into_park(self) -> Park {
        Park::new(self.name, self.coordinates)
    }

    /// Overwrites the attributes of an existing park, keeping its id.
    pub fn apply_to(self, park: &mut Park) {
        park.name = self.name;
        park.coordinates = self.coordinates;
    }
}

/// A validated urlencoded park form.
#[derive(Debug, Clone)]
pub struct ValidForm(pub ParkFields);

impl<S> FromRequest<S> for ValidForm
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(form) = Form::<ParkForm>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
        form.validate().map(ValidForm)
    }
}

/// JSON body accepted by the API create and update endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct ParkPayload {
    pub name: String,
    pub coordinates: Coordinates,
}

/// A validated JSON park payload.
#[derive(Debug, Clone)]
pub struct ValidJson(pub ParkFields);

impl<S> FromRequest<S> for ValidJson
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<ParkPayload>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
        ParkFields::new(payload.name, payload.coordinates).map(ValidJson)
    }
}
