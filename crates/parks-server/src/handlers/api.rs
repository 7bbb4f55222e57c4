//! JSON API for parks, mounted under `/api/v1/parks`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::decode::{ParkIdParam, ValidJson};
use crate::error::ApiError;
use crate::schema::parks::{ParkListResponse, ParkView};
use crate::state::AppState;

use super::require_park;

/// Lists all parks.
///
/// `GET /api/v1/parks`
pub async fn list_parks(
    State(state): State<AppState>,
) -> Result<Json<ParkListResponse>, ApiError> {
    let parks = state.store.lock().await.find_all()?;
    let parks = parks
        .into_iter()
        .map(ParkView::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Json(ParkListResponse { parks }))
}

/// Creates a park.
///
/// `POST /api/v1/parks`
pub async fn create_park(
    State(state): State<AppState>,
    ValidJson(fields): ValidJson,
) -> Result<(StatusCode, Json<ParkView>), ApiError> {
    let park = state.store.lock().await.insert(fields.into_park())?;
    let view = ParkView::try_from(park)?;
    tracing::info!(park_id = %view.id, name = %view.name, "created park");
    Ok((StatusCode::CREATED, Json(view)))
}

/// Gets a park by ID.
///
/// `GET /api/v1/parks/{id}`
pub async fn get_park(
    State(state): State<AppState>,
    ParkIdParam(id): ParkIdParam,
) -> Result<Json<ParkView>, ApiError> {
    let found = state.store.lock().await.find_by_id(id)?;
    let park = require_park(found, id)?;
    Ok(Json(ParkView::try_from(park)?))
}

/// Replaces a park's name and coordinates.
///
/// `PUT /api/v1/parks/{id}`
pub async fn update_park(
    State(state): State<AppState>,
    ParkIdParam(id): ParkIdParam,
    ValidJson(fields): ValidJson,
) -> Result<Json<ParkView>, ApiError> {
    let park = {
        let mut store = state.store.lock().await;
        let mut park = require_park(store.find_by_id(id)?, id)?;
        fields.apply_to(&mut park);
        store.update(park)?
    };
    tracing::info!(park_id = %id, name = %park.name, "updated park");
    Ok(Json(ParkView::try_from(park)?))
}

/// Deletes a park by ID.
///
/// `DELETE /api/v1/parks/{id}`
pub async fn delete_park(
    State(state): State<AppState>,
    ParkIdParam(id): ParkIdParam,
) -> Result<Json<serde_json::Value>, ApiError> {
    {
        let mut store = state.store.lock().await;
        let park = require_park(store.find_by_id(id)?, id)?;
        store.delete(&park)?;
    }
    tracing::info!(park_id = %id, "deleted park");
    Ok(Json(serde_json::json!({ "success": true })))
}
