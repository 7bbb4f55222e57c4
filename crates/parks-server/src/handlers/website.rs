//! Server-rendered HTML pages for browsing and editing parks.

use axum::extract::State;

use crate::context::{CreateContext, DeleteContext, IndexContext, ShowContext};
use crate::decode::{ParkIdParam, ValidForm};
use crate::error::ApiError;
use crate::render::HtmlPage;
use crate::state::AppState;

use super::require_park;

/// Lists all parks.
///
/// `GET /` and `GET /parks`
pub async fn index(State(state): State<AppState>) -> Result<HtmlPage, ApiError> {
    let parks = state.store.lock().await.find_all()?;
    let html = state.templates.render("index", &IndexContext::new(&parks))?;
    Ok(HtmlPage::new(html))
}

/// Shows a single park.
///
/// `GET /parks/{id}`
pub async fn show(
    State(state): State<AppState>,
    ParkIdParam(id): ParkIdParam,
) -> Result<HtmlPage, ApiError> {
    let found = state.store.lock().await.find_by_id(id)?;
    let park = require_park(found, id)?;
    let html = state.templates.render("show", &ShowContext::new(&park))?;
    Ok(HtmlPage::new(html))
}

/// Displays the empty create form.
///
/// `GET /parks/create`
pub async fn create_form(State(state): State<AppState>) -> Result<HtmlPage, ApiError> {
    let html = state.templates.render("create", &CreateContext::blank())?;
    Ok(HtmlPage::new(html))
}

/// Inserts a park from the submitted form and shows it.
///
/// `POST /parks/create`
pub async fn create_submit(
    State(state): State<AppState>,
    ValidForm(fields): ValidForm,
) -> Result<HtmlPage, ApiError> {
    let park = state.store.lock().await.insert(fields.into_park())?;
    tracing::info!(park_id = %park.persisted_id()?, name = %park.name, "created park");
    let html = state.templates.render("show", &ShowContext::new(&park))?;
    Ok(HtmlPage::new(html))
}

/// Displays the create form pre-filled with an existing park.
///
/// `GET /parks/{id}/edit`
pub async fn edit_form(
    State(state): State<AppState>,
    ParkIdParam(id): ParkIdParam,
) -> Result<HtmlPage, ApiError> {
    let found = state.store.lock().await.find_by_id(id)?;
    let park = require_park(found, id)?;
    let html = state.templates.render("create", &CreateContext::editing(&park))?;
    Ok(HtmlPage::with_reload(html))
}

/// Overwrites a park with the submitted form and shows it.
///
/// `POST /parks/{id}/edit`
pub async fn edit_submit(
    State(state): State<AppState>,
    ParkIdParam(id): ParkIdParam,
    ValidForm(fields): ValidForm,
) -> Result<HtmlPage, ApiError> {
    let park = {
        let mut store = state.store.lock().await;
        let mut park = require_park(store.find_by_id(id)?, id)?;
        fields.apply_to(&mut park);
        store.update(park)?
    };
    tracing::info!(park_id = %id, name = %park.name, "updated park");
    let html = state.templates.render("show", &ShowContext::new(&park))?;
    Ok(HtmlPage::with_reload(html))
}

/// Deletes a park and confirms with its last known values.
///
/// `GET /parks/{id}/delete`
pub async fn delete(
    State(state): State<AppState>,
    ParkIdParam(id): ParkIdParam,
) -> Result<HtmlPage, ApiError> {
    let park = {
        let mut store = state.store.lock().await;
        let park = require_park(store.find_by_id(id)?, id)?;
        store.delete(&park)?;
        park
    };
    tracing::info!(park_id = %id, name = %park.name, "deleted park");
    let html = state.templates.render("delete", &DeleteContext::new(&park))?;
    Ok(HtmlPage::new(html))
}
