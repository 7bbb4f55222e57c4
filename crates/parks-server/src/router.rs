//! Router assembly for the parks service.
//!
//! [`build_router`] wires the HTML pages, the JSON API and the health probe
//! to their routes with CORS and tracing middleware layers.

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{api, health, website};
use crate::state::AppState;

/// Builds the complete axum router.
///
/// Routes use axum 0.8 `/{param}` path syntax. The static `/parks/create`
/// segment takes priority over `/parks/{id}`.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // HTML pages
        .route("/", get(website::index))
        .route("/parks", get(website::index))
        .route(
            "/parks/create",
            get(website::create_form).post(website::create_submit),
        )
        .route("/parks/{id}", get(website::show))
        .route(
            "/parks/{id}/edit",
            get(website::edit_form).post(website::edit_submit),
        )
        .route("/parks/{id}/delete", get(website::delete))
        // JSON API
        .route(
            "/api/v1/parks",
            get(api::list_parks).post(api::create_park),
        )
        .route(
            "/api/v1/parks/{id}",
            get(api::get_park)
                .put(api::update_park)
                .delete(api::delete_park),
        )
        .route("/health", get(health::health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
