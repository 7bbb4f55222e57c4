//! HTTP service for browsing and editing parks.
//!
//! Serves server-rendered HTML pages and a JSON API over a [`ParkStore`]
//! backend. This crate contains the route handlers, view-model contexts,
//! request decoders, template rendering, error mapping and router assembly.
//!
//! [`ParkStore`]: parks_storage::ParkStore

pub mod config;
pub mod context;
pub mod decode;
pub mod error;
pub mod handlers;
pub mod render;
pub mod router;
pub mod schema;
pub mod state;
