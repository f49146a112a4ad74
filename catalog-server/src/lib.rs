//! # Catalog Server
//!
//! A small catalog microservice: REST CRUD and paginated, filterable
//! queries over a single catalog-item entity, static picture retrieval,
//! and idempotent JSON-based database seeding.
//!
//! The server is built on Axum and uses SQLite (via sqlx) for persistent
//! storage. Handlers receive their store handle through [`AppState`] at
//! startup; there is no per-request service resolution.

pub mod config;
pub mod errors;
pub mod handlers;
pub mod routes;
pub mod seeder;
pub mod state;
pub mod store;

pub use state::AppState;

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the application router with middleware layers applied.
pub fn create_app(state: AppState) -> Router {
    routes::create_router()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
