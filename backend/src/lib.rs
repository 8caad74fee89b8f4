//! Main library crate for the CityInfo backend.
//!
//! Exposes the application's modules so the binary entry point and the
//! integration tests can assemble the same router and state.

pub mod api;
pub mod auth;
pub mod config;
pub mod database;
pub mod errors;
pub mod middleware;
pub mod state;

use axum::Router;

use crate::state::AppState;

/// Builds the complete application router: the same API surface mounted
/// under each supported version prefix, wrapped in the shared layers.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", api::api_router(&state))
        .nest("/api/v2", api::api_router(&state))
        .layer(middleware::trace_layer())
        .layer(middleware::cors_layer())
        .with_state(state)
}
