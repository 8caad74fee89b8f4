//! Central module for organizing the application's main API endpoints.
//!
//! This module acts as a top-level container for the city and
//! points-of-interest resources and assembles one router serving a single API
//! version; the main entry point mounts it under each versioned path prefix.
//! Core authentication routes are handled separately in `crate::auth`.

use axum::Router;

use crate::auth;
use crate::state::AppState;

pub mod city;
pub mod point_of_interest;

/// One complete, unversioned API surface. Both supported versions serve the
/// same handler set.
pub fn api_router(state: &AppState) -> Router<AppState> {
    Router::new()
        .merge(auth::routes::authentication_router())
        .merge(city::routes::city_router(state))
        .merge(point_of_interest::routes::points_of_interest_router(state))
}
