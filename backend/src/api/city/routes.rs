//! Defines the HTTP routes for the city resource.
//!
//! Both routes require an authenticated caller; no city claim is needed for
//! reads at this level.

use axum::middleware;
use axum::routing::get;
use axum::Router;

use crate::api::city::handlers;
use crate::auth;
use crate::state::AppState;

pub fn city_router(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/cities", get(handlers::list_cities))
        .route("/cities/:city_id", get(handlers::get_city))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::middleware::require_auth,
        ))
}
