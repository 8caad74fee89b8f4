//! Defines the HTTP routes for a city's points of interest.
//!
//! The whole resource, reads included, is restricted to callers whose
//! `city` claim matches the configured city, mirroring the policy on the
//! original surface. Layer order matters: `require_auth` must run first so
//! the claims are available to the city-claim check.

use axum::middleware;
use axum::routing::get;
use axum::Router;

use crate::api::point_of_interest::handlers;
use crate::auth;
use crate::state::AppState;

pub fn points_of_interest_router(state: &AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/cities/:city_id/pointsofinterest",
            get(handlers::list_points_of_interest).post(handlers::create_point_of_interest),
        )
        .route(
            "/cities/:city_id/pointsofinterest/:point_id",
            get(handlers::get_point_of_interest)
                .put(handlers::update_point_of_interest)
                .patch(handlers::patch_point_of_interest)
                .delete(handlers::delete_point_of_interest),
        )
        // Innermost layer: runs after require_auth has decoded the claims.
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::middleware::require_city_claim,
        ))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::middleware::require_auth,
        ))
}
