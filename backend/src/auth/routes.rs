//! Defines the HTTP routes specifically for authentication.
//!
//! The authenticate endpoint is the only route in the API reachable without a
//! bearer token. It is mounted under each API version prefix by the main
//! router.

use axum::routing::post;
use axum::Router;

use crate::auth::handlers;
use crate::state::AppState;

pub fn authentication_router() -> Router<AppState> {
    Router::new().route("/authentication/authenticate", post(handlers::authenticate))
}
