//! Middleware for protecting authenticated routes and handling authorization.
//!
//! This module validates bearer tokens on the way in and enforces the city
//! claim policy on the points-of-interest routes. Claim authorization itself
//! is a pure function over the decoded claims, independent of any identity
//! provider, composed here into request-layer middleware.

use axum::http::{header, HeaderMap, Request};
use axum::middleware::Next;
use axum::response::Response;
use axum::extract::State;

use crate::auth::errors::AuthError;
use crate::auth::models::Claims;
use crate::errors::ApiError;
use crate::state::AppState;

/// Requires a valid bearer token and stores the decoded claims in the request
/// extensions for downstream layers.
pub async fn require_auth<B>(
    State(state): State<AppState>,
    mut request: Request<B>,
    next: Next<B>,
) -> Result<Response, ApiError> {
    let token = bearer_token(request.headers()).ok_or(AuthError::MissingToken)?;
    let claims = state.auth.decode_token(token)?;
    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}

/// Requires the authenticated caller's `city` claim to match the configured
/// city. Must run after `require_auth` has populated the claims.
pub async fn require_city_claim<B>(
    State(state): State<AppState>,
    request: Request<B>,
    next: Next<B>,
) -> Result<Response, ApiError> {
    let claims = request
        .extensions()
        .get::<Claims>()
        .ok_or(ApiError::Unauthorized)?;

    if !claim_matches(claims, "city", &state.config.auth.required_city) {
        tracing::debug!(
            city = %claims.city,
            required = %state.config.auth.required_city,
            "city claim mismatch"
        );
        return Err(ApiError::Forbidden);
    }
    Ok(next.run(request).await)
}

/// Pure allow/deny decision: does the named claim carry the required value?
/// Unknown claim names always deny.
pub fn claim_matches(claims: &Claims, claim: &str, required_value: &str) -> bool {
    let value = match claim {
        "sub" => &claims.sub,
        "given_name" => &claims.given_name,
        "family_name" => &claims.family_name,
        "city" => &claims.city,
        _ => return false,
    };
    value == required_value
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}
