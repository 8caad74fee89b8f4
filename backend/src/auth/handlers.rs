//! Handler functions for authentication-related API endpoints.
//!
//! These functions process incoming requests for token issuance: parse the
//! credential body, validate it against the `auth::service`, and return the
//! signed bearer token string.

use axum::extract::State;
use axum::Json;

use crate::auth::models::AuthenticationRequest;
use crate::errors::ApiError;
use crate::state::AppState;

/// POST /authentication/authenticate: 200 with the bearer token string, or
/// 401 when the credentials do not match a known user.
pub async fn authenticate(
    State(state): State<AppState>,
    Json(request): Json<AuthenticationRequest>,
) -> Result<String, ApiError> {
    let user = state
        .auth
        .validate_user_credentials(&request.user_name, &request.password)
        .ok_or(ApiError::Unauthorized)?;

    let token = state
        .auth
        .issue_token(&user)
        .map_err(|err| ApiError::Internal(err.to_string()))?;

    tracing::debug!(user = %user.user_name, "issued bearer token");
    Ok(token)
}
