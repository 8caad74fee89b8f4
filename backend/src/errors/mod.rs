//! Global application error types and handlers.
//!
//! This module defines the error taxonomy used across the backend and converts
//! each variant into a consistent HTTP response. Lookups that find nothing
//! return `Option` at the data layer; `NotFound` here is the handler-level
//! translation, never a panic. Store and serialization failures are logged
//! with full context and surfaced as a generic 500 without internal detail.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use validator::ValidationErrors;

use crate::auth::errors::AuthError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("resource not found")]
    NotFound,
    #[error("authentication required")]
    Unauthorized,
    #[error("insufficient permissions")]
    Forbidden,
    #[error("validation failed")]
    Validation(#[from] ValidationErrors),
    #[error("invalid patch document: {0}")]
    Patch(String),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        tracing::debug!(error = %err, "authentication rejected");
        ApiError::Unauthorized
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound => {
                (StatusCode::NOT_FOUND, Json(json!({ "message": "resource not found" })))
                    .into_response()
            }
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                [(header::WWW_AUTHENTICATE, "Bearer")],
                Json(json!({ "message": "authentication required" })),
            )
                .into_response(),
            ApiError::Forbidden => (
                StatusCode::FORBIDDEN,
                Json(json!({ "message": "insufficient permissions" })),
            )
                .into_response(),
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "message": "validation failed", "errors": errors })),
            )
                .into_response(),
            ApiError::Patch(reason) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "message": reason })),
            )
                .into_response(),
            ApiError::Database(err) => {
                tracing::error!(error = %err, "database failure while handling request");
                internal_response()
            }
            ApiError::Internal(reason) => {
                tracing::error!(reason = %reason, "internal failure while handling request");
                internal_response()
            }
        }
    }
}

fn internal_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "message": "A problem happened while handling your request." })),
    )
        .into_response()
}
