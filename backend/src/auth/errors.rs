//! Custom error types specific to authentication failures.
//!
//! This module defines the errors that can occur while validating credentials
//! or while issuing and verifying bearer tokens, providing structured causes
//! that the API layer collapses into 401 responses.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("missing bearer token")]
    MissingToken,
    #[error("invalid bearer token: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),
}
