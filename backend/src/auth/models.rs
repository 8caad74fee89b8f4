//! Data structures for authentication-related entities.
//!
//! This module defines models for the authenticate request body, the
//! validated user identity, and the token claims, used for data transfer and
//! internal representation within the authentication flow.

use serde::{Deserialize, Serialize};

/// Credentials presented to the authenticate endpoint. PascalCase aliases
/// keep the endpoint lenient about member casing, like the original surface.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticationRequest {
    #[serde(alias = "UserName")]
    pub user_name: String,
    #[serde(alias = "Password")]
    pub password: String,
}

/// A validated identity, produced by credential validation and used as the
/// source for every claim carried in an issued token.
#[derive(Debug, Clone)]
pub struct CityInfoUser {
    pub user_id: i64,
    pub user_name: String,
    pub first_name: String,
    pub last_name: String,
    pub city: String,
}

/// Claims carried inside an issued bearer token. Issuer, audience, and expiry
/// are enforced on validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub given_name: String,
    pub family_name: String,
    pub city: String,
    pub iss: String,
    pub aud: String,
    pub exp: u64,
}
