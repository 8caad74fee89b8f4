//! Core business logic for the authentication system.
//!
//! This service validates presented credentials against the built-in demo
//! user store and handles issuance and verification of signed bearer tokens.
//! Tokens are signed with a symmetric key (HMAC-SHA-256); issuer, audience,
//! and expiry are checked on every validation.

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::auth::errors::AuthError;
use crate::auth::models::{CityInfoUser, Claims};
use crate::config::AuthConfig;

#[derive(Clone)]
pub struct AuthService {
    config: AuthConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl AuthService {
    pub fn new(config: AuthConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.issuer]);
        validation.set_audience(&[&config.audience]);

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Checks the presented credentials against the user store and returns
    /// the matching identity, or `None` on any mismatch.
    ///
    /// The store is the built-in demo account list; a deployment would swap
    /// this for a directory lookup without touching the token path.
    pub fn validate_user_credentials(
        &self,
        user_name: &str,
        password: &str,
    ) -> Option<CityInfoUser> {
        demo_users()
            .into_iter()
            .find(|(user, expected)| user.user_name == user_name && *expected == password)
            .map(|(user, _)| user)
    }

    /// Issues a signed token for the validated identity, carrying subject,
    /// given name, family name, and city claims, expiring after the
    /// configured lifetime (one hour by default).
    pub fn issue_token(&self, user: &CityInfoUser) -> Result<String, AuthError> {
        let now = jsonwebtoken::get_current_timestamp();
        let claims = Claims {
            sub: user.user_id.to_string(),
            given_name: user.first_name.clone(),
            family_name: user.last_name.clone(),
            city: user.city.clone(),
            iss: self.config.issuer.clone(),
            aud: self.config.audience.clone(),
            exp: now + self.config.token_ttl.as_secs(),
        };
        let token = jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)?;
        Ok(token)
    }

    /// Verifies signature, issuer, audience, and expiry, returning the
    /// decoded claims.
    pub fn decode_token(&self, token: &str) -> Result<Claims, AuthError> {
        let data = jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &self.validation)?;
        Ok(data.claims)
    }
}

fn demo_users() -> [(CityInfoUser, &'static str); 2] {
    [
        (
            CityInfoUser {
                user_id: 1,
                user_name: "pjsaha".to_string(),
                first_name: "pj".to_string(),
                last_name: "saha".to_string(),
                city: "Paris".to_string(),
            },
            "cityinfopass",
        ),
        (
            CityInfoUser {
                user_id: 2,
                user_name: "kdockx".to_string(),
                first_name: "Kevin".to_string(),
                last_name: "Dockx".to_string(),
                city: "Antwerp".to_string(),
            },
            "cityinfopass",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn test_config() -> AuthConfig {
        AuthConfig {
            secret: "unit-test-signing-secret".to_string(),
            issuer: "cityinfo-api".to_string(),
            audience: "cityinfo-clients".to_string(),
            token_ttl: Duration::from_secs(3600),
            required_city: "Paris".to_string(),
        }
    }

    #[test]
    fn issued_token_round_trips_claims() {
        let service = AuthService::new(test_config());
        let user = service.validate_user_credentials("pjsaha", "cityinfopass").unwrap();
        let token = service.issue_token(&user).unwrap();

        let claims = service.decode_token(&token).unwrap();
        assert_eq!(claims.sub, "1");
        assert_eq!(claims.given_name, "pj");
        assert_eq!(claims.family_name, "saha");
        assert_eq!(claims.city, "Paris");
    }

    #[test]
    fn wrong_password_and_unknown_user_are_rejected() {
        let service = AuthService::new(test_config());
        assert!(service.validate_user_credentials("pjsaha", "wrong").is_none());
        assert!(service.validate_user_credentials("nobody", "cityinfopass").is_none());
    }

    #[test]
    fn token_from_another_issuer_is_rejected() {
        let mut other = test_config();
        other.issuer = "someone-else".to_string();
        let issuer = AuthService::new(other);
        let verifier = AuthService::new(test_config());

        let user = issuer.validate_user_credentials("pjsaha", "cityinfopass").unwrap();
        let token = issuer.issue_token(&user).unwrap();
        assert!(verifier.decode_token(&token).is_err());
    }

    #[test]
    fn token_for_another_audience_is_rejected() {
        let mut other = test_config();
        other.audience = "other-clients".to_string();
        let issuer = AuthService::new(other);
        let verifier = AuthService::new(test_config());

        let user = issuer.validate_user_credentials("pjsaha", "cityinfopass").unwrap();
        let token = issuer.issue_token(&user).unwrap();
        assert!(verifier.decode_token(&token).is_err());
    }

    #[test]
    fn expired_token_is_rejected() {
        let service = AuthService::new(test_config());
        // Far enough in the past to clear the default validation leeway.
        let claims = Claims {
            sub: "1".to_string(),
            given_name: "pj".to_string(),
            family_name: "saha".to_string(),
            city: "Paris".to_string(),
            iss: "cityinfo-api".to_string(),
            aud: "cityinfo-clients".to_string(),
            exp: jsonwebtoken::get_current_timestamp() - 7200,
        };
        let token = jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret("unit-test-signing-secret".as_bytes()),
        )
        .unwrap();
        assert!(service.decode_token(&token).is_err());
    }

    #[test]
    fn token_signed_with_a_different_key_is_rejected() {
        let mut other = test_config();
        other.secret = "a-completely-different-secret".to_string();
        let issuer = AuthService::new(other);
        let verifier = AuthService::new(test_config());

        let user = issuer.validate_user_credentials("pjsaha", "cityinfopass").unwrap();
        let token = issuer.issue_token(&user).unwrap();
        assert!(verifier.decode_token(&token).is_err());
    }
}
