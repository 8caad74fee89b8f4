//! Central module for application-wide configuration settings.
//!
//! This module handles loading and managing configuration parameters such as
//! the database URL, server address, token signing material, and mail delivery
//! settings. Everything is read from the environment once at startup into a
//! typed structure; nothing else in the application touches `std::env`.

use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),
    #[error("invalid value for {name}: {value}")]
    InvalidVar { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub listen_addr: SocketAddr,
    pub database_url: String,
    pub auth: AuthConfig,
    pub mail: MailConfig,
}

#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Symmetric signing key for issued tokens.
    pub secret: String,
    pub issuer: String,
    pub audience: String,
    pub token_ttl: Duration,
    /// Value the `city` claim must carry to reach the points-of-interest routes.
    pub required_city: String,
}

#[derive(Debug, Clone)]
pub struct MailConfig {
    pub service: MailServiceKind,
    pub mail_from: String,
    pub mail_to: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MailServiceKind {
    Local,
    Cloud,
}

impl AppConfig {
    /// Reads the full configuration from the environment.
    ///
    /// `CITYINFO_AUTH_SECRET` is the only required variable; everything else
    /// falls back to a development default.
    pub fn from_env() -> Result<Self, ConfigError> {
        let listen_addr = parsed_or(
            "CITYINFO_LISTEN_ADDR",
            SocketAddr::from(([127, 0, 0, 1], 3000)),
        )?;
        let database_url =
            or_default("CITYINFO_DATABASE_URL", "sqlite://cityinfo.db");

        let token_ttl_secs: u64 = parsed_or("CITYINFO_TOKEN_TTL_SECS", 3600)?;
        let auth = AuthConfig {
            secret: required("CITYINFO_AUTH_SECRET")?,
            issuer: or_default("CITYINFO_AUTH_ISSUER", "cityinfo-api"),
            audience: or_default("CITYINFO_AUTH_AUDIENCE", "cityinfo-clients"),
            token_ttl: Duration::from_secs(token_ttl_secs),
            required_city: or_default("CITYINFO_REQUIRED_CITY", "Paris"),
        };

        let service = match or_default("CITYINFO_MAIL_SERVICE", "local").as_str() {
            "local" => MailServiceKind::Local,
            "cloud" => MailServiceKind::Cloud,
            other => {
                return Err(ConfigError::InvalidVar {
                    name: "CITYINFO_MAIL_SERVICE",
                    value: other.to_string(),
                })
            }
        };
        let mail = MailConfig {
            service,
            mail_from: or_default("CITYINFO_MAIL_FROM", "noreply@mycompany.com"),
            mail_to: or_default("CITYINFO_MAIL_TO", "admin@mycompany.com"),
        };

        Ok(Self {
            listen_addr,
            database_url,
            auth,
            mail,
        })
    }
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::MissingVar(name))
}

fn or_default(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn parsed_or<T: std::str::FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(value) => value.parse().map_err(|_| ConfigError::InvalidVar {
            name,
            value,
        }),
        Err(_) => Ok(default),
    }
}
