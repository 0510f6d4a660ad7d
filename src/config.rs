use std::env;

use thiserror::Error;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 4000;
pub const DEFAULT_DATABASE_URL: &str = "ecommerce.db";
pub const DEFAULT_API_URL: &str = "http://localhost:4000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("PORT must be a valid number, got '{0}'")]
    InvalidPort(String),
}

/// Service settings. Every value has a default so the service starts with an
/// empty environment.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            database_url: lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
        })
    }
}

/// Base URL of the service as seen by the storefront client.
pub fn api_url_from_env() -> String {
    env::var("STOREFRONT_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}
