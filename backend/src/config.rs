//! Endpoint configuration, read from the environment on each call.

use common::search_const::REQUEST_TIMEOUT_SECS;
use thiserror::Error;

pub const DEFAULT_HIGHLAND_API_URL: &str = "http://127.0.0.1:8000/api";
pub const DEFAULT_PLACES_API_URL: &str = "https://maps.googleapis.com/maps/api";
pub const DEFAULT_PLACES_REGION: &str = "gb";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a whole number of seconds, got {value:?}")]
    InvalidTimeout { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub highland_api_url: String,
    pub places_api_url: String,
    pub places_api_key: String,
    pub places_region: String,
    pub timeout_secs: u64,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`ApiConfig::from_env`] with an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let timeout_secs = match lookup("HTTP_TIMEOUT_SECS") {
            None => REQUEST_TIMEOUT_SECS,
            Some(value) => value
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::InvalidTimeout { name: "HTTP_TIMEOUT_SECS", value })?,
        };
        Ok(Self {
            highland_api_url: trim_base(lookup("HIGHLAND_API_URL").unwrap_or(DEFAULT_HIGHLAND_API_URL.to_string())),
            places_api_url: trim_base(lookup("PLACES_API_URL").unwrap_or(DEFAULT_PLACES_API_URL.to_string())),
            places_api_key: lookup("PLACES_API_KEY").unwrap_or_default(),
            places_region: lookup("PLACES_REGION").unwrap_or(DEFAULT_PLACES_REGION.to_string()),
            timeout_secs,
        })
    }
}

fn trim_base(url: String) -> String {
    url.trim_end_matches('/').to_string()
}
