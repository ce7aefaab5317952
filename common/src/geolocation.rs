//! Device geolocation failures and the copy shown for them.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum GeolocationError {
    #[error("location permission denied")]
    PermissionDenied,
    #[error("location unavailable")]
    PositionUnavailable,
    #[error("location request timed out")]
    Timeout,
    #[error("geolocation is not supported")]
    Unsupported,
    #[error("geolocation failed: {0}")]
    Other(String),
}

impl GeolocationError {
    /// Map a `GeolocationPositionError.code` from the browser.
    pub fn from_code(code: u16, message: impl Into<String>) -> Self {
        match code {
            1 => GeolocationError::PermissionDenied,
            2 => GeolocationError::PositionUnavailable,
            3 => GeolocationError::Timeout,
            _ => GeolocationError::Other(message.into()),
        }
    }

    pub fn user_message(&self) -> &'static str {
        match self {
            GeolocationError::PermissionDenied => {
                "Location access was denied. Allow location access in your browser settings, or search for a place instead."
            }
            GeolocationError::PositionUnavailable => "We couldn't work out where you are right now. Try searching for a town or postcode.",
            GeolocationError::Timeout => "Finding your location took too long. Please try again.",
            GeolocationError::Unsupported | GeolocationError::Other(_) => {
                "We couldn't get your location. Try searching for a town or postcode."
            }
        }
    }
}
