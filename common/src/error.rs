//! Error kinds for calls that cross the HTTP boundary.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ApiError {
    /// The request never produced a response (DNS, connect, reset, ...).
    #[error("network error: {0}")]
    Network(String),

    #[error("request timed out after {seconds}s")]
    Timeout { seconds: u64 },

    /// The remote answered with a non-success status.
    #[error("server returned {status}: {message}")]
    Server { status: u16, message: String },

    /// The remote answered, but the payload did not match the expected shape.
    #[error("could not decode response: {0}")]
    Deserialization(String),
}

impl ApiError {
    /// Status code used when the error is handed across a server function.
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::Network(_) => 502,
            ApiError::Timeout { .. } => 504,
            ApiError::Server { status, .. } => *status,
            ApiError::Deserialization(_) => 502,
        }
    }

    /// Message suitable for an inline error block.
    ///
    /// Server messages are shown verbatim when present, everything else gets a
    /// generic fallback.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Server { message, .. } if !message.trim().is_empty() => message.clone(),
            ApiError::Timeout { .. } => "The request took too long. Please try again.".to_string(),
            _ => "Something went wrong. Please try again.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_is_shown_verbatim() {
        let err = ApiError::Server { status: 422, message: "Venue category is required".to_string() };
        assert_eq!(err.user_message(), "Venue category is required");
        assert_eq!(err.status_code(), 422);
    }

    #[test]
    fn empty_server_message_falls_back() {
        let err = ApiError::Server { status: 500, message: "  ".to_string() };
        assert_eq!(err.user_message(), "Something went wrong. Please try again.");
    }

    #[test]
    fn timeout_maps_to_gateway_timeout() {
        assert_eq!(ApiError::Timeout { seconds: 10 }.status_code(), 504);
    }
}
