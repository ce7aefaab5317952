//! JSON request helpers that sort every failure into an [`ApiError`] kind.

use std::time::Duration;

use common::error::ApiError;
use reqwest::{Client, Response, header::CONTENT_TYPE};
use serde::{Serialize, de::DeserializeOwned};

/// Longest server error body echoed back to the user.
const MAX_ERROR_MESSAGE_LEN: usize = 500;

pub fn build_http_client(timeout_secs: u64) -> Result<Client, ApiError> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .map_err(|e| ApiError::Network(format!("could not build http client: {e}")))
}

pub async fn get_json<T: DeserializeOwned>(client: &Client, url: &str, timeout_secs: u64) -> Result<T, ApiError> {
    let t0 = std::time::Instant::now();
    let response = client.get(url).send().await.map_err(|e| classify(e, timeout_secs))?;
    tracing::debug!("GET {} -> {} in {}ms", redact_key(url), response.status(), t0.elapsed().as_millis());
    read_json(response, timeout_secs).await
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(client: &Client, url: &str, body: &B, timeout_secs: u64) -> Result<T, ApiError> {
    let body = serde_json::to_string(body).map_err(|e| ApiError::Deserialization(format!("could not encode request: {e}")))?;
    let t0 = std::time::Instant::now();
    let response = client
        .post(url)
        .header(CONTENT_TYPE, "application/json")
        .body(body)
        .send()
        .await
        .map_err(|e| classify(e, timeout_secs))?;
    tracing::debug!("POST {} -> {} in {}ms", redact_key(url), response.status(), t0.elapsed().as_millis());
    read_json(response, timeout_secs).await
}

async fn read_json<T: DeserializeOwned>(response: Response, timeout_secs: u64) -> Result<T, ApiError> {
    let status = response.status();
    let text = response.text().await.map_err(|e| classify(e, timeout_secs))?;
    if !status.is_success() {
        return Err(ApiError::Server { status: status.as_u16(), message: server_message(&text) });
    }
    serde_json::from_str::<T>(&text).map_err(|e| ApiError::Deserialization(e.to_string()))
}

pub fn classify(err: reqwest::Error, timeout_secs: u64) -> ApiError {
    if err.is_timeout() {
        ApiError::Timeout { seconds: timeout_secs }
    } else if err.is_decode() {
        ApiError::Deserialization(err.to_string())
    } else {
        ApiError::Network(err.to_string())
    }
}

/// Pull the human-readable part out of an error body. APIs in the wild use
/// `detail`, `message` or `error`; anything else is passed through as text.
pub fn server_message(body: &str) -> String {
    if let Ok(serde_json::Value::Object(obj)) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["detail", "message", "error"] {
            if let Some(serde_json::Value::String(message)) = obj.get(key) {
                return message.clone();
            }
        }
    }
    body.trim().chars().take(MAX_ERROR_MESSAGE_LEN).collect()
}

/// Keep provider keys out of the logs.
fn redact_key(url: &str) -> String {
    match url.find("key=") {
        Some(pos) => {
            let end = url[pos..].find('&').map(|e| pos + e).unwrap_or(url.len());
            format!("{}key=***{}", &url[..pos], &url[end..])
        }
        None => url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_prefers_detail_field() {
        assert_eq!(server_message(r#"{"detail":"Venue category is required"}"#), "Venue category is required");
        assert_eq!(server_message(r#"{"message":"Not allowed"}"#), "Not allowed");
        assert_eq!(server_message("  Bad Gateway \n"), "Bad Gateway");
        assert_eq!(server_message(r#"{"detail":[{"loc":["body"]}]}"#), r#"{"detail":[{"loc":["body"]}]}"#);
    }

    #[test]
    fn keys_are_redacted() {
        assert_eq!(
            redact_key("https://maps.example/place/details/json?place_id=abc&key=SECRET&fields=name"),
            "https://maps.example/place/details/json?place_id=abc&key=***&fields=name"
        );
        assert_eq!(redact_key("https://maps.example/geocode/json?address=x&key=SECRET"), "https://maps.example/geocode/json?address=x&key=***");
        assert_eq!(redact_key("http://api/events"), "http://api/events");
    }
}
