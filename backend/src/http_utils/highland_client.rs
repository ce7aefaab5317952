use common::error::ApiError;

use crate::{config::ApiConfig, http_utils::json_http::build_http_client};

/// Client for the Highland events API. Cheap to clone.
#[derive(Debug, Clone)]
pub struct HighlandClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) timeout_secs: u64,
}

impl HighlandClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        Ok(Self {
            http: build_http_client(config.timeout_secs)?,
            base_url: config.highland_api_url.clone(),
            timeout_secs: config.timeout_secs,
        })
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

pub fn get_highland_client() -> anyhow::Result<HighlandClient> {
    let config = ApiConfig::from_env()?;
    Ok(HighlandClient::new(&config)?)
}
