use common::error::ApiError;

use crate::{config::ApiConfig, http_utils::json_http::build_http_client};

/// Client for the Google-compatible place and geocoding endpoints.
#[derive(Debug, Clone)]
pub struct PlacesClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) api_key: String,
    pub(crate) region: String,
    pub(crate) timeout_secs: u64,
}

impl PlacesClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        if config.places_api_key.is_empty() {
            tracing::warn!("PLACES_API_KEY is not set; place lookups will be rejected by the provider");
        }
        Ok(Self {
            http: build_http_client(config.timeout_secs)?,
            base_url: config.places_api_url.clone(),
            api_key: config.places_api_key.clone(),
            region: config.places_region.clone(),
            timeout_secs: config.timeout_secs,
        })
    }

    /// `{base}{path}?{params}&key=...` with every value percent-encoded.
    pub(crate) fn url(&self, path: &str, params: &[(&str, &str)]) -> String {
        let mut query = params
            .iter()
            .map(|(k, v)| format!("{k}={}", urlencoding::encode(v)))
            .collect::<Vec<_>>();
        query.push(format!("key={}", urlencoding::encode(&self.api_key)));
        format!("{}{}?{}", self.base_url, path, query.join("&"))
    }
}

pub fn get_places_client() -> anyhow::Result<PlacesClient> {
    let config = ApiConfig::from_env()?;
    Ok(PlacesClient::new(&config)?)
}
