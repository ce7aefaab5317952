//! Town / postcode lookup for the location box.

use common::{error::ApiError, venue_models::LocationSuggestion};
use serde::Deserialize;

use crate::{
    api::places::{Geometry, check_provider_status},
    http_utils::{json_http::get_json, places_client::{PlacesClient, get_places_client}},
};

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    status: String,
    #[serde(default)]
    error_message: Option<String>,
    #[serde(default)]
    results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    formatted_address: String,
    geometry: Geometry,
}

impl PlacesClient {
    pub async fn geocode(&self, address: &str) -> Result<Vec<LocationSuggestion>, ApiError> {
        let url = self.url("/geocode/json", &[("address", address), ("region", &self.region)]);
        let response: GeocodeResponse = get_json(&self.http, &url, self.timeout_secs).await?;
        if !check_provider_status(&response.status, response.error_message.as_deref())? {
            return Ok(vec![]);
        }
        Ok(response
            .results
            .into_iter()
            .map(|r| LocationSuggestion {
                label: r.formatted_address,
                latitude: r.geometry.location.lat,
                longitude: r.geometry.location.lng,
            })
            .collect())
    }
}

pub async fn geocode_location(query: String) -> anyhow::Result<Vec<LocationSuggestion>> {
    let client = get_places_client()?;
    Ok(client.geocode(&query).await?)
}
