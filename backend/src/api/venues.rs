//! Venue search and creation on the events API.

use common::{
    data_sources::VenueDirectory,
    error::ApiError,
    venue_models::{NewVenue, VenueStatus, VenueSummary},
};
use serde::Deserialize;

use crate::http_utils::{highland_client::{HighlandClient, get_highland_client}, json_http::{get_json, post_json}};

#[derive(Debug, Deserialize)]
struct VenueSearchResponse {
    venues: Vec<VenueSummary>,
}

/// `POST /venues` answer. The status is optional here so a record the API
/// echoes back without one keeps the status we asked for.
#[derive(Debug, Deserialize)]
struct CreatedVenueResponse {
    id: String,
    name: String,
    #[serde(default)]
    address: Option<String>,
    #[serde(default)]
    postcode: Option<String>,
    #[serde(default)]
    latitude: Option<f64>,
    #[serde(default)]
    longitude: Option<f64>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    status: Option<VenueStatus>,
}

impl CreatedVenueResponse {
    fn into_summary(self, requested: VenueStatus) -> VenueSummary {
        VenueSummary {
            id: self.id,
            name: self.name,
            address: self.address,
            postcode: self.postcode,
            latitude: self.latitude,
            longitude: self.longitude,
            category: self.category,
            status: self.status.unwrap_or(requested),
        }
    }
}

impl VenueDirectory for HighlandClient {
    async fn search_venues(&self, query: &str) -> Result<Vec<VenueSummary>, ApiError> {
        let url = self.url(&format!("/venues/search?q={}", urlencoding::encode(query)));
        let response: VenueSearchResponse = get_json(&self.http, &url, self.timeout_secs).await?;
        Ok(response.venues)
    }

    async fn create_venue(&self, venue: NewVenue) -> Result<VenueSummary, ApiError> {
        let requested = venue.status;
        let response: CreatedVenueResponse = post_json(&self.http, &self.url("/venues"), &venue, self.timeout_secs).await?;
        let created = response.into_summary(requested);
        tracing::info!("created venue {} ({}) as {}", created.id, created.name, created.status);
        Ok(created)
    }
}

pub async fn search_venues(query: String) -> anyhow::Result<Vec<VenueSummary>> {
    let client = get_highland_client()?;
    Ok(client.search_venues(&query).await?)
}
