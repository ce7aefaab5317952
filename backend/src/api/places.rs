//! Place autocomplete and details from the external provider.

use common::{
    data_sources::PlaceProvider,
    error::ApiError,
    venue_models::{AddressComponent, PlaceDetails, PlacePrediction},
};
use serde::Deserialize;

use crate::http_utils::{json_http::get_json, places_client::{PlacesClient, get_places_client}};

#[derive(Debug, Deserialize)]
struct AutocompleteResponse {
    status: String,
    #[serde(default)]
    error_message: Option<String>,
    #[serde(default)]
    predictions: Vec<RawPrediction>,
}

#[derive(Debug, Deserialize)]
struct RawPrediction {
    place_id: String,
    description: String,
    #[serde(default)]
    structured_formatting: Option<StructuredFormatting>,
}

#[derive(Debug, Deserialize)]
struct StructuredFormatting {
    main_text: String,
    #[serde(default)]
    secondary_text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DetailsResponse {
    status: String,
    #[serde(default)]
    error_message: Option<String>,
    #[serde(default)]
    result: Option<RawPlace>,
}

#[derive(Debug, Deserialize)]
struct RawPlace {
    #[serde(default)]
    place_id: Option<String>,
    name: String,
    formatted_address: String,
    geometry: Geometry,
    #[serde(default)]
    address_components: Vec<AddressComponent>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Geometry {
    pub(crate) location: LatLng,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LatLng {
    pub(crate) lat: f64,
    pub(crate) lng: f64,
}

/// `OK` carries data, `ZERO_RESULTS` is an empty answer, anything else is the
/// provider refusing the request.
pub(crate) fn check_provider_status(status: &str, error_message: Option<&str>) -> Result<bool, ApiError> {
    match status {
        "OK" => Ok(true),
        "ZERO_RESULTS" => Ok(false),
        other => Err(ApiError::Server {
            status: 502,
            message: match error_message {
                Some(message) => format!("place provider returned {other}: {message}"),
                None => format!("place provider returned {other}"),
            },
        }),
    }
}

impl PlaceProvider for PlacesClient {
    async fn autocomplete(&self, query: &str) -> Result<Vec<PlacePrediction>, ApiError> {
        let components = format!("country:{}", self.region);
        let url = self.url("/place/autocomplete/json", &[("input", query), ("components", &components)]);
        let response: AutocompleteResponse = get_json(&self.http, &url, self.timeout_secs).await?;
        if !check_provider_status(&response.status, response.error_message.as_deref())? {
            return Ok(vec![]);
        }
        Ok(response
            .predictions
            .into_iter()
            .map(|p| {
                let (main_text, secondary_text) = match p.structured_formatting {
                    Some(f) => (f.main_text, f.secondary_text),
                    None => (p.description.split(',').next().unwrap_or_default().trim().to_string(), None),
                };
                PlacePrediction { place_id: p.place_id, description: p.description, main_text, secondary_text }
            })
            .collect())
    }

    async fn place_details(&self, place_id: &str) -> Result<PlaceDetails, ApiError> {
        let url = self.url(
            "/place/details/json",
            &[("place_id", place_id), ("fields", "place_id,name,formatted_address,geometry,address_component")],
        );
        let response: DetailsResponse = get_json(&self.http, &url, self.timeout_secs).await?;
        let found = check_provider_status(&response.status, response.error_message.as_deref())?;
        let place = match (found, response.result) {
            (true, Some(place)) => place,
            _ => return Err(ApiError::Server { status: 404, message: format!("place {place_id} not found") }),
        };
        Ok(PlaceDetails {
            place_id: place.place_id.unwrap_or_else(|| place_id.to_string()),
            name: place.name,
            formatted_address: place.formatted_address,
            latitude: place.geometry.location.lat,
            longitude: place.geometry.location.lng,
            address_components: place.address_components,
        })
    }
}

pub async fn place_autocomplete(query: String) -> anyhow::Result<Vec<PlacePrediction>> {
    let client = get_places_client()?;
    Ok(client.autocomplete(&query).await?)
}

pub async fn place_details(place_id: String) -> anyhow::Result<PlaceDetails> {
    let client = get_places_client()?;
    Ok(client.place_details(&place_id).await?)
}
