//! Venue records and the place-provider shapes they can be created from.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum VenueStatus {
    #[default]
    Verified,
    /// Created automatically from a third-party place, waiting for a human check.
    Unverified,
    Pending,
}

impl Display for VenueStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            VenueStatus::Verified => "verified",
            VenueStatus::Unverified => "unverified",
            VenueStatus::Pending => "pending",
        };
        write!(f, "{s}")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VenueSummary {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub postcode: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub status: VenueStatus,
}

impl VenueSummary {
    /// One-line label used in suggestion lists and selected-venue chips.
    pub fn display_label(&self) -> String {
        match (&self.address, &self.postcode) {
            (Some(address), _) if !address.is_empty() => format!("{}, {}", self.name, address),
            (_, Some(postcode)) if !postcode.is_empty() => format!("{} ({})", self.name, postcode),
            _ => self.name.clone(),
        }
    }
}

/// Body of `POST /venues`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewVenue {
    pub name: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postcode: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub status: VenueStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_place_id: Option<String>,
}

impl NewVenue {
    /// Venue request for a place picked from the external provider.
    pub fn from_place(details: &PlaceDetails) -> Self {
        Self {
            name: details.name.clone(),
            address: details.formatted_address.clone(),
            postcode: details.postal_code(),
            latitude: details.latitude,
            longitude: details.longitude,
            status: VenueStatus::Unverified,
            source_place_id: Some(details.place_id.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacePrediction {
    pub place_id: String,
    pub description: String,
    pub main_text: String,
    #[serde(default)]
    pub secondary_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressComponent {
    pub long_name: String,
    pub short_name: String,
    #[serde(default)]
    pub types: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceDetails {
    pub place_id: String,
    pub name: String,
    pub formatted_address: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub address_components: Vec<AddressComponent>,
}

impl PlaceDetails {
    /// Postal code from the structured address, if the provider sent one.
    pub fn postal_code(&self) -> Option<String> {
        self.address_components
            .iter()
            .find(|c| c.types.iter().any(|t| t == "postal_code"))
            .map(|c| c.long_name.clone())
    }
}

/// A geocoding hit offered by the location box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationSuggestion {
    pub label: String,
    pub latitude: f64,
    pub longitude: f64,
}
