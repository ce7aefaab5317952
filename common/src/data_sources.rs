//! Seams between the resolver and whatever actually talks to the network.

use std::future::Future;

use crate::{
    error::ApiError,
    venue_models::{NewVenue, PlaceDetails, PlacePrediction, VenueSummary},
};

/// The events API's own venue table.
pub trait VenueDirectory {
    fn search_venues(&self, query: &str) -> impl Future<Output = Result<Vec<VenueSummary>, ApiError>>;

    fn create_venue(&self, venue: NewVenue) -> impl Future<Output = Result<VenueSummary, ApiError>>;
}

/// Third-party place search (autocomplete + details).
pub trait PlaceProvider {
    fn autocomplete(&self, query: &str) -> impl Future<Output = Result<Vec<PlacePrediction>, ApiError>>;

    fn place_details(&self, place_id: &str) -> impl Future<Output = Result<PlaceDetails, ApiError>>;
}
