//! Venue search across the internal directory and the place provider, and
//! turning a picked result into a venue with a stable id.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    data_sources::{PlaceProvider, VenueDirectory},
    error::ApiError,
    search_result::VenueSearchGroups,
    venue_models::{NewVenue, PlacePrediction, VenueSummary},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "lowercase")]
pub enum VenueCandidate {
    /// Already in our venue table; usable as is.
    Internal(VenueSummary),
    /// Only known to the place provider; must be resolved first.
    External(PlacePrediction),
}

impl VenueCandidate {
    pub fn label(&self) -> String {
        match self {
            VenueCandidate::Internal(venue) => venue.display_label(),
            VenueCandidate::External(place) => place.description.clone(),
        }
    }

    /// Key unique across both sources, for list rendering.
    pub fn key(&self) -> String {
        match self {
            VenueCandidate::Internal(venue) => format!("venue-{}", venue.id),
            VenueCandidate::External(place) => format!("place-{}", place.place_id),
        }
    }

    pub fn is_external(&self) -> bool {
        matches!(self, VenueCandidate::External(_))
    }
}

impl VenueSearchGroups {
    /// Internal hits first, then provider hits, each group in the order its
    /// source ranked them.
    pub fn candidates(&self) -> Vec<VenueCandidate> {
        self.internal
            .iter()
            .cloned()
            .map(VenueCandidate::Internal)
            .chain(self.external.iter().cloned().map(VenueCandidate::External))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResolveError {
    #[error("could not load place details: {0}")]
    PlaceDetails(ApiError),
    #[error("could not create venue: {0}")]
    CreateVenue(ApiError),
}

impl ResolveError {
    pub fn api_error(&self) -> &ApiError {
        match self {
            ResolveError::PlaceDetails(e) | ResolveError::CreateVenue(e) => e,
        }
    }
}

/// Query both sources at once. A source that fails contributes an empty
/// group; the other one is still returned.
pub async fn search_all_sources<D, P>(directory: &D, places: &P, query: &str) -> VenueSearchGroups
where
    D: VenueDirectory,
    P: PlaceProvider,
{
    let (internal, external) = futures::join!(directory.search_venues(query), places.autocomplete(query));

    let internal = internal.unwrap_or_else(|e| {
        tracing::warn!("venue search for {query:?} failed, showing provider results only: {e}");
        vec![]
    });
    let external = external.unwrap_or_else(|e| {
        tracing::warn!("place autocomplete for {query:?} failed, showing venues only: {e}");
        vec![]
    });
    VenueSearchGroups { internal, external }
}

/// Turn a picked candidate into a venue record.
///
/// External picks fetch the place details, create an unverified venue from
/// them and hand back the created record. No deduplication happens here.
pub async fn resolve_candidate<D, P>(directory: &D, places: &P, candidate: VenueCandidate) -> Result<VenueSummary, ResolveError>
where
    D: VenueDirectory,
    P: PlaceProvider,
{
    let place = match candidate {
        VenueCandidate::Internal(venue) => return Ok(venue),
        VenueCandidate::External(place) => place,
    };

    let details = places.place_details(&place.place_id).await.map_err(|e| {
        tracing::warn!("place details for {} failed: {e}", place.place_id);
        ResolveError::PlaceDetails(e)
    })?;

    let venue = directory.create_venue(NewVenue::from_place(&details)).await.map_err(|e| {
        tracing::warn!("creating venue for place {} failed: {e}", place.place_id);
        ResolveError::CreateVenue(e)
    })?;
    tracing::info!("created {} venue {} from place {}", venue.status, venue.id, place.place_id);
    Ok(venue)
}

#[cfg(test)]
pub(crate) mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::venue_models::{AddressComponent, PlaceDetails, VenueStatus};

    pub(crate) fn venue(id: &str, name: &str) -> VenueSummary {
        VenueSummary {
            id: id.to_string(),
            name: name.to_string(),
            address: None,
            postcode: None,
            latitude: None,
            longitude: None,
            category: None,
            status: VenueStatus::Verified,
        }
    }

    pub(crate) fn prediction(place_id: &str, description: &str) -> PlacePrediction {
        PlacePrediction {
            place_id: place_id.to_string(),
            description: description.to_string(),
            main_text: description.split(',').next().unwrap_or_default().to_string(),
            secondary_text: None,
        }
    }

    pub(crate) struct FakeDirectory {
        pub search: Result<Vec<VenueSummary>, ApiError>,
        pub create_fails: bool,
        pub created: RefCell<Vec<NewVenue>>,
    }

    impl FakeDirectory {
        pub fn with_venues(venues: Vec<VenueSummary>) -> Self {
            Self { search: Ok(venues), create_fails: false, created: RefCell::new(vec![]) }
        }
    }

    impl VenueDirectory for FakeDirectory {
        async fn search_venues(&self, _query: &str) -> Result<Vec<VenueSummary>, ApiError> {
            self.search.clone()
        }

        async fn create_venue(&self, new_venue: NewVenue) -> Result<VenueSummary, ApiError> {
            self.created.borrow_mut().push(new_venue.clone());
            if self.create_fails {
                return Err(ApiError::Server { status: 422, message: "category is required".to_string() });
            }
            Ok(VenueSummary {
                id: format!("v-{}", self.created.borrow().len()),
                name: new_venue.name,
                address: Some(new_venue.address),
                postcode: new_venue.postcode,
                latitude: Some(new_venue.latitude),
                longitude: Some(new_venue.longitude),
                category: None,
                status: new_venue.status,
            })
        }
    }

    pub(crate) struct FakePlaces {
        pub predictions: Result<Vec<PlacePrediction>, ApiError>,
        pub details_fail: bool,
        pub details_calls: RefCell<u32>,
    }

    impl FakePlaces {
        pub fn with_predictions(predictions: Vec<PlacePrediction>) -> Self {
            Self { predictions: Ok(predictions), details_fail: false, details_calls: RefCell::new(0) }
        }
    }

    impl PlaceProvider for FakePlaces {
        async fn autocomplete(&self, _query: &str) -> Result<Vec<PlacePrediction>, ApiError> {
            self.predictions.clone()
        }

        async fn place_details(&self, place_id: &str) -> Result<PlaceDetails, ApiError> {
            *self.details_calls.borrow_mut() += 1;
            if self.details_fail {
                return Err(ApiError::Timeout { seconds: 10 });
            }
            Ok(PlaceDetails {
                place_id: place_id.to_string(),
                name: "Eden Court".to_string(),
                formatted_address: "Bishops Rd, Inverness IV3 5SA, UK".to_string(),
                latitude: 57.4731,
                longitude: -4.2324,
                address_components: vec![AddressComponent {
                    long_name: "IV3 5SA".to_string(),
                    short_name: "IV3 5SA".to_string(),
                    types: vec!["postal_code".to_string()],
                }],
            })
        }
    }

    #[tokio::test]
    async fn both_sources_are_grouped() {
        let directory = FakeDirectory::with_venues(vec![venue("v1", "Eden Court Theatre")]);
        let places = FakePlaces::with_predictions(vec![prediction("p1", "Eden Court, Inverness, UK")]);
        let groups = search_all_sources(&directory, &places, "Eden").await;
        assert_eq!(groups.len(), 2);
        let candidates = groups.candidates();
        assert!(!candidates[0].is_external());
        assert!(candidates[1].is_external());
    }

    #[tokio::test]
    async fn failing_internal_source_leaves_external_results() {
        let mut directory = FakeDirectory::with_venues(vec![]);
        directory.search = Err(ApiError::Network("connection refused".to_string()));
        let places = FakePlaces::with_predictions(vec![prediction("p1", "Eden Court, Inverness, UK")]);

        let groups = search_all_sources(&directory, &places, "Eden Court").await;
        assert!(groups.internal.is_empty());
        assert_eq!(groups.external.len(), 1);
        assert!(groups.candidates().iter().all(VenueCandidate::is_external));
    }

    #[tokio::test]
    async fn failing_external_source_leaves_internal_results() {
        let directory = FakeDirectory::with_venues(vec![venue("v1", "Ironworks")]);
        let mut places = FakePlaces::with_predictions(vec![]);
        places.predictions = Err(ApiError::Deserialization("missing field `predictions`".to_string()));

        let groups = search_all_sources(&directory, &places, "Iron").await;
        assert_eq!(groups.internal.len(), 1);
        assert!(groups.external.is_empty());
    }

    #[tokio::test]
    async fn internal_pick_is_returned_untouched() {
        let directory = FakeDirectory::with_venues(vec![]);
        let places = FakePlaces::with_predictions(vec![]);
        let picked = venue("v7", "Ironworks");
        let resolved = resolve_candidate(&directory, &places, VenueCandidate::Internal(picked.clone())).await.unwrap();
        assert_eq!(resolved, picked);
        assert!(directory.created.borrow().is_empty());
        assert_eq!(*places.details_calls.borrow(), 0);
    }

    #[tokio::test]
    async fn external_pick_creates_unverified_venue() {
        let directory = FakeDirectory::with_venues(vec![]);
        let places = FakePlaces::with_predictions(vec![]);
        let resolved = resolve_candidate(&directory, &places, VenueCandidate::External(prediction("p-eden", "Eden Court")))
            .await
            .unwrap();

        assert_eq!(resolved.id, "v-1");
        assert_eq!(resolved.status, VenueStatus::Unverified);
        let created = directory.created.borrow();
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].postcode.as_deref(), Some("IV3 5SA"));
        assert_eq!(created[0].source_place_id.as_deref(), Some("p-eden"));
    }

    #[tokio::test]
    async fn details_failure_creates_nothing() {
        let directory = FakeDirectory::with_venues(vec![]);
        let mut places = FakePlaces::with_predictions(vec![]);
        places.details_fail = true;
        let err = resolve_candidate(&directory, &places, VenueCandidate::External(prediction("p1", "Eden Court")))
            .await
            .unwrap_err();
        assert!(matches!(err, ResolveError::PlaceDetails(ApiError::Timeout { .. })));
        assert!(directory.created.borrow().is_empty());
    }

    #[tokio::test]
    async fn create_failure_is_reported() {
        let mut directory = FakeDirectory::with_venues(vec![]);
        directory.create_fails = true;
        let places = FakePlaces::with_predictions(vec![]);
        let err = resolve_candidate(&directory, &places, VenueCandidate::External(prediction("p1", "Eden Court")))
            .await
            .unwrap_err();
        assert!(matches!(err, ResolveError::CreateVenue(ApiError::Server { status: 422, .. })));
    }

    #[test]
    fn candidate_json_is_tagged_by_source() {
        let json = serde_json::to_value(VenueCandidate::External(prediction("p1", "Eden Court"))).unwrap();
        assert_eq!(json["source"], "external");
        assert_eq!(json["place_id"], "p1");
    }
}
