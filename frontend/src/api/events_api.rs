//! Server functions proxying the events API and the place provider.

use common::{
    event_models::{CategorySummary, TagSummary},
    filter_set::FilterSet,
    search_result::{EventPage, VenueSearchGroups},
    venue_candidate::VenueCandidate,
    venue_models::{LocationSuggestion, VenueSummary},
};
use dioxus::prelude::*;

#[cfg(feature = "server")]
fn to_server_error(e: anyhow::Error) -> ServerFnError {
    use common::{error::ApiError, venue_candidate::ResolveError};

    let (message, code) = if let Some(api) = e.downcast_ref::<ApiError>() {
        (api.user_message(), api.status_code())
    } else if let Some(resolve) = e.downcast_ref::<ResolveError>() {
        (resolve.to_string(), resolve.api_error().status_code())
    } else {
        (e.to_string(), 500)
    };
    dioxus::logger::tracing::warn!("server function failed ({code}): {e:#}");
    ServerFnError::ServerError { message, code, details: None }
}

/// Text to show the user for a failed server call.
pub fn error_text(e: &ServerFnError) -> String {
    match e {
        ServerFnError::ServerError { message, .. } => message.clone(),
        other => other.to_string(),
    }
}

#[server]
pub async fn list_events(filters: FilterSet, skip: u64, limit: u64) -> Result<EventPage, ServerFnError> {
    backend::api::events::list_events(filters, skip, limit).await.map_err(to_server_error)
}

#[server]
pub async fn list_categories() -> Result<Vec<CategorySummary>, ServerFnError> {
    backend::api::categories::list_categories().await.map_err(to_server_error)
}

#[server]
pub async fn search_tags(query: String, limit: u64) -> Result<Vec<TagSummary>, ServerFnError> {
    backend::api::tags::search_tags(query, limit).await.map_err(to_server_error)
}

#[server]
pub async fn search_venues(query: String) -> Result<Vec<VenueSummary>, ServerFnError> {
    backend::api::venues::search_venues(query).await.map_err(to_server_error)
}

#[server]
pub async fn search_venue_candidates(query: String) -> Result<VenueSearchGroups, ServerFnError> {
    backend::api::venue_resolution::search_venue_candidates(query).await.map_err(to_server_error)
}

#[server]
pub async fn resolve_venue_candidate(candidate: VenueCandidate) -> Result<VenueSummary, ServerFnError> {
    backend::api::venue_resolution::resolve_venue_candidate(candidate).await.map_err(to_server_error)
}

#[server]
pub async fn geocode_location(query: String) -> Result<Vec<LocationSuggestion>, ServerFnError> {
    backend::api::geocode::geocode_location(query).await.map_err(to_server_error)
}
