//! Server side of the venue picker: fan-out search and candidate resolution.

use common::{
    search_result::VenueSearchGroups,
    venue_candidate::{VenueCandidate, resolve_candidate, search_all_sources},
    venue_models::VenueSummary,
};

use crate::http_utils::{highland_client::get_highland_client, places_client::get_places_client};

pub async fn search_venue_candidates(query: String) -> anyhow::Result<VenueSearchGroups> {
    let directory = get_highland_client()?;
    let places = get_places_client()?;
    Ok(search_all_sources(&directory, &places, &query).await)
}

pub async fn resolve_venue_candidate(candidate: VenueCandidate) -> anyhow::Result<VenueSummary> {
    let directory = get_highland_client()?;
    let places = get_places_client()?;
    Ok(resolve_candidate(&directory, &places, candidate).await?)
}
