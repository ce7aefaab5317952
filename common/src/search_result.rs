use serde::{Deserialize, Serialize};

use crate::{event_models::EventSummary, venue_models::{PlacePrediction, VenueSummary}};


/// One page of results plus the window it was fetched with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchPage<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub skip: u64,
    pub limit: u64,
}

impl<T> SearchPage<T> {
    pub fn empty() -> Self {
        Self { items: vec![], total: 0, skip: 0, limit: 0 }
    }
}

pub type EventPage = SearchPage<EventSummary>;


/// Venue search results grouped by where they came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct VenueSearchGroups {
    pub internal: Vec<VenueSummary>,
    pub external: Vec<PlacePrediction>,
}

impl VenueSearchGroups {
    pub fn is_empty(&self) -> bool {
        self.internal.is_empty() && self.external.is_empty()
    }

    pub fn len(&self) -> usize {
        self.internal.len() + self.external.len()
    }
}
