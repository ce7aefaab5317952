//! Caller-side bookkeeping for the multi-venue picker.
//!
//! The resolver never deduplicates. This list rejects ids it already holds
//! and remembers which provider places it has already turned into venues, so
//! picking the same place twice never creates a second venue.

use std::collections::BTreeMap;

use crate::{
    venue_candidate::VenueCandidate,
    venue_models::{PlacePrediction, VenueSummary},
};

#[derive(Debug, Clone, PartialEq)]
pub enum SelectionStep {
    /// Already in the list; nothing to do.
    AlreadySelected,
    /// Can be added right away.
    Ready(VenueSummary),
    /// Needs a trip through the resolver first.
    NeedsResolution(PlacePrediction),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct VenueSelection {
    venues: Vec<VenueSummary>,
    resolved_places: BTreeMap<String, VenueSummary>,
}

impl VenueSelection {
    pub fn new(initial: Vec<VenueSummary>) -> Self {
        let mut selection = Self::default();
        for venue in initial {
            selection.add(venue, None);
        }
        selection
    }

    pub fn venues(&self) -> &[VenueSummary] {
        &self.venues
    }

    pub fn ids(&self) -> Vec<String> {
        self.venues.iter().map(|v| v.id.clone()).collect()
    }

    pub fn contains(&self, venue_id: &str) -> bool {
        self.venues.iter().any(|v| v.id == venue_id)
    }

    /// What picking `candidate` would take. Does not modify the list.
    pub fn prepare(&self, candidate: &VenueCandidate) -> SelectionStep {
        let venue = match candidate {
            VenueCandidate::Internal(venue) => venue,
            VenueCandidate::External(place) => match self.resolved_places.get(&place.place_id) {
                Some(venue) => venue,
                None => return SelectionStep::NeedsResolution(place.clone()),
            },
        };
        if self.contains(&venue.id) {
            SelectionStep::AlreadySelected
        } else {
            SelectionStep::Ready(venue.clone())
        }
    }

    /// Add a venue. `from_place` records the provider place it was created
    /// from. Returns `false` if the id was already selected.
    pub fn add(&mut self, venue: VenueSummary, from_place: Option<&str>) -> bool {
        if let Some(place_id) = from_place {
            self.resolved_places.insert(place_id.to_string(), venue.clone());
        }
        if self.contains(&venue.id) {
            return false;
        }
        self.venues.push(venue);
        true
    }

    pub fn remove(&mut self, venue_id: &str) -> Option<VenueSummary> {
        let pos = self.venues.iter().position(|v| v.id == venue_id)?;
        Some(self.venues.remove(pos))
    }

    pub fn clear(&mut self) {
        self.venues.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::venue_candidate::{
        resolve_candidate,
        tests::{FakeDirectory, FakePlaces, prediction, venue},
    };

    /// What the picker component does on click.
    async fn pick(selection: &mut VenueSelection, directory: &FakeDirectory, places: &FakePlaces, candidate: VenueCandidate) -> bool {
        match selection.prepare(&candidate) {
            SelectionStep::AlreadySelected => false,
            SelectionStep::Ready(venue) => selection.add(venue, None),
            SelectionStep::NeedsResolution(place) => {
                let venue = resolve_candidate(directory, places, VenueCandidate::External(place.clone())).await.unwrap();
                selection.add(venue, Some(&place.place_id))
            }
        }
    }

    #[tokio::test]
    async fn re_picking_a_resolved_place_creates_once() {
        let directory = FakeDirectory::with_venues(vec![]);
        let places = FakePlaces::with_predictions(vec![]);
        let eden = VenueCandidate::External(prediction("p-eden", "Eden Court, Inverness"));
        let mut selection = VenueSelection::default();

        assert!(pick(&mut selection, &directory, &places, eden.clone()).await);
        assert!(!pick(&mut selection, &directory, &places, eden.clone()).await);
        assert_eq!(directory.created.borrow().len(), 1);
        assert_eq!(selection.venues().len(), 1);

        // Removing and picking again reuses the venue made the first time.
        let id = selection.venues()[0].id.clone();
        selection.remove(&id);
        assert!(pick(&mut selection, &directory, &places, eden).await);
        assert_eq!(directory.created.borrow().len(), 1);
        assert_eq!(selection.ids(), vec![id]);
    }

    #[test]
    fn duplicate_internal_ids_are_rejected() {
        let mut selection = VenueSelection::new(vec![venue("v1", "Ironworks")]);
        let candidate = VenueCandidate::Internal(venue("v1", "Ironworks"));
        assert_eq!(selection.prepare(&candidate), SelectionStep::AlreadySelected);
        assert!(!selection.add(venue("v1", "Ironworks"), None));
        assert!(selection.add(venue("v2", "Eden Court"), None));
        assert_eq!(selection.ids(), vec!["v1", "v2"]);
    }

    #[test]
    fn unresolved_place_needs_resolution() {
        let selection = VenueSelection::default();
        let step = selection.prepare(&VenueCandidate::External(prediction("p9", "Nairn Community Centre")));
        assert!(matches!(step, SelectionStep::NeedsResolution(p) if p.place_id == "p9"));
    }
}
