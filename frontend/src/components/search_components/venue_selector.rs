//! Multi-venue picker: search our venues and the map provider together, add
//! provider places as new (unverified) venues.

use common::{
    search_const::MIN_QUERY_LEN,
    typeahead::Typeahead,
    venue_candidate::VenueCandidate,
    venue_models::{VenueStatus, VenueSummary},
    venue_selection::{SelectionStep, VenueSelection},
};
use dioxus::{logger::tracing, prelude::*};

use crate::{
    api::events_api::{error_text, resolve_venue_candidate, search_venue_candidates},
    components::{
        error_boundary::ComponentErrorDisplay,
        search_components::{
            filter_panel::Chip,
            suggestion_box::{SuggestionInput, SuggestionLabel, SuggestionList, on_keystroke},
        },
    },
};

#[component]
pub fn VenueSelector(selection: Signal<VenueSelection>) -> Element {
    let mut selection = selection;
    let mut typeahead = use_signal(|| Typeahead::<VenueCandidate>::new(MIN_QUERY_LEN));
    let mut resolving = use_signal(|| Option::<String>::None);
    let mut notice = use_signal(|| Option::<String>::None);
    let mut error = use_signal(|| Option::<String>::None);

    let pick = move |index: usize| {
        let Some(candidate) = typeahead.write().select(index) else {
            return;
        };
        typeahead.write().reset();
        error.set(None);
        notice.set(None);

        let step = selection.read().prepare(&candidate);
        match step {
            SelectionStep::AlreadySelected => notice.set(Some(format!("{} is already on the list", candidate.label()))),
            SelectionStep::Ready(venue) => {
                selection.write().add(venue, None);
            }
            SelectionStep::NeedsResolution(place) => {
                resolving.set(Some(place.main_text.clone()));
                spawn(async move {
                    match resolve_venue_candidate(VenueCandidate::External(place.clone())).await {
                        Ok(venue) => {
                            tracing::info!("added venue {} from place {}", venue.id, place.place_id);
                            selection.write().add(venue, Some(&place.place_id));
                        }
                        Err(e) => error.set(Some(format!("Couldn't add {}: {}", place.main_text, error_text(&e)))),
                    }
                    resolving.set(None);
                });
            }
        }
    };

    let labels = typeahead
        .read()
        .suggestions()
        .iter()
        .map(|candidate| SuggestionLabel {
            text: candidate.label(),
            badge: Some(if candidate.is_external() { "New from map" } else { "Venue" }.to_string()),
        })
        .collect::<Vec<_>>();
    let query = typeahead.read().query().to_string();
    let open = typeahead.read().is_open();
    let loading = typeahead.read().is_loading();
    let venues = selection.read().venues().to_vec();

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 10px; max-width: 560px;",
            div {
                style: "display: flex; flex-wrap: wrap; gap: 6px;",
                if venues.is_empty() {
                    span { style: "color: #64748B;", "No venues selected yet" }
                }
                for venue in venues {
                    Chip {
                        key: "{venue.id}",
                        label: chip_label(&venue),
                        on_remove: {
                            let id = venue.id.clone();
                            move |_| {
                                selection.write().remove(&id);
                            }
                        },
                    }
                }
            }
            SuggestionInput {
                value: query,
                placeholder: "Search venues or places",
                disabled: resolving.read().is_some(),
                oninput: move |q: String| {
                    notice.set(None);
                    on_keystroke(typeahead, q, |q| async move {
                        search_venue_candidates(q).await.map(|groups| groups.candidates())
                    });
                },
                onblur: move |_| typeahead.write().dismiss(),
                SuggestionList {
                    labels,
                    open,
                    loading,
                    empty_text: "Nothing found in our venues or on the map",
                    on_pick: pick,
                }
            }
            if let Some(name) = resolving() {
                span { style: "color: #475569; font-size: 14px;", "Adding {name}..." }
            }
            if let Some(message) = notice() {
                span { style: "color: #475569; font-size: 14px;", "{message}" }
            }
            if let Some(message) = error() {
                ComponentErrorDisplay { error_txt: message }
            }
        }
    }
}

fn chip_label(venue: &VenueSummary) -> String {
    match venue.status {
        VenueStatus::Verified => venue.name.clone(),
        status => format!("{} ({status})", venue.name),
    }
}
