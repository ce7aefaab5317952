use common::{venue_models::VenueSummary, venue_selection::VenueSelection};
use dioxus::prelude::*;

use crate::components::{
    search_components::{venue_selector::VenueSelector, venue_typeahead::VenueTypeahead},
    suspend_boundary::SuspendWrapper,
};

/// Organiser venue form: the venues an event runs at, plus its main venue.
#[component]
pub fn VenuesPage() -> Element {
    let selection = use_signal(VenueSelection::default);
    let mut main_venue = use_signal(|| Option::<VenueSummary>::None);

    let ids = selection.read().ids().join(", ");
    let main_label = main_venue.read().as_ref().map(|v| v.display_label()).unwrap_or("none".to_string());

    rsx! {
        Title { "Venues - Highland Events Hub" }
        div {
            style: "display: flex; flex-direction: column; gap: 28px; padding: 32px 40px;",
            section {
                style: "display: flex; flex-direction: column; gap: 10px;",
                h2 { style: "margin: 0;", "Event venues" }
                p {
                    style: "margin: 0; color: #475569;",
                    "Places picked from the map are added as unverified venues until our team checks them."
                }
                SuspendWrapper { VenueSelector { selection } }
                if !ids.is_empty() {
                    span { style: "font-size: 13px; color: #64748B;", "Venue ids: {ids}" }
                }
            }
            section {
                style: "display: flex; flex-direction: column; gap: 10px;",
                h2 { style: "margin: 0;", "Main venue" }
                VenueTypeahead {
                    selected: main_venue(),
                    on_change: move |venue: Option<VenueSummary>| main_venue.set(venue),
                }
                span { style: "font-size: 13px; color: #64748B;", "Selected: {main_label}" }
            }
        }
    }
}
