use common::{search_const::MIN_QUERY_LEN, typeahead::Typeahead, venue_models::VenueSummary};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::MdClose};

use crate::{
    api::events_api::search_venues,
    components::search_components::suggestion_box::{SuggestionInput, SuggestionLabel, SuggestionList, on_keystroke},
};

/// Single venue field for edit forms. Searches our own venues only.
#[component]
pub fn VenueTypeahead(selected: ReadSignal<Option<VenueSummary>>, on_change: Callback<Option<VenueSummary>>) -> Element {
    let mut typeahead = use_signal(|| Typeahead::<VenueSummary>::new(MIN_QUERY_LEN));

    use_effect(move || {
        let label = selected.read().as_ref().map(|v| v.name.clone()).unwrap_or_default();
        typeahead.write().set_query_text(label);
    });

    let labels = typeahead
        .read()
        .suggestions()
        .iter()
        .map(|venue| SuggestionLabel::plain(venue.display_label()))
        .collect::<Vec<_>>();
    let query = typeahead.read().query().to_string();
    let open = typeahead.read().is_open();
    let loading = typeahead.read().is_loading();

    rsx! {
        div {
            style: "display: flex; flex-direction: row; gap: 6px; align-items: center; max-width: 560px;",
            SuggestionInput {
                value: query,
                placeholder: "Venue",
                oninput: move |q: String| on_keystroke(typeahead, q, search_venues),
                onblur: move |_| typeahead.write().dismiss(),
                SuggestionList {
                    labels,
                    open,
                    loading,
                    empty_text: "No venues found",
                    on_pick: move |index: usize| {
                        let picked = typeahead.write().select(index);
                        if let Some(venue) = picked {
                            on_change(Some(venue));
                        }
                    },
                }
            }
            if selected.read().is_some() || !typeahead.read().query().is_empty() {
                button {
                    title: "Clear venue",
                    style: "border: none; background: none; cursor: pointer;",
                    onclick: move |_| {
                        typeahead.write().reset();
                        on_change(None);
                    },
                    Icon { icon: MdClose, style: "width: 20px; height: 20px; color: #475569;" }
                }
            }
        }
    }
}
