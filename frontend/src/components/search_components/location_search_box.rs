//! Town / postcode box with a "use my location" shortcut.

use common::{
    facet_selection::ResolvedLocation,
    search_const::MIN_LOCATION_QUERY_LEN,
    typeahead::Typeahead,
    venue_models::LocationSuggestion,
};
use dioxus::{logger::tracing, prelude::*};
use dioxus_free_icons::{Icon, icons::{md_maps_icons::MdMyLocation, md_navigation_icons::MdClose}};

use crate::{
    api::{device_geolocation::current_location, events_api::geocode_location},
    components::search_components::suggestion_box::{SuggestionInput, SuggestionLabel, SuggestionList, on_keystroke},
};

#[component]
pub fn LocationSearchBox(
    location: ReadSignal<Option<ResolvedLocation>>,
    on_resolved: Callback<ResolvedLocation>,
    on_clear: Callback<()>,
) -> Element {
    let mut typeahead = use_signal(|| Typeahead::<LocationSuggestion>::new(MIN_LOCATION_QUERY_LEN));
    let mut geo_error = use_signal(|| Option::<String>::None);
    let mut locating = use_signal(|| false);

    // keep the box text in step with the facet (URL navigation, clear button)
    use_effect(move || {
        let label = location.read().as_ref().map(|l| l.label.clone()).unwrap_or_default();
        typeahead.write().set_query_text(label);
    });

    let use_my_location = move |_: MouseEvent| {
        geo_error.set(None);
        locating.set(true);
        spawn(async move {
            match current_location().await {
                Ok(resolved) => {
                    typeahead.write().dismiss();
                    on_resolved(resolved);
                }
                Err(e) => geo_error.set(Some(e.user_message().to_string())),
            }
            locating.set(false);
        });
    };

    let labels = typeahead
        .read()
        .suggestions()
        .iter()
        .map(|s| SuggestionLabel::plain(s.label.clone()))
        .collect::<Vec<_>>();
    let query = typeahead.read().query().to_string();
    let open = typeahead.read().is_open();
    let loading = typeahead.read().is_loading();

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 6px;",
            div {
                style: "display: flex; flex-direction: row; gap: 6px; align-items: center;",
                SuggestionInput {
                    value: query,
                    placeholder: "Town or postcode",
                    oninput: move |q: String| {
                        geo_error.set(None);
                        on_keystroke(typeahead, q, geocode_location);
                    },
                    onblur: move |_| typeahead.write().dismiss(),
                    SuggestionList {
                        labels,
                        open,
                        loading,
                        empty_text: "No places found",
                        on_pick: move |index: usize| {
                            let picked = typeahead.write().select(index);
                            if let Some(suggestion) = picked {
                                tracing::info!("location picked: {}", suggestion.label);
                                typeahead.write().set_query_text(suggestion.label.clone());
                                on_resolved(ResolvedLocation {
                                    label: suggestion.label,
                                    latitude: suggestion.latitude,
                                    longitude: suggestion.longitude,
                                });
                            }
                        },
                    }
                }
                button {
                    title: "Use my location",
                    disabled: locating(),
                    style: "border: none; background: none; cursor: pointer;",
                    onclick: use_my_location,
                    Icon { icon: MdMyLocation, style: "width: 22px; height: 22px; color: #14352B;" }
                }
                if location.read().is_some() {
                    button {
                        title: "Clear location",
                        style: "border: none; background: none; cursor: pointer;",
                        onclick: move |_| {
                            typeahead.write().reset();
                            on_clear(());
                        },
                        Icon { icon: MdClose, style: "width: 20px; height: 20px; color: #475569;" }
                    }
                }
            }
            if locating() {
                span { style: "font-size: 13px; color: #64748B;", "Finding your location..." }
            }
            if let Some(message) = geo_error() {
                span { role: "alert", style: "font-size: 13px; color: #B91C1C;", "{message}" }
            }
        }
    }
}
