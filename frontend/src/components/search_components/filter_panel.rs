//! Facet controls for the event list.
//!
//! The controls edit a local [`FacetSelections`]; nothing is sent until the
//! user submits, at which point the selections are collapsed into a
//! [`FilterSet`](common::filter_set::FilterSet) and handed to `on_submit`.

use common::{
    event_models::CategorySummary,
    facet_selection::{FacetSelections, FilterRequest},
    filter_set::FilterSet,
    search_const::RADIUS_CHOICES_KM,
};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_action_icons::MdSearch, md_navigation_icons::MdClose}};

use crate::components::search_components::{location_search_box::LocationSearchBox, tag_typeahead::TagTypeahead};

#[component]
pub fn FilterPanel(
    filters: ReadSignal<FilterSet>,
    categories: ReadSignal<Vec<CategorySummary>>,
    on_submit: Callback<FilterRequest>,
) -> Element {
    let mut selections = use_signal(|| FacetSelections::from_filters(&filters.peek(), &categories.peek()));
    // controls are not reset by navigation; rebuild them from the URL
    use_effect(move || {
        let rebuilt = FacetSelections::from_filters(&filters.read(), &categories.peek());
        selections.set(rebuilt);
    });
    use_effect(move || {
        let mut current = selections.peek().clone();
        if current.catalogue_loaded(&filters.peek(), &categories.read()) {
            selections.set(current);
        }
    });

    let submit = move || on_submit(selections.read().submit(&categories.read()));

    let current = selections.read().clone();
    let price_text = current.price_max.map(|p| p.to_string()).unwrap_or_default();
    let date_from = current.date_from.clone().unwrap_or_default();
    let date_to = current.date_to.clone().unwrap_or_default();

    rsx! {
        div {
            id: "x-filter-panel",
            style: "
                display: flex;
                flex-direction: column;
                gap: 14px;
                padding: 16px;
                width: 320px;
                flex-shrink: 0;
                background: white;
                border-right: 1px solid rgba(0,0,0,0.1);
                overflow-y: auto;
            ",

            FacetSection { title: "Search",
                input {
                    r#type: "search",
                    placeholder: "Ceilidh, festival, workshop...",
                    style: "width: 100%; padding: 8px 12px; border: 1px solid rgba(101,101,101,0.6); border-radius: 8px; font-size: 16px;",
                    value: "{current.text}",
                    oninput: move |event: Event<FormData>| selections.write().text = event.value(),
                    onkeydown: move |event: Event<KeyboardData>| {
                        if event.key() == Key::Enter {
                            submit();
                        }
                    },
                }
            }

            FacetSection { title: "Category",
                if categories.read().is_empty() {
                    span { style: "color: #64748B; font-size: 14px;", "No categories loaded" }
                }
                for category in categories.read().iter().cloned() {
                    label {
                        key: "{category.id}",
                        style: "display: flex; gap: 8px; align-items: center; cursor: pointer;",
                        input {
                            r#type: "checkbox",
                            checked: current.category_ids.contains(&category.id),
                            onchange: {
                                let id = category.id.clone();
                                move |_| selections.write().toggle_category(&id)
                            },
                        }
                        "{category.name}"
                    }
                }
            }

            FacetSection { title: "Tags",
                div {
                    style: "display: flex; flex-wrap: wrap; gap: 6px;",
                    for tag in current.tags.iter().cloned() {
                        Chip {
                            key: "{tag}",
                            label: tag.clone(),
                            on_remove: {
                                let tag = tag.clone();
                                move |_| selections.write().toggle_tag(&tag)
                            },
                        }
                    }
                }
                TagTypeahead {
                    on_pick: move |name: String| {
                        if !selections.read().tags.contains(&name) {
                            selections.write().toggle_tag(&name);
                        }
                    }
                }
            }

            FacetSection { title: "Maximum price (£)",
                input {
                    r#type: "number",
                    min: "0",
                    step: "1",
                    style: "width: 120px; padding: 6px 10px; border: 1px solid rgba(101,101,101,0.6); border-radius: 8px;",
                    value: "{price_text}",
                    oninput: move |event: Event<FormData>| {
                        let price = event.value().trim().parse::<f64>().ok();
                        selections.write().set_price_max(price);
                    },
                }
                label {
                    style: "display: flex; gap: 8px; align-items: center; cursor: pointer;",
                    input {
                        r#type: "checkbox",
                        checked: current.featured_only,
                        onchange: move |event: Event<FormData>| selections.write().featured_only = event.checked(),
                    }
                    "Featured events only"
                }
            }

            FacetSection { title: "Near",
                LocationSearchBox {
                    location: current.location.clone(),
                    on_resolved: move |resolved| selections.write().set_location(resolved),
                    on_clear: move |_| selections.write().clear_location(),
                }
                select {
                    disabled: current.location.is_none(),
                    style: "width: 140px; padding: 6px; border-radius: 8px;",
                    value: "{current.radius_km}",
                    onchange: move |event: Event<FormData>| {
                        if let Ok(radius) = event.value().parse::<u32>() {
                            selections.write().set_radius(radius);
                        }
                    },
                    for radius in RADIUS_CHOICES_KM {
                        option { key: "{radius}", value: "{radius}", selected: radius == current.radius_km, "within {radius} km" }
                    }
                }
            }

            FacetSection { title: "Dates",
                div {
                    style: "display: flex; flex-direction: row; gap: 8px; align-items: center;",
                    input {
                        r#type: "date",
                        value: "{date_from}",
                        oninput: move |event: Event<FormData>| selections.write().date_from = non_empty(event.value()),
                    }
                    "to"
                    input {
                        r#type: "date",
                        value: "{date_to}",
                        oninput: move |event: Event<FormData>| selections.write().date_to = non_empty(event.value()),
                    }
                }
            }

            div {
                style: "display: flex; flex-direction: row; gap: 10px;",
                button {
                    style: "flex-grow: 1; display: flex; gap: 6px; align-items: center; justify-content: center; padding: 10px; border: none; border-radius: 8px; background: #14352B; color: white; font-size: 16px; cursor: pointer;",
                    onclick: move |_| submit(),
                    Icon { icon: MdSearch, style: "width: 20px; height: 20px;" }
                    "Search"
                }
                button {
                    style: "padding: 10px 14px; border: 1px solid #14352B; border-radius: 8px; background: white; color: #14352B; font-size: 16px; cursor: pointer;",
                    onclick: move |_| {
                        let request = selections.write().clear();
                        on_submit(request);
                    },
                    "Clear all"
                }
            }
        }
    }
}

fn non_empty(value: String) -> Option<String> {
    let value = value.trim().to_string();
    if value.is_empty() { None } else { Some(value) }
}

#[component]
fn FacetSection(title: String, children: Element) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 8px;",
            span { style: "font-size: 13px; font-weight: 600; text-transform: uppercase; color: #475569;", "{title}" }
            {children}
        }
    }
}

#[component]
pub fn Chip(label: String, on_remove: Callback<()>) -> Element {
    rsx! {
        span {
            style: "display: inline-flex; gap: 4px; align-items: center; padding: 2px 4px 2px 10px; border-radius: 999px; background: #E0E7FF; color: #1E1B4B; font-size: 14px;",
            "{label}"
            button {
                title: "Remove {label}",
                style: "border: none; background: none; cursor: pointer; padding: 0; display: flex;",
                onclick: move |_| on_remove(()),
                Icon { icon: MdClose, style: "width: 16px; height: 16px;" }
            }
        }
    }
}
