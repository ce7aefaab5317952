use common::{
    facet_selection::{FilterRequest, OriginTracker, SearchOrigin},
    filter_set::FilterSet,
};
use dioxus::prelude::*;

use crate::{
    api::events_api::{error_text, list_categories},
    components::{
        search_components::{event_list::EventList, filter_panel::FilterPanel},
        suspend_boundary::SuspendWrapper,
    },
    data_definitions::url_param::UrlParam,
    routes::Route,
};

/// Event search page. The filter set lives in the URL.
#[component]
pub fn EventsPage(filters: UrlParam<FilterSet>) -> Element {
    rsx! {
        Title { "Events - Highland Events Hub" }
        EventsPageRoot { filters: filters.0.clone() }
    }
}

#[component]
fn EventsPageRoot(filters: ReadSignal<FilterSet>) -> Element {
    let mut origin = use_signal(OriginTracker::default);
    use_effect(move || {
        let _ = filters.read();
        origin.write().filters_changed();
    });
    let mut search_count = use_signal(|| 0_u64);

    let categories = use_resource(move || list_categories());
    let category_list = match &*categories.read() {
        Some(Ok(list)) => list.clone(),
        _ => vec![],
    };
    let category_error = match &*categories.read() {
        Some(Err(e)) => Some(error_text(e)),
        _ => None,
    };

    let on_submit = Callback::new(move |request: FilterRequest| {
        origin.write().submitted(&request, &filters.peek());
        search_count += 1;
        navigator().push(Route::events_page(request.filters));
    });

    rsx! {
        div {
            id: "x-events-page-root",
            style: "display: flex; flex-direction: row; height: 100%; width: 100%;",
            FilterPanel { filters, categories: category_list, on_submit }
            div {
                style: "display: flex; flex-direction: column; flex-grow: 1; min-width: 0; overflow-y: auto;",
                if let Some(message) = category_error {
                    div { style: "padding: 8px 16px; color: #B91C1C; font-size: 14px;", "Categories unavailable: {message}" }
                }
                if origin.read().current() == SearchOrigin::Cleared {
                    div { style: "padding: 8px 16px; color: #475569; font-size: 14px;", "Filters cleared, showing all upcoming events." }
                }
                SuspendWrapper { EventList { filters, search_count } }
            }
        }
    }
}
