//! Event list fed a page at a time with a "load more" button.

use common::{
    event_models::EventSummary,
    filter_set::FilterSet,
    paged_list::{LoadState, PageRequest, PagedList},
    search_const::PAGE_SIZE,
};
use dioxus::prelude::*;

use crate::{
    api::events_api::{error_text, list_events},
    components::{
        error_boundary::ComponentErrorDisplay,
        search_components::event_card::EventCard,
        suspend_boundary::LoadingIndicator,
    },
};

async fn fetch_page(mut list: Signal<PagedList<EventSummary>>, filters: FilterSet, request: PageRequest) {
    let result = list_events(filters, request.skip, request.limit).await.map_err(|e| error_text(&e));
    if !list.write().apply_page(request, result) {
        dioxus::logger::tracing::debug!("dropped page at offset {} for a superseded filter", request.skip);
    }
}

/// `search_count` bumps on every submit so that re-sending the same filters
/// (e.g. clearing an already empty filter) still reloads.
#[component]
pub fn EventList(filters: ReadSignal<FilterSet>, search_count: ReadSignal<u64>) -> Element {
    let mut list = use_signal(|| PagedList::<EventSummary>::new(PAGE_SIZE));

    use_effect(move || {
        let filters = filters.read().clone();
        let _ = search_count.read();
        let request = list.write().reset();
        spawn(fetch_page(list, filters, request));
    });

    let load_more = move |_: MouseEvent| {
        let next = list.write().next_page();
        if let Some(request) = next {
            spawn(fetch_page(list, filters.peek().clone(), request));
        }
    };

    let current = list.read();
    let shown = current.items().len();
    let total = current.total();
    let has_more = current.has_more();
    let loading = current.is_loading();
    let failure = match current.state() {
        LoadState::Failed(message) => Some(message.clone()),
        _ => None,
    };
    let empty = current.is_empty_result();
    let events = current.items().to_vec();
    drop(current);

    rsx! {
        div {
            id: "x-event-list",
            style: "display: flex; flex-direction: column; padding: 16px; flex-grow: 1; min-width: 0;",
            if total > 0 {
                span { style: "color: #475569; font-size: 14px;", "Showing {shown} of {total} events" }
            }
            if empty {
                div {
                    style: "padding: 24px; color: #475569; font-size: 16px;",
                    "No events match these filters. Try widening the dates or the distance."
                }
            }
            ul {
                style: "padding: 0; margin: 0;",
                for event in events {
                    EventCard { key: "{event.id}", event }
                }
            }
            if let Some(message) = failure {
                ComponentErrorDisplay {
                    error_txt: format!("Couldn't load events: {message}"),
                    button {
                        style: "color: #4F46E5; border: 1px solid #4F46E5; background: white; padding: 6px 12px; border-radius: 6px; cursor: pointer;",
                        onclick: load_more,
                        "Try again"
                    }
                }
            } else if loading {
                LoadingIndicator { label: "Loading events..." }
            } else if has_more {
                button {
                    style: "align-self: center; margin: 12px; padding: 10px 24px; border: 1px solid #14352B; border-radius: 999px; background: white; color: #14352B; font-size: 16px; cursor: pointer;",
                    disabled: loading,
                    onclick: load_more,
                    "Load more"
                }
            }
        }
    }
}
