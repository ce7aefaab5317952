use common::{
    event_models::TagSummary,
    search_const::{MIN_QUERY_LEN, TAG_SUGGESTION_LIMIT},
    typeahead::Typeahead,
};
use dioxus::prelude::*;

use crate::{
    api::events_api::search_tags,
    components::search_components::suggestion_box::{SuggestionInput, SuggestionLabel, SuggestionList, on_keystroke},
};

#[component]
pub fn TagTypeahead(on_pick: Callback<String>) -> Element {
    let mut typeahead = use_signal(|| Typeahead::<TagSummary>::new(MIN_QUERY_LEN));

    let labels = typeahead
        .read()
        .suggestions()
        .iter()
        .map(|tag| SuggestionLabel {
            text: tag.name.clone(),
            badge: tag.usage_count.map(|n| format!("{n} events")),
        })
        .collect::<Vec<_>>();
    let query = typeahead.read().query().to_string();
    let open = typeahead.read().is_open();
    let loading = typeahead.read().is_loading();

    rsx! {
        SuggestionInput {
            value: query,
            placeholder: "Add a tag",
            oninput: move |q: String| {
                on_keystroke(typeahead, q, |q| search_tags(q, TAG_SUGGESTION_LIMIT));
            },
            onblur: move |_| typeahead.write().dismiss(),
            SuggestionList {
                labels,
                open,
                loading,
                empty_text: "No matching tags",
                on_pick: move |index: usize| {
                    let picked = typeahead.write().select(index);
                    if let Some(tag) = picked {
                        typeahead.write().reset();
                        on_pick(tag.name);
                    }
                },
            }
        }
    }
}
