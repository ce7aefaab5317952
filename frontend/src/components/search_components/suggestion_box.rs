//! Glue between a [`Typeahead`] kept in a signal and the browser timer, plus
//! the dropdown every suggestion box renders.

use std::future::Future;

use common::{search_const::DEBOUNCE_MS, typeahead::Typeahead};
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

/// Feed a keystroke into `typeahead`. If the quiet period passes without
/// another keystroke, `fetch` runs with the trimmed query and its result is
/// applied (or dropped if something newer already landed).
pub fn on_keystroke<T, F, Fut>(mut typeahead: Signal<Typeahead<T>>, query: String, fetch: F)
where
    T: 'static,
    F: FnOnce(String) -> Fut + 'static,
    Fut: Future<Output = Result<Vec<T>, ServerFnError>> + 'static,
{
    let wait = typeahead.write().input(&query, || TimeoutFuture::new(DEBOUNCE_MS as u32));
    let Some(wait) = wait else {
        return;
    };
    spawn(async move {
        let Some(generation) = wait.elapsed().await else {
            return;
        };
        let Some(ticket) = typeahead.write().begin_fetch(generation) else {
            return;
        };
        let result = fetch(ticket.query.clone()).await;
        typeahead.write().apply(ticket, result);
    });
}

#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionLabel {
    pub text: String,
    pub badge: Option<String>,
}

impl SuggestionLabel {
    pub fn plain(text: impl Into<String>) -> Self {
        Self { text: text.into(), badge: None }
    }
}

#[component]
pub fn SuggestionList(
    labels: Vec<SuggestionLabel>,
    open: bool,
    loading: bool,
    empty_text: String,
    on_pick: Callback<usize>,
) -> Element {
    if !open && !loading {
        return rsx! {};
    }
    rsx! {
        ul {
            role: "listbox",
            style: "
                position: absolute;
                top: 100%;
                left: 0px;
                right: 0px;
                z-index: 100;
                list-style: none;
                margin: 4px 0 0 0;
                padding: 4px 0;
                background: white;
                border: 1px solid rgba(0,0,0,0.2);
                border-radius: 8px;
                box-shadow: 0 4px 12px rgba(0,0,0,0.12);
                max-height: 320px;
                overflow-y: auto;
            ",
            if loading && labels.is_empty() {
                li { style: "padding: 8px 12px; color: #64748B;", "Searching..." }
            } else if labels.is_empty() {
                li { style: "padding: 8px 12px; color: #64748B;", "{empty_text}" }
            }
            for (index, label) in labels.into_iter().enumerate() {
                li {
                    key: "{index}",
                    class: "x-suggestion-item",
                    role: "option",
                    style: "padding: 8px 12px; cursor: pointer; display: flex; gap: 8px; align-items: center;",
                    // mousedown, not click: the input must not lose focus first
                    onmousedown: move |event: MouseEvent| {
                        event.prevent_default();
                        on_pick(index);
                    },
                    span { style: "flex-grow: 1;", "{label.text}" }
                    if let Some(badge) = label.badge {
                        span {
                            style: "font-size: 12px; color: #475569; border: 1px solid #CBD5E1; border-radius: 999px; padding: 1px 8px;",
                            "{badge}"
                        }
                    }
                }
            }
        }
    }
}

/// Text box with the dropdown anchored under it.
#[component]
pub fn SuggestionInput(
    value: String,
    placeholder: String,
    #[props(default)] disabled: bool,
    oninput: Callback<String>,
    onblur: Callback<()>,
    children: Element,
) -> Element {
    rsx! {
        div {
            style: "position: relative; width: 100%;",
            input {
                r#type: "text",
                placeholder: "{placeholder}",
                disabled,
                autocomplete: "off",
                style: "
                    width: 100%;
                    padding: 8px 12px;
                    border: 1px solid rgba(101, 101, 101, 0.6);
                    border-radius: 8px;
                    font-size: 16px;
                    font-family: Roboto, sans-serif;
                ",
                value: "{value}",
                oninput: move |event: Event<FormData>| oninput(event.value()),
                onfocusout: move |_| onblur(()),
            }
            {children}
        }
    }
}
