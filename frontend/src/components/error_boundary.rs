//! Error boundaries and the inline error box used by lists and pickers.

use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |err: ErrorContext| {
                rsx! {
                    div {
                        style: "margin: 24px; padding: 16px; border: 1px solid #DC2626; border-radius: 8px; background: #FEF2F2;",
                        h1 { style: "color: #B91C1C; font-size: 32px; margin: 0 0 8px 0;", "Something went wrong" }
                        p { style: "color: #7F1D1D;", "Boundary: {boundary_name}" }
                        Link {
                            to: Route::HomePage {},
                            span { style: "color: #4F46E5; font-size: 18px;", "Back to the Highland Events Hub home page" }
                        }
                        pre {
                            style: "color: #111827; margin-top: 12px; text-wrap: auto;",
                            "{err:#?}"
                        }
                    }
                }
            },
            children
        }
    }
}

#[component]
pub fn ComponentErrorBoundary(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |err: ErrorContext| {
                let error_txt = match err.error() {
                    Some(e) => format!("{:#?}", e.0),
                    None => "Unknown error".to_string(),
                };
                rsx! {
                    ComponentErrorDisplay {
                        error_txt,
                        button {
                            style: "color: #4F46E5; font-size: 16px; border: 1px solid #4F46E5; background: white; padding: 6px 12px; border-radius: 6px; cursor: pointer;",
                            onclick: move |_| {
                                err.clear_errors();
                            },
                            "Try again"
                        }
                    }
                }
            },
            div {
                width: "100%",
                {children}
            }
        }
    }
}

/// Inline error box. Kept visually distinct from the "no results" state.
#[component]
pub fn ComponentErrorDisplay(error_txt: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        div {
            role: "alert",
            style: "
                display: flex;
                flex-direction: column;
                align-items: flex-start;
                gap: 8px;
                padding: 12px 16px;
                margin: 8px 0;
                border: 1px solid #DC2626;
                border-radius: 8px;
                background: #FEF2F2;
                color: #7F1D1D;
            ",
            span { style: "font-weight: 500;", "{error_txt}" }
            {children}
        }
    }
}
