use common::event_models::EventSummary;
use dioxus::prelude::*;

#[component]
pub fn EventCard(event: ReadSignal<EventSummary>) -> Element {
    let EventSummary {
        title,
        start_date,
        end_date,
        venue_name,
        category,
        tags,
        image_url,
        featured,
        ..
    } = event.read().clone();
    let price = event.read().price_label();
    let day = start_date.get(..10).unwrap_or(&start_date).to_string();
    let until = end_date.as_deref().and_then(|d| d.get(..10)).filter(|d| *d != day).map(str::to_string);
    let border_color = if featured { "#D97706" } else { "#E2E8F0" };

    rsx! {
        li {
            style: "
                display: flex;
                flex-direction: row;
                gap: 14px;
                background: white;
                border: 2px solid {border_color};
                border-radius: 10px;
                padding: 12px 16px;
                margin: 8px 0;
                list-style: none;
            ",
            if let Some(src) = image_url {
                img { src: "{src}", alt: "", style: "width: 96px; height: 96px; object-fit: cover; border-radius: 6px; flex-shrink: 0;" }
            }
            div {
                style: "display: flex; flex-direction: column; gap: 4px; min-width: 0;",
                div {
                    style: "display: flex; gap: 8px; align-items: center;",
                    span { style: "font-size: 18px; font-weight: 600; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;", "{title}" }
                    if featured {
                        span { style: "font-size: 12px; color: #92400E; background: #FEF3C7; border-radius: 999px; padding: 1px 8px;", "Featured" }
                    }
                }
                span {
                    style: "color: #334155;",
                    "{day}"
                    if let Some(until) = until {
                        " – {until}"
                    }
                    if let Some(venue) = venue_name {
                        " · {venue}"
                    }
                }
                div {
                    style: "display: flex; flex-wrap: wrap; gap: 6px; font-size: 13px; color: #475569;",
                    if let Some(category) = category {
                        span { style: "font-weight: 600;", "{category.name}" }
                    }
                    for tag in tags {
                        span { key: "{tag.id}", "#{tag.name}" }
                    }
                }
                span { style: "color: #14352B; font-weight: 500;", "{price}" }
            }
        }
    }
}
