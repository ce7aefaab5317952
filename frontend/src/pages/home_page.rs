use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_action_icons::MdEvent;
use dioxus_free_icons::icons::md_maps_icons::MdPlace;

use common::filter_set::FilterSet;

use crate::routes::Route;

/// Home page
#[component]
pub fn HomePage() -> Element {
    rsx! {
        Title { "Highland Events Hub" }
        div {
            id: "x-home-container",
            style: "
                display: flex;
                flex-direction: column;
                gap: 20px;
                width: 100%;
                height: 100%;
                padding: 36px 40px;
                overflow: auto;
            ",
            div {
                style: "font-size: 46px; font-weight: 500; letter-spacing: -0.02em;",
                "Highland Events Hub"
            }
            div {
                style: "font-size: 18px; color: #475569; max-width: 720px;",
                "Ceilidhs, festivals, workshops and markets from Caithness to Lochaber. Filter by what, where and when."
            }
            div {
                style: "display: flex; flex-direction: row; gap: 20px; flex-wrap: wrap;",
                HomeCard {
                    to: Route::events_page(FilterSet::default()),
                    title: "Browse events",
                    text: "Search by category, tag, price, date or distance from a town.",
                    Icon { icon: MdEvent, style: "width: 28px; height: 28px; color: #14352B;" }
                }
                HomeCard {
                    to: Route::events_page(FilterSet { featured_only: true, ..Default::default() }),
                    title: "Featured this month",
                    text: "Hand-picked events from our organisers.",
                    Icon { icon: MdEvent, style: "width: 28px; height: 28px; color: #D97706;" }
                }
                HomeCard {
                    to: Route::VenuesPage {},
                    title: "Organiser venues",
                    text: "Pick the venues for your event, or add one straight from the map.",
                    Icon { icon: MdPlace, style: "width: 28px; height: 28px; color: #14352B;" }
                }
            }
        }
    }
}

#[component]
fn HomeCard(to: Route, title: String, text: String, children: Element) -> Element {
    rsx! {
        Link {
            to: to,
            div {
                style: "
                    display: flex;
                    flex-direction: column;
                    gap: 10px;
                    width: 300px;
                    padding: 20px;
                    background: white;
                    border: 1px solid #E2E8F0;
                    border-radius: 12px;
                    color: #0F172A;
                ",
                {children}
                span { style: "font-size: 20px; font-weight: 600;", "{title}" }
                span { style: "color: #475569;", "{text}" }
            }
        }
    }
}
