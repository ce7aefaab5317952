//! Side navigation bar.

use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::{MdEvent, MdHome};
use dioxus_free_icons::icons::md_maps_icons::MdPlace;
use dioxus_free_icons::{Icon, IconShape};

use common::filter_set::FilterSet;

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::routes::Route;

#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            id: "x-nav-container",
            style: "
                display: flex;
                flex-direction: row;
                width: 100%;
                height: 100%;
            ",

            nav {
                id: "x-nav-sidebar",
                style: "
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 24px;
                    width: 70px;
                    height: 100%;
                    background-color: #14352B;
                    padding: 16px;
                ",
                Link {
                    to: Route::HomePage {},
                    span { style: "color: white; font-weight: 700; font-size: 18px;", "HEH" }
                }
                IconLink { to: Route::HomePage {}, icon: MdHome, label: "Home" }
                IconLink { to: Route::events_page(FilterSet::default()), icon: MdEvent, label: "Events" }
                IconLink { to: Route::VenuesPage {}, icon: MdPlace, label: "Venues" }
            }

            div {
                id: "x-page-container",
                style: "flex-grow: 1; min-width: 100px; overflow: auto;",
                GlobalErrorBoundary {
                    boundary_name: "Navbar".to_string(),
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[component]
fn IconLink<T: IconShape + Clone + PartialEq + 'static>(to: Route, icon: T, label: String) -> Element {
    rsx! {
        Link {
            to: to,
            span {
                title: "{label}",
                style: "color: white;",
                Icon { icon: icon, style: "width: 26px; height: 26px;" }
            }
        }
    }
}
