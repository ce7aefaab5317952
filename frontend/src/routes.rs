use common::filter_set::FilterSet;
use dioxus::prelude::*;

use crate::components::navbar::Navbar;
use crate::data_definitions::url_param::UrlParam;
use crate::pages::events_page::EventsPage;
use crate::pages::home_page::HomePage;
use crate::pages::venues_page::VenuesPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/")]
    HomePage {},


    #[route("/events/:filters")]
    EventsPage { filters: UrlParam<FilterSet> },


    #[route("/organizer/venues")]
    VenuesPage {},

}

impl Route {
    pub fn events_page(filters: FilterSet) -> Self {
        Self::EventsPage { filters: UrlParam::from(filters) }
    }
}
