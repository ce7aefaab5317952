//! Common library exports shared between frontend and backend.

extern crate serde;


pub mod search_const;
pub mod error;
pub mod event_models;
pub mod venue_models;
pub mod search_result;
pub mod filter_set;
pub mod facet_selection;
pub mod debounce;
pub mod typeahead;
pub mod paged_list;
pub mod data_sources;
pub mod venue_candidate;
pub mod venue_selection;
pub mod geolocation;
