pub mod suggestion_box;
pub mod tag_typeahead;
pub mod location_search_box;
pub mod filter_panel;
pub mod event_card;
pub mod event_list;
pub mod venue_selector;
pub mod venue_typeahead;
