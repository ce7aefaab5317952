//! Typed calls to the events API and the place provider.
//!
//! Each module adds methods to the relevant client and a free function that
//! builds the client from the environment, for use from server functions.

pub mod events;
pub mod categories;
pub mod tags;
pub mod venues;
pub mod places;
pub mod geocode;
pub mod venue_resolution;
