//! Tunables shared by the search controls and the list loader.

/// Number of events requested per page of the event list.
pub const PAGE_SIZE: u64 = 12;

/// Quiet period after the last keystroke before a suggestion fetch fires.
pub const DEBOUNCE_MS: u64 = 300;

/// Shortest query that reaches the network for tag and venue suggestions.
pub const MIN_QUERY_LEN: usize = 2;

/// Location lookups need a little more text before they are useful.
pub const MIN_LOCATION_QUERY_LEN: usize = 3;

/// How many tag suggestions to ask for.
pub const TAG_SUGGESTION_LIMIT: u64 = 10;

pub const DEFAULT_RADIUS_KM: u32 = 20;
pub const RADIUS_CHOICES_KM: [u32; 3] = [10, 20, 50];

/// Upper bound for any single outgoing HTTP request.
pub const REQUEST_TIMEOUT_SECS: u64 = 10;
