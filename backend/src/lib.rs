//! Server-side access to the Highland events API and the place provider.

pub mod config;
pub mod http_utils;
pub mod api;
