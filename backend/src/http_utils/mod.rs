//! HTTP plumbing shared by the API modules.

pub mod json_http;
pub mod highland_client;
pub mod places_client;
