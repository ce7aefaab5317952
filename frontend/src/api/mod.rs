pub mod events_api;
pub mod device_geolocation;
