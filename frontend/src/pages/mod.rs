pub mod home_page;
pub mod events_page;
pub mod venues_page;
