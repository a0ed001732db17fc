pub mod admin;
pub mod base_url;
pub mod client_origin;
pub mod error;
pub mod messages;
pub mod resolve;
pub mod rooms;
