mod base_url;
mod client_origin;
mod error;
mod resolve;
