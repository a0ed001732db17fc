use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Invalid renderer setting {field}: {message} {location}")]
    InvalidConfig {
        field: &'static str,
        message: String,
        location: ErrorLocation,
    },
}

impl RenderError {
    #[track_caller]
    pub fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, RenderError>;
