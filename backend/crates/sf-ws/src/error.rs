use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WsError {
    #[error("Connection lost: {reason} {location}")]
    ConnectionLost {
        reason: String,
        location: ErrorLocation,
    },

    #[error("Hub for room {room_id} is no longer running {location}")]
    HubClosed {
        room_id: String,
        location: ErrorLocation,
    },

    #[error("Room not found: {room_id} {location}")]
    RoomNotFound {
        room_id: String,
        location: ErrorLocation,
    },

    #[error("Connection limit exceeded: {current} connections (max: {max}) {location}")]
    ConnectionLimitExceeded {
        current: usize,
        max: usize,
        location: ErrorLocation,
    },

    #[error("Relay rate limit exceeded: {limit} frames per {window_secs}s {location}")]
    RelayRateLimited {
        limit: u32,
        window_secs: u64,
        location: ErrorLocation,
    },

    #[error("Envelope encoding failed: {source} {location}")]
    Encode {
        #[source]
        source: sf_core::CoreError,
        location: ErrorLocation,
    },

    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl WsError {
    #[track_caller]
    pub fn connection_lost(reason: impl Into<String>) -> Self {
        Self::ConnectionLost {
            reason: reason.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn room_not_found(room_id: impl Into<String>) -> Self {
        Self::RoomNotFound {
            room_id: room_id.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Short label for metrics
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::ConnectionLost { .. } => "CONNECTION_LOST",
            Self::HubClosed { .. } => "HUB_CLOSED",
            Self::RoomNotFound { .. } => "ROOM_NOT_FOUND",
            Self::ConnectionLimitExceeded { .. } => "CONNECTION_LIMIT",
            Self::RelayRateLimited { .. } => "RATE_LIMITED",
            Self::Encode { .. } => "ENCODE_ERROR",
            Self::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

impl From<sf_core::CoreError> for WsError {
    #[track_caller]
    fn from(source: sf_core::CoreError) -> Self {
        Self::Encode {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, WsError>;
