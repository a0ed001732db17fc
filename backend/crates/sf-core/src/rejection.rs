//! Ingress rejection reasons.
//!
//! Every way a comment submission can be refused, in the order the moderator
//! checks them. All variants are client-facing and non-fatal.

use crate::ErrorLocation;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Rejection {
    #[error("Text is required {location}")]
    EmptyText { location: ErrorLocation },

    #[error("Text too long: {length} characters (max {max}) {location}")]
    TextTooLong {
        length: usize,
        max: usize,
        location: ErrorLocation,
    },

    #[error("Handle too long: {length} characters (max {max}) {location}")]
    HandleTooLong {
        length: usize,
        max: usize,
        location: ErrorLocation,
    },

    #[error("Text contains blocked content {location}")]
    BlockedContent { location: ErrorLocation },

    #[error("Room {room_id} is paused {location}")]
    RoomPaused {
        room_id: String,
        location: ErrorLocation,
    },

    #[error("Rate limited, retry in {retry_after_ms}ms {location}")]
    RateLimited {
        retry_after_ms: u64,
        location: ErrorLocation,
    },

    #[error("Room not found: {room_id} {location}")]
    RoomNotFound {
        room_id: String,
        location: ErrorLocation,
    },

    #[error("Malformed request: {message} {location}")]
    MalformedRequest {
        message: String,
        location: ErrorLocation,
    },
}

impl Rejection {
    /// Stable machine-readable code reported to the submitter
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyText { .. } => "EMPTY_TEXT",
            Self::TextTooLong { .. } => "TEXT_TOO_LONG",
            Self::HandleTooLong { .. } => "HANDLE_TOO_LONG",
            Self::BlockedContent { .. } => "BLOCKED_CONTENT",
            Self::RoomPaused { .. } => "ROOM_PAUSED",
            Self::RateLimited { .. } => "RATE_LIMITED",
            Self::RoomNotFound { .. } => "ROOM_NOT_FOUND",
            Self::MalformedRequest { .. } => "MALFORMED_REQUEST",
        }
    }

    /// Human-readable message without the source location
    pub fn client_message(&self) -> String {
        match self {
            Self::EmptyText { .. } => "text required".to_string(),
            Self::TextTooLong { max, .. } => format!("text too long (max {max} characters)"),
            Self::HandleTooLong { max, .. } => format!("handle too long (max {max} characters)"),
            Self::BlockedContent { .. } => "ng word detected".to_string(),
            Self::RoomPaused { .. } => "paused".to_string(),
            Self::RateLimited { retry_after_ms, .. } => {
                format!("rate limited, retry in {retry_after_ms}ms")
            }
            Self::RoomNotFound { .. } => "room not found".to_string(),
            Self::MalformedRequest { message, .. } => message.clone(),
        }
    }
}
