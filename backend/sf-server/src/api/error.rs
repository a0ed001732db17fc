//! REST API error types
//!
//! Every failure renders as `{"error":{"code","message"}}` with the status
//! that matches the rejection reason.

use sf_core::{ErrorLocation, Rejection};
use sf_ws::WsError;

use std::panic::Location;

use axum::{
    Json,
    http::{HeaderValue, StatusCode, header::RETRY_AFTER},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "ROOM_PAUSED", "RATE_LIMITED")
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_after_ms: Option<u64>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// Submission or admin request refused
    #[error("Rejected: {0}")]
    Rejected(#[from] Rejection),

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn room_not_found(room_id: impl Into<String>) -> Self {
        Self::Rejected(Rejection::RoomNotFound {
            room_id: room_id.into(),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    #[track_caller]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Rejected(Rejection::MalformedRequest {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Rejected(rejection) => match rejection {
                Rejection::EmptyText { .. }
                | Rejection::TextTooLong { .. }
                | Rejection::HandleTooLong { .. }
                | Rejection::MalformedRequest { .. } => StatusCode::BAD_REQUEST,
                Rejection::BlockedContent { .. } => StatusCode::FORBIDDEN,
                Rejection::RoomNotFound { .. } => StatusCode::NOT_FOUND,
                Rejection::RoomPaused { .. } => StatusCode::LOCKED,
                Rejection::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            },
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            log::error!("{self}");
        } else {
            log::debug!("{self}");
        }

        let body = match self {
            Self::Rejected(rejection) => ApiErrorBody {
                code: rejection.code().to_string(),
                message: rejection.client_message(),
                retry_after_ms: match rejection {
                    Rejection::RateLimited { retry_after_ms, .. } => Some(retry_after_ms),
                    _ => None,
                },
            },
            Self::Internal { message, .. } => ApiErrorBody {
                code: "INTERNAL_ERROR".into(),
                message,
                retry_after_ms: None,
            },
        };

        let retry_after = body
            .retry_after_ms
            .map(|ms| HeaderValue::from(ms.div_ceil(1000)));

        let mut response = (status, Json(ApiErrorResponse { error: body })).into_response();
        if let Some(seconds) = retry_after {
            response.headers_mut().insert(RETRY_AFTER, seconds);
        }
        response
    }
}

/// Convert sf-ws errors to API errors
impl From<WsError> for ApiError {
    #[track_caller]
    fn from(e: WsError) -> Self {
        match e {
            WsError::RoomNotFound { room_id, .. } => ApiError::room_not_found(room_id),
            _ => ApiError::Internal {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
