use crate::ApiError;

use sf_core::{ErrorLocation, Rejection};
use sf_ws::WsError;

use std::panic::Location;

use axum::response::{IntoResponse, Response};
use http::{StatusCode, header::RETRY_AFTER};
use http_body_util::BodyExt;

async fn body_json(response: Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

fn here() -> ErrorLocation {
    ErrorLocation::from(Location::caller())
}

#[tokio::test]
async fn given_room_not_found_when_rendered_then_404_with_code() {
    // Given
    let error = ApiError::room_not_found("abcdefghij");

    // When
    let response = error.into_response();

    // Then
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "ROOM_NOT_FOUND");
    assert_eq!(json["error"]["message"], "room not found");
    assert!(json["error"].get("retryAfterMs").is_none());
}

#[tokio::test]
async fn given_rate_limited_when_rendered_then_429_with_retry_hint() {
    // Given
    let error = ApiError::from(Rejection::RateLimited {
        retry_after_ms: 1500,
        location: here(),
    });

    // When
    let response = error.into_response();

    // Then
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(response.headers()[RETRY_AFTER], "2");
    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "RATE_LIMITED");
    assert_eq!(json["error"]["retryAfterMs"], 1500);
}

#[test]
fn given_each_rejection_when_mapped_then_status_matches_taxonomy() {
    let cases = [
        (Rejection::EmptyText { location: here() }, StatusCode::BAD_REQUEST),
        (
            Rejection::TextTooLong {
                length: 201,
                max: 200,
                location: here(),
            },
            StatusCode::BAD_REQUEST,
        ),
        (
            Rejection::HandleTooLong {
                length: 33,
                max: 32,
                location: here(),
            },
            StatusCode::BAD_REQUEST,
        ),
        (Rejection::BlockedContent { location: here() }, StatusCode::FORBIDDEN),
        (
            Rejection::RoomPaused {
                room_id: "abcdefghij".into(),
                location: here(),
            },
            StatusCode::LOCKED,
        ),
        (
            Rejection::RateLimited {
                retry_after_ms: 10,
                location: here(),
            },
            StatusCode::TOO_MANY_REQUESTS,
        ),
        (
            Rejection::RoomNotFound {
                room_id: "abcdefghij".into(),
                location: here(),
            },
            StatusCode::NOT_FOUND,
        ),
        (
            Rejection::MalformedRequest {
                message: "invalid json".into(),
                location: here(),
            },
            StatusCode::BAD_REQUEST,
        ),
    ];

    for (rejection, expected) in cases {
        let code = rejection.code();
        assert_eq!(ApiError::from(rejection).status(), expected, "{code}");
    }
}

#[test]
fn given_ws_room_not_found_when_converted_then_rejection() {
    let error = ApiError::from(WsError::room_not_found("abcdefghij"));

    assert_eq!(error.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn given_hub_closed_when_converted_then_internal_error() {
    // Given
    let error = ApiError::from(WsError::HubClosed {
        room_id: "abcdefghij".into(),
        location: here(),
    });

    // When
    let response = error.into_response();

    // Then
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
}
