//! Viewer comment submission

use crate::{ApiError, ApiResult, ClientOrigin, parse_room_id};

use sf_ws::AppState;

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct PostMessageRequest {
    pub text: String,
    #[serde(default)]
    pub handle: String,
}

#[derive(Debug, Serialize)]
pub struct OkResponse {
    pub ok: bool,
}

/// POST /rooms/{room_id}/messages
///
/// The body is decoded by hand so that a bad body is a `MALFORMED_REQUEST`
/// with the usual error shape rather than axum's plain-text rejection.
pub async fn post_message(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
    origin: ClientOrigin,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<OkResponse>)> {
    let room_id = parse_room_id(&room_id)?;

    let request: PostMessageRequest = serde_json::from_slice(&body)
        .map_err(|e| ApiError::malformed(format!("invalid json: {e}")))?;

    state
        .moderator
        .submit(&room_id, origin.as_str(), &request.handle, &request.text)
        .await?;

    Ok((StatusCode::ACCEPTED, Json(OkResponse { ok: true })))
}
