//! Presenter controls for a room

use crate::{ApiError, ApiResult, OkResponse, parse_room_id};

use sf_ws::AppState;

use std::time::Duration;

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct PauseResponse {
    pub ok: bool,
    pub paused: bool,
}

#[derive(Debug, Deserialize)]
pub struct SlowModeRequest {
    pub ms: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlowModeResponse {
    pub ok: bool,
    pub slow_mode_ms: u64,
}

/// POST /rooms/{room_id}/pause
pub async fn pause(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
) -> ApiResult<Json<PauseResponse>> {
    set_paused(&state, &room_id, true).await
}

/// POST /rooms/{room_id}/resume
pub async fn resume(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
) -> ApiResult<Json<PauseResponse>> {
    set_paused(&state, &room_id, false).await
}

async fn set_paused(state: &AppState, room_id: &str, paused: bool) -> ApiResult<Json<PauseResponse>> {
    let room_id = parse_room_id(room_id)?;
    state.rooms.set_paused(&room_id, paused).await?;
    Ok(Json(PauseResponse { ok: true, paused }))
}

/// POST /rooms/{room_id}/clear
pub async fn clear(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
) -> ApiResult<Json<OkResponse>> {
    let room_id = parse_room_id(&room_id)?;
    state.rooms.request_clear(&room_id).await?;
    Ok(Json(OkResponse { ok: true }))
}

/// POST /rooms/{room_id}/slowmode
///
/// Negative intervals are treated as zero, which restores the default cooldown.
pub async fn set_slow_mode(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
    body: Bytes,
) -> ApiResult<Json<SlowModeResponse>> {
    let room_id = parse_room_id(&room_id)?;
    if !state.rooms.contains(&room_id).await {
        return Err(ApiError::room_not_found(room_id.as_str()));
    }

    let request: SlowModeRequest = serde_json::from_slice(&body)
        .map_err(|e| ApiError::malformed(format!("invalid json: {e}")))?;
    let slow_mode_ms = u64::try_from(request.ms).unwrap_or(0);

    state
        .rooms
        .set_slow_mode(&room_id, Duration::from_millis(slow_mode_ms))
        .await?;

    Ok(Json(SlowModeResponse {
        ok: true,
        slow_mode_ms,
    }))
}
