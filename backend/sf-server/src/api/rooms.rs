//! Room provisioning and status

use crate::{ApiResult, base_url, resolve_room};

use sf_ws::AppState;

use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomResponse {
    pub room_id: String,
    /// Display surface for the presenter's screen
    pub overlay_url: String,
    /// Submission page handed to the audience
    pub post_url: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomStatusResponse {
    pub room_id: String,
    pub paused: bool,
    pub slow_mode_ms: u64,
    pub subscribers: usize,
}

/// POST /rooms
pub async fn create_room(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> (StatusCode, Json<CreateRoomResponse>) {
    let room_id = state.rooms.create_room().await;
    let base = base_url(&headers);

    (
        StatusCode::CREATED,
        Json(CreateRoomResponse {
            overlay_url: format!("{base}/overlay/{room_id}"),
            post_url: format!("{base}/post/{room_id}"),
            room_id: room_id.to_string(),
        }),
    )
}

/// GET /rooms/{room_id}
pub async fn get_room(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
) -> ApiResult<Json<RoomStatusResponse>> {
    let room = resolve_room(&state, &room_id).await?;
    let subscribers = room.hub.subscriber_count().await?;

    Ok(Json(RoomStatusResponse {
        room_id: room.room_id.to_string(),
        paused: room.paused,
        slow_mode_ms: u64::try_from(room.slow_mode.as_millis()).unwrap_or(u64::MAX),
        subscribers,
    }))
}
