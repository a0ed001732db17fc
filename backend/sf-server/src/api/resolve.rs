//! Room path resolution

use crate::{ApiError, ApiResult};

use sf_core::RoomId;
use sf_ws::{AppState, RoomSnapshot};

/// Parse a `{room_id}` path segment. A malformed id cannot name a room, so
/// it reports the same way as an unknown one.
pub fn parse_room_id(raw: &str) -> ApiResult<RoomId> {
    RoomId::parse(raw).map_err(|e| {
        log::debug!("Malformed room id in path: {e}");
        ApiError::room_not_found(raw)
    })
}

/// Look up a live room by its path segment
pub async fn resolve_room(state: &AppState, raw: &str) -> ApiResult<RoomSnapshot> {
    let room_id = parse_room_id(raw)?;
    Ok(state.rooms.lookup(&room_id).await?)
}
