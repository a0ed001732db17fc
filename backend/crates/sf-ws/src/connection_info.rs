use crate::SessionId;

use sf_core::RoomId;

use chrono::{DateTime, Utc};

/// Information about an active session
#[derive(Debug, Clone)]
pub struct ConnectionInfo {
    pub session_id: SessionId,
    pub room_id: RoomId,
    pub connected_at: DateTime<Utc>,
}
