use crate::{ConnectionInfo, ConnectionLimits, Result as WsErrorResult, SessionId, WsError};

use sf_core::{ErrorLocation, RoomId};

use std::collections::HashMap;
use std::panic::Location;
use std::sync::Arc;

use log::{info, warn};
use tokio::sync::RwLock;

/// Registry for tracking live WebSocket sessions across all rooms
#[derive(Clone)]
pub struct ConnectionRegistry {
    inner: Arc<RwLock<RegistryInner>>,
    limits: ConnectionLimits,
}

struct RegistryInner {
    connections: HashMap<SessionId, ConnectionInfo>,
}

impl ConnectionRegistry {
    pub fn new(limits: ConnectionLimits) -> Self {
        Self {
            inner: Arc::new(RwLock::new(RegistryInner {
                connections: HashMap::new(),
            })),
            limits,
        }
    }

    /// Reserve a slot for a new session, enforcing the total cap
    pub async fn register(&self, room_id: RoomId) -> WsErrorResult<SessionId> {
        let mut inner = self.inner.write().await;

        if inner.connections.len() >= self.limits.max_total {
            warn!(
                "Total connection limit reached: {}/{}",
                inner.connections.len(),
                self.limits.max_total
            );
            return Err(WsError::ConnectionLimitExceeded {
                current: inner.connections.len(),
                max: self.limits.max_total,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let session_id = SessionId::new();
        let info = ConnectionInfo {
            session_id,
            room_id,
            connected_at: chrono::Utc::now(),
        };

        inner.connections.insert(session_id, info);
        info!(
            "Registered session {session_id} ({} total)",
            inner.connections.len()
        );

        Ok(session_id)
    }

    pub async fn unregister(&self, session_id: SessionId) {
        let mut inner = self.inner.write().await;

        if inner.connections.remove(&session_id).is_some() {
            info!(
                "Unregistered session {session_id} ({} total remaining)",
                inner.connections.len()
            );
        }
    }

    pub async fn get(&self, session_id: SessionId) -> Option<ConnectionInfo> {
        let inner = self.inner.read().await;
        inner.connections.get(&session_id).cloned()
    }

    pub async fn total_count(&self) -> usize {
        let inner = self.inner.read().await;
        inner.connections.len()
    }

    pub async fn room_count(&self, room_id: &RoomId) -> usize {
        let inner = self.inner.read().await;
        inner
            .connections
            .values()
            .filter(|info| &info.room_id == room_id)
            .count()
    }
}
