//! Process-wide table of rooms.
//!
//! All room state (pause flag, slow mode, cooldown ledger, hub handle) sits
//! behind one async mutex. Every access holds it briefly and never across
//! hub I/O: callers clone the [`HubHandle`] out and publish after release.

use crate::{HubHandle, Metrics, Result as WsErrorResult, WsError};

use sf_core::{Envelope, ErrorLocation, Identity, Rejection, RoomId};

use std::collections::HashMap;
use std::panic::Location;
use std::sync::Arc;
use std::time::Duration;

use log::{debug, info};
use tokio::sync::Mutex;
use tokio::time::Instant;

/// Ledger size that triggers the first sweep of expired entries
pub const LEDGER_SWEEP_THRESHOLD: usize = 1024;

/// Point-in-time view of a room's moderation state
#[derive(Clone)]
pub struct RoomSnapshot {
    pub room_id: RoomId,
    pub paused: bool,
    pub slow_mode: Duration,
    pub hub: HubHandle,
}

struct Room {
    hub: HubHandle,
    paused: bool,
    /// Zero means the registry default cooldown applies
    slow_mode: Duration,
    /// identity -> time of last accepted submission
    ledger: HashMap<Identity, Instant>,
    /// Ledger size at which expired entries are swept next
    next_sweep: usize,
}

struct RegistryInner {
    rooms: HashMap<RoomId, Room>,
}

/// Registry of live rooms, shared by every request handler
#[derive(Clone)]
pub struct RoomRegistry {
    inner: Arc<Mutex<RegistryInner>>,
    room_id_length: usize,
    default_cooldown: Duration,
    metrics: Metrics,
}

impl RoomRegistry {
    pub fn new(room_id_length: usize, default_cooldown: Duration, metrics: Metrics) -> Self {
        Self {
            inner: Arc::new(Mutex::new(RegistryInner {
                rooms: HashMap::new(),
            })),
            room_id_length,
            default_cooldown,
            metrics,
        }
    }

    /// Allocate a fresh room id, start its hub and register it
    pub async fn create_room(&self) -> RoomId {
        let mut inner = self.inner.lock().await;

        let mut room_id = RoomId::generate(self.room_id_length);
        while inner.rooms.contains_key(&room_id) {
            debug!("Room id collision on {room_id}, regenerating");
            room_id = RoomId::generate(self.room_id_length);
        }

        let hub = HubHandle::spawn(room_id.clone(), self.metrics.clone());
        inner.rooms.insert(
            room_id.clone(),
            Room {
                hub,
                paused: false,
                slow_mode: Duration::ZERO,
                ledger: HashMap::new(),
                next_sweep: LEDGER_SWEEP_THRESHOLD,
            },
        );
        self.metrics.room_created();
        info!("Created room {room_id} ({} rooms)", inner.rooms.len());

        room_id
    }

    pub async fn lookup(&self, room_id: &RoomId) -> WsErrorResult<RoomSnapshot> {
        let inner = self.inner.lock().await;
        let room = inner
            .rooms
            .get(room_id)
            .ok_or_else(|| WsError::room_not_found(room_id.as_str()))?;

        Ok(RoomSnapshot {
            room_id: room_id.clone(),
            paused: room.paused,
            slow_mode: room.slow_mode,
            hub: room.hub.clone(),
        })
    }

    pub async fn contains(&self, room_id: &RoomId) -> bool {
        self.inner.lock().await.rooms.contains_key(room_id)
    }

    pub async fn hub(&self, room_id: &RoomId) -> WsErrorResult<HubHandle> {
        let inner = self.inner.lock().await;
        inner
            .rooms
            .get(room_id)
            .map(|room| room.hub.clone())
            .ok_or_else(|| WsError::room_not_found(room_id.as_str()))
    }

    /// Idempotent
    pub async fn set_paused(&self, room_id: &RoomId, paused: bool) -> WsErrorResult<()> {
        let mut inner = self.inner.lock().await;
        let room = inner
            .rooms
            .get_mut(room_id)
            .ok_or_else(|| WsError::room_not_found(room_id.as_str()))?;

        room.paused = paused;
        info!("Room {room_id} paused={paused}");
        Ok(())
    }

    /// Zero restores the default cooldown
    pub async fn set_slow_mode(&self, room_id: &RoomId, interval: Duration) -> WsErrorResult<()> {
        let mut inner = self.inner.lock().await;
        let room = inner
            .rooms
            .get_mut(room_id)
            .ok_or_else(|| WsError::room_not_found(room_id.as_str()))?;

        room.slow_mode = interval;
        info!("Room {room_id} slow mode set to {}ms", interval.as_millis());
        Ok(())
    }

    /// Publish a `clear` envelope to the room's hub
    pub async fn request_clear(&self, room_id: &RoomId) -> WsErrorResult<()> {
        let hub = self.hub(room_id).await?;
        hub.publish_envelope(&Envelope::Clear).await?;
        info!("Cleared room {room_id}");
        Ok(())
    }

    /// Pause check plus cooldown check-and-record for one identity, in a
    /// single locked region. On success the submission time is recorded and
    /// the room's hub is returned for publishing.
    pub async fn admit(
        &self,
        room_id: &RoomId,
        identity: &Identity,
        now: Instant,
    ) -> Result<HubHandle, Rejection> {
        let location = ErrorLocation::from(Location::caller());
        let mut inner = self.inner.lock().await;

        let Some(room) = inner.rooms.get_mut(room_id) else {
            return Err(Rejection::RoomNotFound {
                room_id: room_id.to_string(),
                location,
            });
        };

        if room.paused {
            return Err(Rejection::RoomPaused {
                room_id: room_id.to_string(),
                location,
            });
        }

        let cooldown = if room.slow_mode.is_zero() {
            self.default_cooldown
        } else {
            room.slow_mode
        };

        if let Some(last) = room.ledger.get(identity) {
            let elapsed = now.saturating_duration_since(*last);
            if elapsed < cooldown {
                let remaining = cooldown - elapsed;
                return Err(Rejection::RateLimited {
                    retry_after_ms: remaining.as_micros().div_ceil(1000) as u64,
                    location,
                });
            }
        }

        room.ledger.insert(identity.clone(), now);

        if room.ledger.len() >= room.next_sweep {
            // Entries past the longest cooldown can no longer reject anything
            let horizon = cooldown.max(self.default_cooldown);
            let before = room.ledger.len();
            room.ledger.retain(|_, last| now.saturating_duration_since(*last) < horizon);
            room.next_sweep = (room.ledger.len() * 2).max(LEDGER_SWEEP_THRESHOLD);
            debug!(
                "Swept {} expired ledger entries in room {room_id} ({} remain)",
                before - room.ledger.len(),
                room.ledger.len()
            );
        }

        Ok(room.hub.clone())
    }

    #[cfg(test)]
    pub(crate) async fn ledger_len(&self, room_id: &RoomId) -> Option<usize> {
        let inner = self.inner.lock().await;
        inner.rooms.get(room_id).map(|room| room.ledger.len())
    }

    pub async fn room_count(&self) -> usize {
        self.inner.lock().await.rooms.len()
    }
}
