mod shutdown;

use crate::{BroadcastMessage, HubHandle, Metrics, Moderator, RoomRegistry, SessionId};

use sf_core::{CommentLimits, Denylist};

use std::time::Duration;

use tokio::sync::mpsc;

pub(crate) const DEFAULT_COOLDOWN: Duration = Duration::from_millis(2000);

pub(crate) fn test_registry() -> RoomRegistry {
    RoomRegistry::new(10, DEFAULT_COOLDOWN, Metrics::new())
}

pub(crate) fn test_moderator(registry: &RoomRegistry) -> Moderator {
    Moderator::new(
        registry.clone(),
        CommentLimits::default(),
        Denylist::new(["死ね", "fuck", "shit"]),
        Metrics::new(),
    )
}

/// Attach a bare queue to a hub as if it were a session
pub(crate) async fn subscribe(
    hub: &HubHandle,
    capacity: usize,
) -> (SessionId, mpsc::Receiver<BroadcastMessage>) {
    let session_id = SessionId::new();
    let (tx, rx) = mpsc::channel(capacity);
    hub.register(session_id, tx).await.unwrap();
    (session_id, rx)
}

/// Wait until the hub has processed everything queued so far
pub(crate) async fn settle(hub: &HubHandle) -> usize {
    hub.subscriber_count().await.unwrap()
}
