//! Ingress moderation for viewer submissions.
//!
//! Checks run in a fixed order and the first failure wins:
//! room exists, text present, text length, handle length, denylist, pause,
//! cooldown. Only an accepted submission writes to the cooldown ledger or
//! reaches the hub.

use crate::{Metrics, RoomRegistry};

use sf_core::{Comment, CommentLimits, Denylist, Envelope, ErrorLocation, Identity, Rejection, RoomId};

use std::panic::Location;
use std::sync::Arc;

use log::{debug, error};
use tokio::time::Instant;

#[derive(Clone)]
pub struct Moderator {
    registry: RoomRegistry,
    limits: CommentLimits,
    denylist: Arc<Denylist>,
    metrics: Metrics,
}

impl Moderator {
    pub fn new(
        registry: RoomRegistry,
        limits: CommentLimits,
        denylist: Denylist,
        metrics: Metrics,
    ) -> Self {
        Self {
            registry,
            limits,
            denylist: Arc::new(denylist),
            metrics,
        }
    }

    /// Validate a submission from `origin` and publish it on acceptance
    pub async fn submit(
        &self,
        room_id: &RoomId,
        origin: &str,
        handle: &str,
        text: &str,
    ) -> Result<(), Rejection> {
        self.submit_at(room_id, origin, handle, text, Instant::now())
            .await
    }

    /// [`Moderator::submit`] with an explicit clock reading for the cooldown
    pub async fn submit_at(
        &self,
        room_id: &RoomId,
        origin: &str,
        handle: &str,
        text: &str,
        now: Instant,
    ) -> Result<(), Rejection> {
        let result = self.moderate(room_id, origin, handle, text, now).await;

        match &result {
            Ok(()) => self.metrics.submission_accepted(),
            Err(rejection) => {
                debug!("Rejected submission to room {room_id}: {rejection}");
                self.metrics.submission_rejected(rejection.code());
            }
        }

        result
    }

    async fn moderate(
        &self,
        room_id: &RoomId,
        origin: &str,
        handle: &str,
        text: &str,
        now: Instant,
    ) -> Result<(), Rejection> {
        if !self.registry.contains(room_id).await {
            return Err(Rejection::RoomNotFound {
                room_id: room_id.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let comment = Comment::new(text, handle, &self.limits)?;

        if self.denylist.matches(comment.text()) {
            return Err(Rejection::BlockedContent {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let identity = Identity::new(origin, comment.handle());
        let hub = self.registry.admit(room_id, &identity, now).await?;

        // Delivery is best effort once admitted
        if let Err(e) = hub.publish_envelope(&Envelope::from(comment)).await {
            error!("Failed to publish accepted comment to room {room_id}: {e}");
            self.metrics.error_occurred(e.error_code());
        }

        Ok(())
    }
}
