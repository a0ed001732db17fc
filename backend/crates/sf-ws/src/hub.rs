//! Per-room broadcast hub.
//!
//! The hub is an actor: one task owns the subscriber set and processes
//! register, unregister and publish commands from a bounded mailbox in
//! arrival order. Nothing else touches the subscriber map, so it needs no
//! lock and every subscriber sees envelopes in publish order.

use crate::{BroadcastMessage, Metrics, Result as WsErrorResult, SessionId, WsError};

use sf_core::{Envelope, ErrorLocation, RoomId};

use std::collections::HashMap;
use std::panic::Location;

use log::{debug, info, warn};
use tokio::sync::mpsc::error::TrySendError;
use tokio::sync::{mpsc, oneshot};

/// Capacity of a hub's command mailbox
pub const HUB_MAILBOX_SIZE: usize = 256;

enum HubCommand {
    Register {
        session_id: SessionId,
        sender: mpsc::Sender<BroadcastMessage>,
    },
    Unregister {
        session_id: SessionId,
    },
    Publish {
        message: BroadcastMessage,
    },
    SubscriberCount {
        reply: oneshot::Sender<usize>,
    },
}

/// Cloneable address of a running hub
#[derive(Clone)]
pub struct HubHandle {
    room_id: RoomId,
    commands: mpsc::Sender<HubCommand>,
}

impl HubHandle {
    /// Start the hub loop for `room_id` on the current runtime
    pub fn spawn(room_id: RoomId, metrics: Metrics) -> Self {
        let (commands, mailbox) = mpsc::channel(HUB_MAILBOX_SIZE);

        let hub = Hub {
            room_id: room_id.clone(),
            mailbox,
            subscribers: HashMap::new(),
            metrics,
        };
        tokio::spawn(hub.run());

        Self { room_id, commands }
    }

    pub fn room_id(&self) -> &RoomId {
        &self.room_id
    }

    /// Add a subscriber. The hub owns `sender` from here on; dropping it is
    /// how the hub closes the subscriber's queue.
    pub async fn register(
        &self,
        session_id: SessionId,
        sender: mpsc::Sender<BroadcastMessage>,
    ) -> WsErrorResult<()> {
        self.send(HubCommand::Register { session_id, sender }).await
    }

    /// Remove a subscriber. Unknown or already-evicted sessions are ignored.
    pub async fn unregister(&self, session_id: SessionId) -> WsErrorResult<()> {
        self.send(HubCommand::Unregister { session_id }).await
    }

    pub async fn publish(&self, message: BroadcastMessage) -> WsErrorResult<()> {
        self.send(HubCommand::Publish { message }).await
    }

    pub async fn publish_envelope(&self, envelope: &Envelope) -> WsErrorResult<()> {
        self.publish(BroadcastMessage::from_envelope(envelope)?).await
    }

    /// Number of subscribers as seen by the hub loop, after every command
    /// queued before this one
    pub async fn subscriber_count(&self) -> WsErrorResult<usize> {
        let (reply, response) = oneshot::channel();
        self.send(HubCommand::SubscriberCount { reply }).await?;
        response.await.map_err(|_| self.closed())
    }

    async fn send(&self, command: HubCommand) -> WsErrorResult<()> {
        self.commands.send(command).await.map_err(|_| self.closed())
    }

    #[track_caller]
    fn closed(&self) -> WsError {
        WsError::HubClosed {
            room_id: self.room_id.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

struct Hub {
    room_id: RoomId,
    mailbox: mpsc::Receiver<HubCommand>,
    subscribers: HashMap<SessionId, mpsc::Sender<BroadcastMessage>>,
    metrics: Metrics,
}

impl Hub {
    /// Runs until every handle is dropped
    async fn run(mut self) {
        debug!("Hub for room {} started", self.room_id);

        while let Some(command) = self.mailbox.recv().await {
            match command {
                HubCommand::Register { session_id, sender } => {
                    self.subscribers.insert(session_id, sender);
                    info!(
                        "Session {session_id} joined room {} ({} subscribers)",
                        self.room_id,
                        self.subscribers.len()
                    );
                }
                HubCommand::Unregister { session_id } => {
                    if self.subscribers.remove(&session_id).is_some() {
                        info!(
                            "Session {session_id} left room {} ({} subscribers)",
                            self.room_id,
                            self.subscribers.len()
                        );
                    }
                }
                HubCommand::Publish { message } => self.publish(message),
                HubCommand::SubscriberCount { reply } => {
                    let _ = reply.send(self.subscribers.len());
                }
            }
        }

        debug!("Hub for room {} stopped", self.room_id);
    }

    /// Offer the message to every subscriber without waiting. A full queue
    /// evicts its subscriber; nothing is retried.
    fn publish(&mut self, message: BroadcastMessage) {
        let mut dropped = Vec::new();

        for (session_id, sender) in &self.subscribers {
            match sender.try_send(message.clone()) {
                Ok(()) => {}
                Err(TrySendError::Full(_)) => {
                    warn!(
                        "Session {session_id} in room {} is not keeping up, evicting",
                        self.room_id
                    );
                    self.metrics.subscriber_evicted();
                    dropped.push(*session_id);
                }
                Err(TrySendError::Closed(_)) => {
                    debug!("Session {session_id} queue already closed");
                    dropped.push(*session_id);
                }
            }
        }

        // Removing the sender closes the session's queue
        for session_id in dropped {
            self.subscribers.remove(&session_id);
        }

        self.metrics
            .envelope_published(message.message_type, self.subscribers.len());
        debug!(
            "Published {} to room {} ({} subscribers)",
            message.message_type,
            self.room_id,
            self.subscribers.len()
        );
    }
}
