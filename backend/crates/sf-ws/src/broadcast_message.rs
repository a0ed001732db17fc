use crate::Result as WsErrorResult;

use sf_core::Envelope;

use std::sync::Arc;

/// Label for frames a subscriber pushed back onto the bus
pub const RELAY_MESSAGE_TYPE: &str = "relay";

/// A frame queued for every subscriber of a room
#[derive(Debug, Clone)]
pub struct BroadcastMessage {
    /// Text ready to send on the wire, shared across subscriber queues
    pub payload: Arc<str>,
    /// Message type for metrics/logging
    pub message_type: &'static str,
}

impl BroadcastMessage {
    pub fn new(payload: impl Into<Arc<str>>, message_type: &'static str) -> Self {
        Self {
            payload: payload.into(),
            message_type,
        }
    }

    #[track_caller]
    pub fn from_envelope(envelope: &Envelope) -> WsErrorResult<Self> {
        Ok(Self::new(envelope.to_json()?, envelope.kind()))
    }

    /// Raw subscriber input, forwarded unmodified
    pub fn relay(text: &str) -> Self {
        Self::new(text, RELAY_MESSAGE_TYPE)
    }
}
