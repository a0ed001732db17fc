use metrics::{counter, gauge};

/// Metrics collector for rooms, sessions and the ingress path
#[derive(Clone)]
pub struct Metrics {
    prefix: &'static str,
}

impl Metrics {
    pub fn new() -> Self {
        Self { prefix: "sf_ws" }
    }

    /// Record new connection established
    pub fn connection_established(&self) {
        counter!(format!("{}.connections.established", self.prefix)).increment(1);
        gauge!(format!("{}.connections.active", self.prefix)).increment(1.0);
    }

    /// Record connection closed
    pub fn connection_closed(&self, reason: &str) {
        counter!(format!("{}.connections.closed", self.prefix)).increment(1);
        counter!(format!("{}.connections.closed.{}", self.prefix, reason)).increment(1);
        gauge!(format!("{}.connections.active", self.prefix)).decrement(1.0);
    }

    pub fn room_created(&self) {
        counter!(format!("{}.rooms.created", self.prefix)).increment(1);
        gauge!(format!("{}.rooms.active", self.prefix)).increment(1.0);
    }

    /// Record an envelope fanned out by a hub
    pub fn envelope_published(&self, message_type: &str, subscriber_count: usize) {
        counter!(format!("{}.broadcast.published", self.prefix)).increment(1);
        counter!(format!("{}.broadcast.published.{}", self.prefix, message_type)).increment(1);
        gauge!(format!("{}.broadcast.subscribers", self.prefix)).set(subscriber_count as f64);
    }

    /// Record a subscriber dropped for a full outbound queue
    pub fn subscriber_evicted(&self) {
        counter!(format!("{}.broadcast.evicted", self.prefix)).increment(1);
    }

    /// Record message sent to client
    pub fn message_sent(&self, message_type: &str) {
        counter!(format!("{}.messages.sent", self.prefix)).increment(1);
        counter!(format!("{}.messages.sent.{}", self.prefix, message_type)).increment(1);
    }

    pub fn relay_received(&self) {
        counter!(format!("{}.relay.received", self.prefix)).increment(1);
    }

    pub fn relay_dropped(&self, reason: &str) {
        counter!(format!("{}.relay.dropped.{}", self.prefix, reason)).increment(1);
    }

    pub fn submission_accepted(&self) {
        counter!(format!("{}.submissions.accepted", self.prefix)).increment(1);
    }

    pub fn submission_rejected(&self, code: &str) {
        counter!(format!("{}.submissions.rejected", self.prefix)).increment(1);
        counter!(format!("{}.submissions.rejected.{}", self.prefix, code)).increment(1);
    }

    /// Record error occurrence
    pub fn error_occurred(&self, error_type: &str) {
        counter!(format!("{}.errors.total", self.prefix)).increment(1);
        counter!(format!("{}.errors.{}", self.prefix, error_type)).increment(1);
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
