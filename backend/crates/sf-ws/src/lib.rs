pub mod app_state;
pub mod broadcast_message;
pub mod connection_config;
pub mod connection_info;
pub mod connection_limits;
pub mod connection_registry;
pub mod error;
pub mod hub;
pub mod metrics;
pub mod moderator;
pub mod relay_rate_limiter;
pub mod room_registry;
pub mod session;
pub mod session_id;
pub mod shutdown;

pub use app_state::{AppState, handler};
pub use broadcast_message::{BroadcastMessage, RELAY_MESSAGE_TYPE};
pub use connection_config::ConnectionConfig;
pub use connection_info::ConnectionInfo;
pub use connection_limits::ConnectionLimits;
pub use connection_registry::ConnectionRegistry;
pub use error::{Result, WsError};
pub use hub::{HUB_MAILBOX_SIZE, HubHandle};
pub use metrics::Metrics;
pub use moderator::Moderator;
pub use relay_rate_limiter::{RelayRateLimiter, RelayRateLimiterFactory};
pub use room_registry::{LEDGER_SWEEP_THRESHOLD, RoomRegistry, RoomSnapshot};
pub use session::Session;
pub use session_id::SessionId;
pub use shutdown::{ShutdownCoordinator, ShutdownGuard};

#[cfg(test)]
mod tests;

use tracing::info_span;

/// Create a tracing span for one WebSocket session.
/// All log entries within the session will include these fields.
pub fn create_session_span(room_id: &str, session_id: &str) -> tracing::Span {
    info_span!(
        "ws_session",
        room_id = %room_id,
        session_id = %session_id,
    )
}
