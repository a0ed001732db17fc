use crate::{
    ConnectionConfig, ConnectionLimits, ConnectionRegistry, HubHandle, Metrics, Moderator,
    RelayRateLimiter, RelayRateLimiterFactory, RoomRegistry, Session, SessionId,
    ShutdownCoordinator, create_session_span,
};

use sf_config::Config;
use sf_core::{CommentLimits, Denylist, RoomId};

use std::time::Duration;

use axum::{
    extract::{
        Path, State,
        ws::{WebSocket, WebSocketUpgrade},
    },
    http::StatusCode,
    response::Response,
};
use log::{debug, error, warn};
use tracing::Instrument;

/// Shared application state for room, submission and WebSocket handlers
#[derive(Clone)]
pub struct AppState {
    pub rooms: RoomRegistry,
    pub moderator: Moderator,
    pub connections: ConnectionRegistry,
    pub relay_limiter_factory: RelayRateLimiterFactory,
    pub metrics: Metrics,
    pub shutdown: ShutdownCoordinator,
    pub config: ConnectionConfig,
}

impl AppState {
    /// Wire up every shared component from validated configuration
    pub fn new(config: &Config, shutdown: ShutdownCoordinator) -> Self {
        let metrics = Metrics::new();

        let rooms = RoomRegistry::new(
            config.server.room_id_length,
            Duration::from_millis(config.moderation.default_cooldown_ms),
            metrics.clone(),
        );

        let limits = CommentLimits {
            max_text_chars: config.moderation.max_text_chars,
            max_handle_chars: config.moderation.max_handle_chars,
        };
        let moderator = Moderator::new(
            rooms.clone(),
            limits,
            Denylist::new(&config.moderation.denylist),
            metrics.clone(),
        );

        let connections = ConnectionRegistry::new(ConnectionLimits {
            max_total: config.server.max_connections,
        });

        Self {
            rooms,
            moderator,
            connections,
            relay_limiter_factory: RelayRateLimiterFactory::new(config.relay_rate_limit.clone()),
            metrics,
            shutdown,
            config: ConnectionConfig::from(&config.websocket),
        }
    }
}

/// WebSocket upgrade handler for `/ws/{room_id}`
pub async fn handler(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
    ws: WebSocketUpgrade,
) -> Result<Response, StatusCode> {
    let room_id = RoomId::parse(&room_id).map_err(|e| {
        debug!("Rejected upgrade for malformed room id: {e}");
        StatusCode::NOT_FOUND
    })?;

    let hub = state.rooms.hub(&room_id).await.map_err(|e| {
        debug!("Rejected upgrade: {e}");
        StatusCode::NOT_FOUND
    })?;

    // Register connection (enforces connection limits)
    let session_id = state
        .connections
        .register(room_id.clone())
        .await
        .map_err(|e| {
            error!("Failed to register session: {e}");
            StatusCode::SERVICE_UNAVAILABLE
        })?;

    let rate_limiter = state.relay_limiter_factory.create();
    let max_frame_bytes = state.config.max_frame_bytes;
    let connections = state.connections.clone();

    Ok(ws
        .max_message_size(max_frame_bytes)
        .max_frame_size(max_frame_bytes)
        .on_failed_upgrade(move |e| {
            warn!("WebSocket upgrade for session {session_id} failed: {e}");
            tokio::spawn(async move { connections.unregister(session_id).await });
        })
        .on_upgrade(move |socket| {
            let span = create_session_span(room_id.as_str(), &session_id.to_string());
            handle_socket(socket, session_id, hub, state, rate_limiter).instrument(span)
        }))
}

/// Handle WebSocket connection after upgrade
async fn handle_socket(
    socket: WebSocket,
    session_id: SessionId,
    hub: HubHandle,
    state: AppState,
    rate_limiter: RelayRateLimiter,
) {
    let shutdown_guard = state.shutdown.subscribe_guard();

    let session = Session::new(
        session_id,
        hub,
        state.config.clone(),
        state.metrics.clone(),
        rate_limiter,
    );

    let result = session.run(socket, shutdown_guard).await;

    state.connections.unregister(session_id).await;

    if let Err(e) = result {
        state.metrics.error_occurred(e.error_code());
        error!("Session {session_id} error: {e}");
    }
}
