#![allow(dead_code)]

use sf_config::Config;
use sf_core::RoomId;
use sf_ws::{AppState, ShutdownCoordinator};

use axum::{Router, routing::get};
use axum_test::TestServer;
use tokio::time::{Duration, sleep};

/// Configuration for test server instances
#[derive(Debug, Clone)]
pub struct TestServerConfig {
    pub max_connections: usize,
    pub relay_max_requests: u32,
    pub relay_window_secs: u64,
    pub send_buffer_size: usize,
    pub heartbeat_interval_secs: u64,
    pub heartbeat_timeout_secs: u64,
}

impl Default for TestServerConfig {
    fn default() -> Self {
        Self {
            max_connections: 100,
            relay_max_requests: 100,
            relay_window_secs: 60,
            send_buffer_size: 256,
            heartbeat_interval_secs: 50,
            heartbeat_timeout_secs: 60,
        }
    }
}

impl TestServerConfig {
    /// Create config with strict connection limits (for limit tests)
    pub fn with_strict_limits() -> Self {
        Self {
            max_connections: 2,
            ..Default::default()
        }
    }

    /// Create config with strict relay limits (for rate limit tests)
    pub fn with_strict_relay_limits() -> Self {
        Self {
            relay_max_requests: 2,
            relay_window_secs: 60,
            ..Default::default()
        }
    }

    /// Create config with a one-second keepalive cycle
    pub fn with_fast_heartbeat() -> Self {
        Self {
            heartbeat_interval_secs: 1,
            heartbeat_timeout_secs: 10,
            ..Default::default()
        }
    }

    /// Create config that gives up on a silent peer after one second
    pub fn with_short_read_deadline() -> Self {
        Self {
            heartbeat_interval_secs: 60,
            heartbeat_timeout_secs: 1,
            ..Default::default()
        }
    }
}

/// Test server with access to AppState for testing
pub struct TestServerWithState {
    pub server: TestServer,
    pub app_state: AppState,
}

/// Create a TestServer with default configuration
pub fn create_test_server() -> TestServerWithState {
    create_test_server_with_config(TestServerConfig::default())
}

/// Create a TestServer with custom configuration
pub fn create_test_server_with_config(config: TestServerConfig) -> TestServerWithState {
    let (app, app_state) = create_app(config);
    let server = TestServer::builder()
        .http_transport()
        .build(app)
        .expect("Failed to create test server");

    TestServerWithState { server, app_state }
}

fn create_app(config: TestServerConfig) -> (Router, AppState) {
    let mut app_config = Config::default();
    app_config.server.max_connections = config.max_connections;
    app_config.relay_rate_limit.max_requests = config.relay_max_requests;
    app_config.relay_rate_limit.window_secs = config.relay_window_secs;
    app_config.websocket.send_buffer_size = config.send_buffer_size;
    app_config.websocket.heartbeat_interval_secs = config.heartbeat_interval_secs;
    app_config.websocket.heartbeat_timeout_secs = config.heartbeat_timeout_secs;

    let app_state = AppState::new(&app_config, ShutdownCoordinator::new());

    let router = Router::new()
        .route("/ws/{room_id}", get(sf_ws::handler))
        .with_state(app_state.clone());

    (router, app_state)
}

/// Block until the room's hub reports `expected` subscribers
pub async fn wait_for_subscribers(app_state: &AppState, room_id: &RoomId, expected: usize) {
    let hub = app_state.rooms.hub(room_id).await.expect("room exists");
    for _ in 0..500 {
        if hub.subscriber_count().await.expect("hub running") == expected {
            return;
        }
        sleep(Duration::from_millis(10)).await;
    }
    panic!("room {room_id} never reached {expected} subscribers");
}

/// Block until the connection registry drops to `expected` sessions
pub async fn wait_for_connections(app_state: &AppState, expected: usize) {
    for _ in 0..500 {
        if app_state.connections.total_count().await == expected {
            return;
        }
        sleep(Duration::from_millis(10)).await;
    }
    panic!("connection count never reached {expected}");
}
