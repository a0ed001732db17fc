use sf_config::WebSocketConfig;

use std::time::Duration;

/// Configuration for WebSocket sessions
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// Outbound queue capacity; a full queue gets the session evicted
    pub send_buffer_size: usize,
    /// Ping interval in seconds
    pub heartbeat_interval_secs: u64,
    /// Read deadline in seconds, renewed by any inbound frame
    pub heartbeat_timeout_secs: u64,
    pub write_timeout_secs: u64,
    pub max_frame_bytes: usize,
}

impl ConnectionConfig {
    pub fn heartbeat_interval(&self) -> Duration {
        Duration::from_secs(self.heartbeat_interval_secs)
    }

    pub fn heartbeat_timeout(&self) -> Duration {
        Duration::from_secs(self.heartbeat_timeout_secs)
    }

    pub fn write_timeout(&self) -> Duration {
        Duration::from_secs(self.write_timeout_secs)
    }
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self::from(&WebSocketConfig::default())
    }
}

impl From<&WebSocketConfig> for ConnectionConfig {
    fn from(config: &WebSocketConfig) -> Self {
        Self {
            send_buffer_size: config.send_buffer_size,
            heartbeat_interval_secs: config.heartbeat_interval_secs,
            heartbeat_timeout_secs: config.heartbeat_timeout_secs,
            write_timeout_secs: config.write_timeout_secs,
            max_frame_bytes: config.max_frame_bytes,
        }
    }
}
