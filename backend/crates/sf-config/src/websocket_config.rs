use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

// Outbound queue capacity per session
pub const MIN_SEND_BUFFER_SIZE: usize = 1;
pub const MAX_SEND_BUFFER_SIZE: usize = 10000;
pub const DEFAULT_SEND_BUFFER_SIZE: usize = 256;

// Keepalive ping interval (seconds)
pub const MIN_HEARTBEAT_INTERVAL_SECS: u64 = 5;
pub const MAX_HEARTBEAT_INTERVAL_SECS: u64 = 300;
pub const DEFAULT_HEARTBEAT_INTERVAL_SECS: u64 = 50;

// Rolling read deadline (seconds)
pub const MIN_HEARTBEAT_TIMEOUT_SECS: u64 = 10;
pub const MAX_HEARTBEAT_TIMEOUT_SECS: u64 = 600;
pub const DEFAULT_HEARTBEAT_TIMEOUT_SECS: u64 = 60;

pub const MIN_WRITE_TIMEOUT_SECS: u64 = 1;
pub const MAX_WRITE_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_WRITE_TIMEOUT_SECS: u64 = 10;

// Inbound frame size cap (bytes)
pub const MIN_MAX_FRAME_BYTES: usize = 64;
pub const MAX_MAX_FRAME_BYTES: usize = 65536;
pub const DEFAULT_MAX_FRAME_BYTES: usize = 1024;

/// WebSocket session settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WebSocketConfig {
    pub send_buffer_size: usize,
    pub heartbeat_interval_secs: u64,
    pub heartbeat_timeout_secs: u64,
    pub write_timeout_secs: u64,
    pub max_frame_bytes: usize,
}

impl Default for WebSocketConfig {
    fn default() -> Self {
        Self {
            send_buffer_size: DEFAULT_SEND_BUFFER_SIZE,
            heartbeat_interval_secs: DEFAULT_HEARTBEAT_INTERVAL_SECS,
            heartbeat_timeout_secs: DEFAULT_HEARTBEAT_TIMEOUT_SECS,
            write_timeout_secs: DEFAULT_WRITE_TIMEOUT_SECS,
            max_frame_bytes: DEFAULT_MAX_FRAME_BYTES,
        }
    }
}

impl WebSocketConfig {
    /// Validate all fields are within acceptable ranges.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.send_buffer_size < MIN_SEND_BUFFER_SIZE
            || self.send_buffer_size > MAX_SEND_BUFFER_SIZE
        {
            return Err(ConfigError::config(format!(
                "websocket.send_buffer_size must be {}-{}, got {}",
                MIN_SEND_BUFFER_SIZE, MAX_SEND_BUFFER_SIZE, self.send_buffer_size
            )));
        }

        if self.heartbeat_interval_secs < MIN_HEARTBEAT_INTERVAL_SECS
            || self.heartbeat_interval_secs > MAX_HEARTBEAT_INTERVAL_SECS
        {
            return Err(ConfigError::config(format!(
                "websocket.heartbeat_interval_secs must be {}-{}, got {}",
                MIN_HEARTBEAT_INTERVAL_SECS,
                MAX_HEARTBEAT_INTERVAL_SECS,
                self.heartbeat_interval_secs
            )));
        }

        if self.heartbeat_timeout_secs < MIN_HEARTBEAT_TIMEOUT_SECS
            || self.heartbeat_timeout_secs > MAX_HEARTBEAT_TIMEOUT_SECS
        {
            return Err(ConfigError::config(format!(
                "websocket.heartbeat_timeout_secs must be {}-{}, got {}",
                MIN_HEARTBEAT_TIMEOUT_SECS, MAX_HEARTBEAT_TIMEOUT_SECS, self.heartbeat_timeout_secs
            )));
        }

        // A ping must go out before the read deadline can lapse
        if self.heartbeat_timeout_secs <= self.heartbeat_interval_secs {
            return Err(ConfigError::config(format!(
                "websocket.heartbeat_timeout_secs ({}) must be greater than heartbeat_interval_secs ({})",
                self.heartbeat_timeout_secs, self.heartbeat_interval_secs
            )));
        }

        if self.write_timeout_secs < MIN_WRITE_TIMEOUT_SECS
            || self.write_timeout_secs > MAX_WRITE_TIMEOUT_SECS
        {
            return Err(ConfigError::config(format!(
                "websocket.write_timeout_secs must be {}-{}, got {}",
                MIN_WRITE_TIMEOUT_SECS, MAX_WRITE_TIMEOUT_SECS, self.write_timeout_secs
            )));
        }

        if self.max_frame_bytes < MIN_MAX_FRAME_BYTES || self.max_frame_bytes > MAX_MAX_FRAME_BYTES
        {
            return Err(ConfigError::config(format!(
                "websocket.max_frame_bytes must be {}-{}, got {}",
                MIN_MAX_FRAME_BYTES, MAX_MAX_FRAME_BYTES, self.max_frame_bytes
            )));
        }

        Ok(())
    }
}
