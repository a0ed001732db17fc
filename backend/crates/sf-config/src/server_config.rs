use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_HOST, DEFAULT_MAX_CONNECTIONS, DEFAULT_PORT,
    DEFAULT_ROOM_ID_LENGTH, MAX_MAX_CONNECTIONS, MAX_ROOM_ID_LENGTH, MIN_MAX_CONNECTIONS,
    MIN_PORT, MIN_ROOM_ID_LENGTH,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Maximum concurrent WebSocket sessions across all rooms
    pub max_connections: usize,
    /// Length of generated room identifiers
    pub room_id_length: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from(DEFAULT_HOST),
            port: DEFAULT_PORT,
            max_connections: DEFAULT_MAX_CONNECTIONS,
            room_id_length: DEFAULT_ROOM_ID_LENGTH,
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        // Port 0 lets the OS pick
        if self.port != 0 && self.port < MIN_PORT {
            return Err(ConfigError::server(format!(
                "server.port must be 0 (auto) or >= {}, got {}",
                MIN_PORT, self.port
            )));
        }

        if self.max_connections < MIN_MAX_CONNECTIONS || self.max_connections > MAX_MAX_CONNECTIONS
        {
            return Err(ConfigError::server(format!(
                "server.max_connections must be {}-{}, got {}",
                MIN_MAX_CONNECTIONS, MAX_MAX_CONNECTIONS, self.max_connections
            )));
        }

        if self.room_id_length < MIN_ROOM_ID_LENGTH || self.room_id_length > MAX_ROOM_ID_LENGTH {
            return Err(ConfigError::server(format!(
                "server.room_id_length must be {}-{}, got {}",
                MIN_ROOM_ID_LENGTH, MAX_ROOM_ID_LENGTH, self.room_id_length
            )));
        }

        Ok(())
    }
}
