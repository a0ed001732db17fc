mod config;
mod error;
mod log_level;
mod logging_config;
mod moderation_config;
mod rate_limit_config;
mod server_config;
mod websocket_config;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use moderation_config::ModerationConfig;
pub use rate_limit_config::RateLimitConfig;
pub use server_config::ServerConfig;
pub use websocket_config::WebSocketConfig;

#[cfg(test)]
mod tests;

const CONFIG_DIR_ENV: &str = "SF_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".slideflow";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;

const DEFAULT_MAX_CONNECTIONS: usize = 10000;
const MIN_MAX_CONNECTIONS: usize = 1;
const MAX_MAX_CONNECTIONS: usize = 100000;

const DEFAULT_ROOM_ID_LENGTH: usize = 10;
const MIN_ROOM_ID_LENGTH: usize = 6;
const MAX_ROOM_ID_LENGTH: usize = 64;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
