use crate::{
    CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIR,
    LoggingConfig, ModerationConfig, RateLimitConfig, ServerConfig, WebSocketConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub websocket: WebSocketConfig,
    pub moderation: ModerationConfig,
    pub relay_rate_limit: RateLimitConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Resolve the config dir (SF_CONFIG_DIR, else ./.slideflow/)
    /// 2. Create it if missing
    /// 3. Parse config.toml when present, else defaults
    /// 4. Apply SF_* environment overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Priority: SF_CONFIG_DIR env var > ./.slideflow/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate every section. Call once at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.logging.validate()?;
        self.websocket.validate()?;
        self.moderation.validate()?;
        self.relay_rate_limit.validate()?;
        Ok(())
    }

    /// Absolute path of the log file, if file logging is configured
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match self.logging.file {
            Some(ref filename) => {
                let dir = Self::config_dir()?.join(&self.logging.dir);
                Ok(Some(dir.join(filename)))
            }
            None => Ok(None),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  server: {}:{} (max {} connections, room id length {})",
            self.server.host,
            self.server.port,
            self.server.max_connections,
            self.server.room_id_length
        );
        info!(
            "  logging: {} (colored: {}, file: {})",
            self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
        info!(
            "  websocket: buffer={}, heartbeat={}s/{}s, write_timeout={}s, max_frame={}B",
            self.websocket.send_buffer_size,
            self.websocket.heartbeat_interval_secs,
            self.websocket.heartbeat_timeout_secs,
            self.websocket.write_timeout_secs,
            self.websocket.max_frame_bytes
        );
        info!(
            "  moderation: text<={}, handle<={}, cooldown={}ms, denylist={} phrases",
            self.moderation.max_text_chars,
            self.moderation.max_handle_chars,
            self.moderation.default_cooldown_ms,
            self.moderation.denylist.len()
        );
        info!(
            "  relay_rate_limit: {}/{}s",
            self.relay_rate_limit.max_requests, self.relay_rate_limit.window_secs
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("SF_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("SF_SERVER_PORT", &mut self.server.port);
        Self::apply_env_parse(
            "SF_SERVER_MAX_CONNECTIONS",
            &mut self.server.max_connections,
        );
        Self::apply_env_parse("SF_ROOM_ID_LENGTH", &mut self.server.room_id_length);

        // Logging
        Self::apply_env_parse("SF_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("SF_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("SF_LOG_FILE", &mut self.logging.file);

        // WebSocket
        Self::apply_env_parse(
            "SF_WS_SEND_BUFFER_SIZE",
            &mut self.websocket.send_buffer_size,
        );
        Self::apply_env_parse(
            "SF_WS_HEARTBEAT_INTERVAL_SECS",
            &mut self.websocket.heartbeat_interval_secs,
        );
        Self::apply_env_parse(
            "SF_WS_HEARTBEAT_TIMEOUT_SECS",
            &mut self.websocket.heartbeat_timeout_secs,
        );
        Self::apply_env_parse(
            "SF_WS_WRITE_TIMEOUT_SECS",
            &mut self.websocket.write_timeout_secs,
        );
        Self::apply_env_parse("SF_WS_MAX_FRAME_BYTES", &mut self.websocket.max_frame_bytes);

        // Moderation
        Self::apply_env_parse("SF_MAX_TEXT_CHARS", &mut self.moderation.max_text_chars);
        Self::apply_env_parse("SF_MAX_HANDLE_CHARS", &mut self.moderation.max_handle_chars);
        Self::apply_env_parse(
            "SF_DEFAULT_COOLDOWN_MS",
            &mut self.moderation.default_cooldown_ms,
        );
        if let Ok(val) = std::env::var("SF_NG_WORDS")
            && !val.trim().is_empty()
        {
            self.moderation.denylist = ModerationConfig::parse_denylist(&val);
        }

        // Relay rate limit
        Self::apply_env_parse(
            "SF_RELAY_RATE_LIMIT_MAX_REQUESTS",
            &mut self.relay_rate_limit.max_requests,
        );
        Self::apply_env_parse(
            "SF_RELAY_RATE_LIMIT_WINDOW_SECS",
            &mut self.relay_rate_limit.window_secs,
        );
    }

    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Accepts "true"/"1"
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Unparseable values are ignored and the previous value kept
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
