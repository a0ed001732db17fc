use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

pub const MIN_TEXT_CHARS: usize = 1;
pub const MAX_TEXT_CHARS: usize = 2000;
pub const DEFAULT_MAX_TEXT_CHARS: usize = 200;

pub const MAX_HANDLE_CHARS: usize = 256;
pub const DEFAULT_MAX_HANDLE_CHARS: usize = 32;

pub const MIN_COOLDOWN_MS: u64 = 1;
pub const MAX_COOLDOWN_MS: u64 = 3_600_000;
pub const DEFAULT_COOLDOWN_MS: u64 = 2000;

/// Phrases blocked when no list is configured
pub const DEFAULT_DENYLIST: &[&str] = &["死ね", "fuck", "shit"];

/// Ingress moderation settings.
///
/// Lengths are counted in code points. The cooldown applies per identity
/// whenever a room has no slow mode of its own.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ModerationConfig {
    pub max_text_chars: usize,
    pub max_handle_chars: usize,
    pub default_cooldown_ms: u64,
    pub denylist: Vec<String>,
}

impl Default for ModerationConfig {
    fn default() -> Self {
        Self {
            max_text_chars: DEFAULT_MAX_TEXT_CHARS,
            max_handle_chars: DEFAULT_MAX_HANDLE_CHARS,
            default_cooldown_ms: DEFAULT_COOLDOWN_MS,
            denylist: DEFAULT_DENYLIST.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl ModerationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.max_text_chars < MIN_TEXT_CHARS || self.max_text_chars > MAX_TEXT_CHARS {
            return Err(ConfigError::moderation(format!(
                "moderation.max_text_chars must be {}-{}, got {}",
                MIN_TEXT_CHARS, MAX_TEXT_CHARS, self.max_text_chars
            )));
        }

        // Zero disables handles entirely
        if self.max_handle_chars > MAX_HANDLE_CHARS {
            return Err(ConfigError::moderation(format!(
                "moderation.max_handle_chars must be at most {}, got {}",
                MAX_HANDLE_CHARS, self.max_handle_chars
            )));
        }

        if self.default_cooldown_ms < MIN_COOLDOWN_MS || self.default_cooldown_ms > MAX_COOLDOWN_MS
        {
            return Err(ConfigError::moderation(format!(
                "moderation.default_cooldown_ms must be {}-{}, got {}",
                MIN_COOLDOWN_MS, MAX_COOLDOWN_MS, self.default_cooldown_ms
            )));
        }

        Ok(())
    }

    /// Parse a comma-separated phrase list, dropping blanks
    pub fn parse_denylist(value: &str) -> Vec<String> {
        value
            .split(',')
            .map(|p| p.trim().to_lowercase())
            .filter(|p| !p.is_empty())
            .collect()
    }
}
