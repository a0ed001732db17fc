use crate::{CoreError, ErrorLocation, Result as CoreResult};

use std::panic::Location;

use serde::{Deserialize, Serialize};

/// A tagged unit put on a room's bus.
///
/// Wire shape is `{"type":"chat","text":..,"handle":..}` or `{"type":"clear"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Envelope {
    Chat {
        text: String,
        #[serde(default)]
        handle: String,
    },
    Clear,
}

impl Envelope {
    pub fn chat(text: impl Into<String>, handle: impl Into<String>) -> Self {
        Self::Chat {
            text: text.into(),
            handle: handle.into(),
        }
    }

    /// Short name used for logging and metrics labels
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Chat { .. } => "chat",
            Self::Clear => "clear",
        }
    }

    #[track_caller]
    pub fn to_json(&self) -> CoreResult<String> {
        serde_json::to_string(self).map_err(|source| CoreError::Serialization {
            source,
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Strict decode; callers that must degrade gracefully handle the error themselves
    pub fn from_json(raw: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}
