use crate::{Envelope, ErrorLocation, Rejection};

use std::panic::Location;

use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_TEXT_CHARS: usize = 200;
pub const DEFAULT_MAX_HANDLE_CHARS: usize = 32;

/// Length bounds applied to a submission, counted in code points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentLimits {
    pub max_text_chars: usize,
    pub max_handle_chars: usize,
}

impl Default for CommentLimits {
    fn default() -> Self {
        Self {
            max_text_chars: DEFAULT_MAX_TEXT_CHARS,
            max_handle_chars: DEFAULT_MAX_HANDLE_CHARS,
        }
    }
}

/// A viewer comment that passed shape validation. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    text: String,
    handle: String,
}

impl Comment {
    /// Trim both fields and enforce presence and length bounds.
    ///
    /// Over-long input is rejected, never truncated.
    #[track_caller]
    pub fn new(text: &str, handle: &str, limits: &CommentLimits) -> Result<Self, Rejection> {
        let text = text.trim();
        let handle = handle.trim();

        if text.is_empty() {
            return Err(Rejection::EmptyText {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let text_len = text.chars().count();
        if text_len > limits.max_text_chars {
            return Err(Rejection::TextTooLong {
                length: text_len,
                max: limits.max_text_chars,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let handle_len = handle.chars().count();
        if handle_len > limits.max_handle_chars {
            return Err(Rejection::HandleTooLong {
                length: handle_len,
                max: limits.max_handle_chars,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self {
            text: text.to_string(),
            handle: handle.to_string(),
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn handle(&self) -> &str {
        &self.handle
    }
}

impl From<Comment> for Envelope {
    fn from(comment: Comment) -> Self {
        Envelope::Chat {
            text: comment.text,
            handle: comment.handle,
        }
    }
}
