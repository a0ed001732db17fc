//! Decoding of frames arriving from the room's socket.

use sf_core::Envelope;

/// A frame as the renderer understands it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inbound {
    /// Display text ready for the inbox
    Chat { text: String },
    Clear,
    /// Anything that is not a known envelope; shown as-is
    Unparseable { raw: String },
}

impl Inbound {
    /// Never fails: unknown shapes and non-JSON become [`Inbound::Unparseable`]
    pub fn parse(raw: &str, max_text_chars: usize) -> Self {
        match Envelope::from_json(raw) {
            Ok(Envelope::Chat { text, handle }) => Self::Chat {
                text: display_text(&text, &handle, max_text_chars),
            },
            Ok(Envelope::Clear) => Self::Clear,
            Err(e) => {
                log::debug!("Frame is not an envelope ({e}), showing raw text");
                Self::Unparseable {
                    raw: raw.to_string(),
                }
            }
        }
    }

    /// Text to queue for placement, if any
    pub fn caption_text(&self) -> Option<&str> {
        let text = match self {
            Self::Chat { text } => text.as_str(),
            Self::Unparseable { raw } => raw.as_str(),
            Self::Clear => return None,
        };
        (!text.is_empty()).then_some(text)
    }
}

/// `【handle】 text` with the text cut to `max_text_chars` code points,
/// or just the text when the handle is blank
pub fn display_text(text: &str, handle: &str, max_text_chars: usize) -> String {
    let text: String = text.chars().take(max_text_chars).collect();
    let handle = handle.trim();

    if handle.is_empty() {
        text
    } else {
        format!("【{handle}】 {text}")
    }
}
