use crate::{RenderError, Result as RenderResult};

use std::time::Duration;

use serde::Deserialize;

pub const DEFAULT_FONT_SIZE: f64 = 36.0;
/// Lane height as a multiple of the font size
pub const LINE_HEIGHT_FACTOR: f64 = 1.2;
/// Horizontal speed in px/s
pub const DEFAULT_SPEED: f64 = 160.0;
/// Free runway a lane needs at the right edge before it takes a new caption
pub const DEFAULT_GAP: f64 = 140.0;
pub const DEFAULT_MAX_CAPTIONS: usize = 200;
pub const DEFAULT_MAX_TEXT_CHARS: usize = 200;
pub const DEFAULT_MAX_FRAME_DT_MS: u64 = 50;
pub const DEFAULT_COLOR: &str = "#ffffff";

/// Display surface geometry and caption behaviour
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
    pub width: f64,
    pub height: f64,
    pub font_size: f64,
    pub speed: f64,
    pub gap: f64,
    pub max_captions: usize,
    pub max_text_chars: usize,
    /// Upper bound on one frame's elapsed time, so stalls do not teleport captions
    pub max_frame_dt_ms: u64,
    pub color: String,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            width: 1920.0,
            height: 1080.0,
            font_size: DEFAULT_FONT_SIZE,
            speed: DEFAULT_SPEED,
            gap: DEFAULT_GAP,
            max_captions: DEFAULT_MAX_CAPTIONS,
            max_text_chars: DEFAULT_MAX_TEXT_CHARS,
            max_frame_dt_ms: DEFAULT_MAX_FRAME_DT_MS,
            color: String::from(DEFAULT_COLOR),
        }
    }
}

impl RendererConfig {
    pub fn with_viewport(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    pub fn line_height(&self) -> f64 {
        (self.font_size * LINE_HEIGHT_FACTOR).round()
    }

    pub fn max_frame_dt(&self) -> Duration {
        Duration::from_millis(self.max_frame_dt_ms)
    }

    pub fn validate(&self) -> RenderResult<()> {
        for (field, value) in [
            ("width", self.width),
            ("height", self.height),
            ("gap", self.gap),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(RenderError::invalid(
                    field,
                    format!("must be a finite non-negative number, got {value}"),
                ));
            }
        }

        for (field, value) in [("font_size", self.font_size), ("speed", self.speed)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(RenderError::invalid(
                    field,
                    format!("must be a finite positive number, got {value}"),
                ));
            }
        }

        if self.line_height() < 1.0 {
            return Err(RenderError::invalid(
                "font_size",
                format!(
                    "lane height must be at least 1px, got {} from font size {}",
                    self.line_height(),
                    self.font_size
                ),
            ));
        }

        if self.max_captions == 0 {
            return Err(RenderError::invalid("max_captions", "must be at least 1"));
        }

        if self.max_text_chars == 0 {
            return Err(RenderError::invalid("max_text_chars", "must be at least 1"));
        }

        Ok(())
    }
}
