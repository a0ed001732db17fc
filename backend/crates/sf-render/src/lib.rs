pub mod caption;
pub mod driver;
pub mod error;
pub mod inbound;
pub mod lanes;
pub mod renderer;
pub mod renderer_config;
pub mod text_measure;

pub use caption::Caption;
pub use driver::drive;
pub use error::{RenderError, Result};
pub use inbound::{Inbound, display_text};
pub use lanes::{EMPTY_LANE_EDGE, has_runway, select_lane};
pub use renderer::CaptionRenderer;
pub use renderer_config::{
    DEFAULT_COLOR, DEFAULT_FONT_SIZE, DEFAULT_GAP, DEFAULT_MAX_CAPTIONS, DEFAULT_SPEED,
    RendererConfig,
};
pub use text_measure::{EstimatedMeasure, TextMeasure};

#[cfg(test)]
mod tests;
