
use crate::{CaptionRenderer, RendererConfig};

/// Fixed-width glyphs make edge arithmetic easy to follow
pub(crate) fn ten_px_per_char(text: &str, _font_size: f64) -> f64 {
    text.chars().count() as f64 * 10.0
}

/// Renderer with `lanes` lanes of the default line height
pub(crate) fn renderer_with_lanes(
    width: f64,
    lanes: usize,
) -> CaptionRenderer<fn(&str, f64) -> f64> {
    let mut config = RendererConfig::with_viewport(width, 0.0);
    config.height = config.line_height() * lanes as f64;
    CaptionRenderer::with_measure(config, ten_px_per_char as fn(&str, f64) -> f64).unwrap()
}
