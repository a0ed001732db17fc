/// Rendered pixel width of a caption
pub trait TextMeasure {
    fn measure(&self, text: &str, font_size: f64) -> f64;
}

/// Width estimate without a font rasterizer: ASCII glyphs take 0.6 em,
/// everything else a full em. Rounded up to whole pixels.
#[derive(Debug, Clone, Copy, Default)]
pub struct EstimatedMeasure;

impl TextMeasure for EstimatedMeasure {
    fn measure(&self, text: &str, font_size: f64) -> f64 {
        let (narrow, wide) = text.chars().fold((0u32, 0u32), |(narrow, wide), c| {
            if c.is_ascii() {
                (narrow + 1, wide)
            } else {
                (narrow, wide + 1)
            }
        });
        // 0.6 em as 3/5 keeps whole-pixel results exact
        let width = f64::from(narrow) * font_size * 3.0 / 5.0 + f64::from(wide) * font_size;
        width.ceil()
    }
}

impl<F> TextMeasure for F
where
    F: Fn(&str, f64) -> f64,
{
    fn measure(&self, text: &str, font_size: f64) -> f64 {
        self(text, font_size)
    }
}
