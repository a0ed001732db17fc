/// A caption scrolling right to left across one lane
#[derive(Debug, Clone, PartialEq)]
pub struct Caption {
    pub(crate) text: String,
    pub(crate) x: f64,
    pub(crate) y: f64,
    pub(crate) width: f64,
    pub(crate) lane: usize,
    pub(crate) speed: f64,
    pub(crate) color: String,
}

impl Caption {
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Left edge in px
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Top edge in px
    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    /// Trailing (right) edge in px
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn lane(&self) -> usize {
        self.lane
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub(crate) fn advance(&mut self, secs: f64) {
        self.x -= self.speed * secs;
    }

    /// Fully past the left screen edge
    pub(crate) fn is_offscreen(&self) -> bool {
        self.right() < 0.0
    }
}
