use crate::foundation::core::{Point, Rect, Rgba8, SurfaceSize};

/// Horizontal anchoring of a text run relative to its origin.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAlign {
    /// Origin is the left edge.
    #[default]
    Left,
    /// Origin is the right edge.
    Right,
}

/// One drawing command, in surface pixels.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// Solid rectangle.
    FillRect {
        /// Covered area.
        rect: Rect,
        /// Fill color.
        color: Rgba8,
    },
    /// Single-line text run. `origin.y` is the baseline.
    Text {
        /// Anchor point on the baseline.
        origin: Point,
        /// Text to draw.
        text: String,
        /// Fill color.
        color: Rgba8,
        /// Font size in pixels.
        font_size: f64,
        /// Anchoring.
        align: TextAlign,
    },
}

/// A flat, ordered list of draw operations for one frame.
///
/// Later operations paint over earlier ones.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    /// Surface size the operations target.
    pub size: SurfaceSize,
    /// Operations in paint order.
    pub ops: Vec<DrawOp>,
}

impl Scene {
    /// Empty scene.
    pub fn new(size: SurfaceSize) -> Self {
        Self {
            size,
            ops: Vec::new(),
        }
    }

    /// Append a solid rectangle. Empty or non-finite rects are dropped.
    pub fn fill_rect(&mut self, rect: Rect, color: Rgba8) {
        if !(rect.is_finite() && rect.width() > 0.0 && rect.height() > 0.0) || color.a == 0 {
            return;
        }
        self.ops.push(DrawOp::FillRect { rect, color });
    }

    /// Append a text run. Empty text is dropped.
    pub fn text(
        &mut self,
        origin: Point,
        text: impl Into<String>,
        color: Rgba8,
        font_size: f64,
        align: TextAlign,
    ) {
        let text = text.into();
        if text.is_empty() {
            return;
        }
        self.ops.push(DrawOp::Text {
            origin,
            text,
            color,
            font_size,
            align,
        });
    }

    /// Text runs in paint order, for inspection.
    pub fn texts(&self) -> impl Iterator<Item = (&str, Point, Rgba8)> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text {
                origin,
                text,
                color,
                ..
            } => Some((text.as_str(), *origin, *color)),
            DrawOp::FillRect { .. } => None,
        })
    }

    /// Filled rectangles in paint order, for inspection.
    pub fn rects(&self) -> impl Iterator<Item = (Rect, Rgba8)> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::FillRect { rect, color } => Some((*rect, *color)),
            DrawOp::Text { .. } => None,
        })
    }
}

/// Horizontal advance of single-line text.
pub trait TextMeasure {
    /// Width of `text` at `font_size` pixels.
    fn measure(&mut self, text: &str, font_size: f64) -> f64;
}

/// Fixed-pitch width estimate used when no font is available.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonospaceEstimate {
    /// Advance of one character as a fraction of the font size.
    pub advance_em: f64,
}

impl Default for MonospaceEstimate {
    fn default() -> Self {
        Self { advance_em: 0.6 }
    }
}

impl TextMeasure for MonospaceEstimate {
    fn measure(&mut self, text: &str, font_size: f64) -> f64 {
        text.chars().count() as f64 * font_size * self.advance_em
    }
}
