use crate::foundation::core::SurfaceSize;
use crate::foundation::error::{FolioError, FolioResult};

/// Editor geometry expressed at the reference width; everything scales uniformly from it.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EditorMetrics {
    /// Width at which `scale == 1`.
    pub reference_width: f64,
    /// Upper bound of the surface width.
    pub max_width: f64,
    /// Upper bound of the surface height.
    pub max_height: f64,
    /// Height / width ratio before the height cap applies.
    pub aspect: f64,
    /// Code font size.
    pub font_size: f64,
    /// Distance between baselines.
    pub line_height: f64,
    /// Left edge of unindented code.
    pub start_x: f64,
    /// Baseline of the first line.
    pub start_y: f64,
    /// Horizontal offset per indentation level.
    pub tab_size: f64,
    /// Gap between the gutter's right edge and `start_x`.
    pub gutter_inset: f64,
    /// Gap between the right-aligned line numbers and `start_x`.
    pub line_number_inset: f64,
    /// Caret width.
    pub caret_width: f64,
    /// Caret top, measured down from one line height above the baseline.
    pub caret_top: f64,
    /// Highlight band top, measured down from one line height above the baseline.
    pub highlight_top: f64,
    /// Leading whitespace characters per indentation level.
    pub indent_unit: usize,
}

impl Default for EditorMetrics {
    fn default() -> Self {
        Self::portfolio()
    }
}

impl EditorMetrics {
    /// Geometry of the responsive `Portfolio.php` editor.
    pub fn portfolio() -> Self {
        Self {
            reference_width: 500.0,
            max_width: 500.0,
            max_height: 400.0,
            aspect: 0.8,
            font_size: 12.0,
            line_height: 16.0,
            start_x: 40.0,
            start_y: 30.0,
            tab_size: 20.0,
            gutter_inset: 10.0,
            line_number_inset: 15.0,
            caret_width: 2.0,
            caret_top: 3.0,
            highlight_top: 2.0,
            indent_unit: 4,
        }
    }

    /// Geometry of the compact `sparta-algorithm.js` editor (300x200 at full size).
    pub fn sparta() -> Self {
        Self {
            reference_width: 300.0,
            max_width: 300.0,
            max_height: 200.0,
            aspect: 200.0 / 300.0,
            font_size: 12.0,
            line_height: 16.0,
            start_x: 35.0,
            start_y: 20.0,
            tab_size: 10.0,
            gutter_inset: 5.0,
            line_number_inset: 10.0,
            caret_width: 2.0,
            caret_top: 3.0,
            highlight_top: 2.0,
            indent_unit: 2,
        }
    }

    /// Check that every size is finite and positive.
    pub fn validate(&self) -> FolioResult<()> {
        let positive = [
            ("reference_width", self.reference_width),
            ("max_width", self.max_width),
            ("max_height", self.max_height),
            ("aspect", self.aspect),
            ("font_size", self.font_size),
            ("line_height", self.line_height),
            ("tab_size", self.tab_size),
            ("caret_width", self.caret_width),
        ];
        for (name, v) in positive {
            if !v.is_finite() || v <= 0.0 {
                return Err(FolioError::validation(format!(
                    "editor metric {name} must be finite and > 0"
                )));
            }
        }
        let non_negative = [
            ("start_x", self.start_x),
            ("start_y", self.start_y),
            ("gutter_inset", self.gutter_inset),
            ("line_number_inset", self.line_number_inset),
            ("caret_top", self.caret_top),
            ("highlight_top", self.highlight_top),
        ];
        for (name, v) in non_negative {
            if !v.is_finite() || v < 0.0 {
                return Err(FolioError::validation(format!(
                    "editor metric {name} must be finite and >= 0"
                )));
            }
        }
        if self.indent_unit == 0 {
            return Err(FolioError::validation("indent_unit must be > 0"));
        }
        Ok(())
    }
}

/// Surface size and scaled geometry for one container width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EditorLayout {
    size: SurfaceSize,
    scale: f64,
    metrics: EditorMetrics,
}

impl EditorLayout {
    /// Fit the editor into a container of the given CSS width.
    ///
    /// `width = min(max_width, container)`, `height = min(max_height, width * aspect)`, both
    /// truncated to whole pixels, and `scale = width / reference_width`.
    pub fn fit(container_width: f64, metrics: EditorMetrics) -> Self {
        let container = if container_width.is_finite() {
            container_width.max(0.0)
        } else {
            0.0
        };
        let width = container.min(metrics.max_width).floor();
        let height = (width * metrics.aspect).min(metrics.max_height).floor();
        let scale = if metrics.reference_width > 0.0 {
            width / metrics.reference_width
        } else {
            0.0
        };
        Self {
            size: SurfaceSize::new(width as u32, height as u32),
            scale,
            metrics,
        }
    }

    /// Surface pixel dimensions.
    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    /// Uniform scale factor relative to the reference width.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Unscaled metrics.
    pub fn metrics(&self) -> &EditorMetrics {
        &self.metrics
    }

    /// Scaled font size.
    pub fn font_size(&self) -> f64 {
        self.metrics.font_size * self.scale
    }

    /// Scaled line height.
    pub fn line_height(&self) -> f64 {
        self.metrics.line_height * self.scale
    }

    /// Scaled left edge of unindented code.
    pub fn start_x(&self) -> f64 {
        self.metrics.start_x * self.scale
    }

    /// Scaled width of one indentation level.
    pub fn tab_size(&self) -> f64 {
        self.metrics.tab_size * self.scale
    }

    /// Scaled gutter width.
    pub fn gutter_width(&self) -> f64 {
        (self.metrics.start_x - self.metrics.gutter_inset).max(0.0) * self.scale
    }

    /// Right edge of the line numbers.
    pub fn line_number_right(&self) -> f64 {
        (self.metrics.start_x - self.metrics.line_number_inset) * self.scale
    }

    /// Scaled caret width.
    pub fn caret_width(&self) -> f64 {
        self.metrics.caret_width * self.scale
    }

    /// Baseline of line `i`.
    pub fn baseline(&self, i: usize) -> f64 {
        (self.metrics.start_y + i as f64 * self.metrics.line_height) * self.scale
    }

    /// Top of the caret on line `i`.
    pub fn caret_y(&self, i: usize) -> f64 {
        self.baseline(i) - self.line_height() + self.metrics.caret_top * self.scale
    }

    /// Top of the highlight band on line `i`.
    pub fn highlight_y(&self, i: usize) -> f64 {
        self.baseline(i) - self.line_height() + self.metrics.highlight_top * self.scale
    }

    /// Whether anything of line `i` can land on the surface.
    pub fn is_line_visible(&self, i: usize) -> bool {
        self.baseline(i) - self.line_height() < f64::from(self.size.height)
    }

    /// Horizontal offset for `whitespace` leading whitespace columns.
    pub fn indent_offset(&self, whitespace: usize) -> f64 {
        let levels = whitespace as f64 / self.metrics.indent_unit.max(1) as f64;
        levels * self.tab_size()
    }
}

/// Count the leading whitespace of `text` in columns and characters.
///
/// A tab counts as one full indentation level (`indent_unit` columns).
pub fn leading_whitespace(text: &str, indent_unit: usize) -> (usize, usize) {
    let mut columns = 0;
    let mut chars = 0;
    for c in text.chars() {
        match c {
            '\t' => columns += indent_unit.max(1),
            c if c.is_whitespace() => columns += 1,
            _ => break,
        }
        chars += 1;
    }
    (columns, chars)
}

#[cfg(test)]
#[path = "../../tests/unit/typing/layout.rs"]
mod tests;
