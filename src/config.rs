//! JSON configuration boundary.
//!
//! Every field is optional; an empty object reproduces the portfolio site's defaults.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::component::{Navigation, ScrollBehavior};
use crate::content::{Palette, Script, ScriptLine, ScriptPreset, Section, default_sections};
use crate::foundation::error::{FolioError, FolioResult};
use crate::page::{Document, Page};
use crate::tracker::{SectionExtent, TrackerOpts};
use crate::typing::{
    CodeEditorAnimation, CompletionMode, EditorMetrics, EditorOptions, TypingTimings,
};

/// Default height given to each section when the config leaves extents out.
pub const DEFAULT_SECTION_HEIGHT_PX: f64 = 1000.0;

/// Viewport size.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    /// Width in CSS pixels.
    pub width: f64,
    /// Height in CSS pixels.
    pub height: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 800.0,
        }
    }
}

/// A navigation section plus its optional position on the page.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SectionConfig {
    /// Section key.
    pub id: String,
    /// Navigation label (defaults to the id).
    #[serde(default)]
    pub label: Option<String>,
    /// Icon name.
    #[serde(default)]
    pub icon: String,
    /// Top edge in document coordinates. Defaults to the previous section's bottom.
    #[serde(default)]
    pub top: Option<f64>,
    /// Bottom edge. Defaults to `top + 1000`.
    #[serde(default)]
    pub bottom: Option<f64>,
    /// Whether the section element is mounted. Unmounted sections are listed in the
    /// navigation but cannot be measured.
    #[serde(default = "default_true")]
    pub mounted: bool,
}

fn default_true() -> bool {
    true
}

/// Typing animation settings.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Built-in script and the defaults that go with it.
    pub preset: ScriptPreset,
    /// Custom script lines replacing the preset's.
    pub lines: Option<Vec<ScriptLine>>,
    /// File name shown for custom lines.
    pub title: Option<String>,
    /// Color overrides.
    pub palette: Option<Palette>,
    /// Timing overrides.
    pub timings: Option<TypingTimings>,
    /// Completion override.
    pub completion: Option<CompletionMode>,
    /// Geometry overrides.
    pub metrics: Option<EditorMetrics>,
    /// Leading whitespace per indentation level, applied on top of `metrics`.
    pub indent_unit: Option<usize>,
    /// Container width. Defaults to the viewport width.
    pub container_width: Option<f64>,
}

/// Top-level configuration.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    /// Browser viewport.
    pub viewport: ViewportConfig,
    /// Sections in on-page order. Empty means the portfolio's default list.
    pub sections: Vec<SectionConfig>,
    /// Scroll flag thresholds.
    pub tracker: TrackerOpts,
    /// Smooth scrolling of navigation clicks.
    pub scroll: ScrollBehavior,
    /// Typing animation.
    pub editor: EditorConfig,
    /// TTF/OTF font used to draw code. Without one, text is not drawn.
    pub font_path: Option<PathBuf>,
}

impl FolioConfig {
    /// Parse a config from JSON.
    pub fn from_reader<R: std::io::Read>(r: R) -> FolioResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| FolioError::config(format!("parse config JSON: {e}")))
    }

    /// Parse a config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> FolioResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            FolioError::config(format!("open config JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check the whole config for consistency.
    pub fn validate(&self) -> FolioResult<()> {
        let vp = self.viewport;
        if !(vp.width.is_finite() && vp.width > 0.0 && vp.height.is_finite() && vp.height > 0.0)
        {
            return Err(FolioError::config("viewport width/height must be finite and > 0"));
        }

        for (i, s) in self.sections.iter().enumerate() {
            if s.id.trim().is_empty() {
                return Err(FolioError::config(format!("sections[{i}].id is empty")));
            }
            if self.sections[..i].iter().any(|prev| prev.id == s.id) {
                return Err(FolioError::config(format!(
                    "duplicate section id '{}'",
                    s.id
                )));
            }
            for (name, v) in [("top", s.top), ("bottom", s.bottom)] {
                if let Some(v) = v
                    && !v.is_finite()
                {
                    return Err(FolioError::config(format!(
                        "sections[{i}].{name} must be finite"
                    )));
                }
            }
            if let (Some(top), Some(bottom)) = (s.top, s.bottom)
                && bottom < top
            {
                return Err(FolioError::config(format!(
                    "sections[{i}] bottom ({bottom}) is above its top ({top})"
                )));
            }
        }

        if let Some(lines) = &self.editor.lines
            && lines.is_empty()
        {
            return Err(FolioError::config("editor.lines must not be empty"));
        }
        if let Some(w) = self.editor.container_width
            && !(w.is_finite() && w >= 0.0)
        {
            return Err(FolioError::config(
                "editor.container_width must be finite and >= 0",
            ));
        }
        if !(self.scroll.duration_ms.is_finite() && self.scroll.duration_ms >= 0.0) {
            return Err(FolioError::config("scroll.duration_ms must be finite and >= 0"));
        }

        self.editor_options()
            .validate()
            .map_err(|e| FolioError::config(format!("editor: {e}")))
    }

    /// Navigation sections in on-page order.
    pub fn sections(&self) -> Vec<Section> {
        if self.sections.is_empty() {
            return default_sections();
        }
        self.sections
            .iter()
            .map(|s| {
                Section::new(
                    s.id.clone(),
                    s.label.clone().unwrap_or_else(|| s.id.clone()),
                    s.icon.clone(),
                )
            })
            .collect()
    }

    /// Mounted section extents. Sections without positions are stacked below each other.
    pub fn document(&self) -> Document {
        let mut doc = Document::new();
        if self.sections.is_empty() {
            for (i, s) in default_sections().into_iter().enumerate() {
                let top = i as f64 * DEFAULT_SECTION_HEIGHT_PX;
                doc.set_extent(s.id, SectionExtent::new(top, top + DEFAULT_SECTION_HEIGHT_PX));
            }
            return doc;
        }

        let mut cursor = 0.0;
        for s in &self.sections {
            let top = s.top.unwrap_or(cursor);
            let bottom = s.bottom.unwrap_or(top + DEFAULT_SECTION_HEIGHT_PX);
            cursor = bottom;
            if s.mounted {
                doc.set_extent(s.id.clone(), SectionExtent::new(top, bottom));
            }
        }
        doc
    }

    /// Page host for this config, scrolled to the top.
    pub fn page(&self) -> FolioResult<Page> {
        Page::new(self.viewport.width, self.viewport.height, self.document())
    }

    /// Navigation component for this config.
    pub fn navigation(&self) -> FolioResult<Navigation> {
        Navigation::new(self.sections(), self.tracker, self.scroll)
    }

    /// Script to type.
    pub fn script(&self) -> Script {
        match &self.editor.lines {
            Some(lines) => Script::new(
                self.editor
                    .title
                    .clone()
                    .unwrap_or_else(|| "untitled".to_owned()),
                lines.clone(),
            ),
            None => self.editor.preset.script(),
        }
    }

    /// Preset defaults with every override applied.
    pub fn editor_options(&self) -> EditorOptions {
        let e = &self.editor;
        let mut opts = EditorOptions::for_preset(e.preset);
        if let Some(p) = e.palette {
            opts.palette = p;
        }
        if let Some(t) = e.timings {
            opts.timings = t;
        }
        if let Some(c) = e.completion {
            opts.completion = c;
        }
        if let Some(m) = e.metrics {
            opts.metrics = m;
        }
        if let Some(unit) = e.indent_unit {
            opts.metrics.indent_unit = unit;
        }
        opts
    }

    /// Editor container width.
    pub fn container_width(&self) -> f64 {
        self.editor.container_width.unwrap_or(self.viewport.width)
    }

    /// Typing animation fitted to the configured container.
    pub fn animation(&self) -> FolioResult<CodeEditorAnimation> {
        CodeEditorAnimation::new(self.script(), self.editor_options(), self.container_width())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
