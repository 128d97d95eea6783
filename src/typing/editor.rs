use crate::content::{Palette, Script, ScriptPreset};
use crate::foundation::error::{FolioError, FolioResult};
use crate::render::scene::{Scene, TextMeasure};
use crate::typing::layout::{EditorLayout, EditorMetrics};
use crate::typing::scene::build_editor_scene;
use crate::typing::state::{CompletionMode, TypingCursor, TypingTimings};

/// Everything about an editor animation except the script and its progress.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    /// Reveal and blink timing.
    pub timings: TypingTimings,
    /// Behavior once every line is revealed.
    pub completion: CompletionMode,
    /// Geometry.
    pub metrics: EditorMetrics,
    /// Colors.
    pub palette: Palette,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self::for_preset(ScriptPreset::Portfolio)
    }
}

impl EditorOptions {
    /// Options matching a built-in script.
    pub fn for_preset(preset: ScriptPreset) -> Self {
        match preset {
            ScriptPreset::Portfolio => Self {
                timings: TypingTimings::default(),
                completion: CompletionMode::Restart,
                metrics: EditorMetrics::portfolio(),
                palette: Palette::default(),
            },
            ScriptPreset::Sparta => Self {
                timings: TypingTimings::default(),
                // The sweep starts at the `while` loop of the algorithm.
                completion: CompletionMode::HighlightSweep { first_line: 8 },
                metrics: EditorMetrics::sparta(),
                palette: Palette::default(),
            },
        }
    }

    /// Check timings and geometry.
    pub fn validate(&self) -> FolioResult<()> {
        let t = self.timings;
        if !t.char_interval_ms.is_finite() || t.char_interval_ms <= 0.0 {
            return Err(FolioError::validation(
                "char_interval_ms must be finite and > 0",
            ));
        }
        if !t.blink_interval_ms.is_finite() || t.blink_interval_ms <= 0.0 {
            return Err(FolioError::validation(
                "blink_interval_ms must be finite and > 0",
            ));
        }
        self.metrics.validate()
    }
}

/// A typing animation: script, progress, and the surface it is fitted to.
///
/// [`CodeEditorAnimation::advance`] is the only operation that moves progress. Resizing and scene
/// building leave it untouched.
#[derive(Clone, Debug)]
pub struct CodeEditorAnimation {
    script: Script,
    options: EditorOptions,
    cursor: TypingCursor,
    layout: EditorLayout,
}

impl CodeEditorAnimation {
    /// Build an animation fitted to `container_width`.
    pub fn new(script: Script, options: EditorOptions, container_width: f64) -> FolioResult<Self> {
        options.validate()?;
        let layout = EditorLayout::fit(container_width, options.metrics);
        Ok(Self {
            script,
            options,
            cursor: TypingCursor::new(),
            layout,
        })
    }

    /// Built-in script with its matching options.
    pub fn from_preset(preset: ScriptPreset, container_width: f64) -> FolioResult<Self> {
        Self::new(
            preset.script(),
            EditorOptions::for_preset(preset),
            container_width,
        )
    }

    /// Script being typed.
    pub fn script(&self) -> &Script {
        &self.script
    }

    /// Options in effect.
    pub fn options(&self) -> &EditorOptions {
        &self.options
    }

    /// Current progress.
    pub fn cursor(&self) -> &TypingCursor {
        &self.cursor
    }

    /// Current surface fit.
    pub fn layout(&self) -> &EditorLayout {
        &self.layout
    }

    /// Feed one frame's elapsed time. Returns `true` when a reveal step happened.
    pub fn advance(&mut self, dt_ms: f64) -> bool {
        self.cursor.advance(
            &self.script,
            self.options.timings,
            self.options.completion,
            dt_ms,
        )
    }

    /// Refit to a new container width.
    pub fn resize(&mut self, container_width: f64) {
        let layout = EditorLayout::fit(container_width, self.options.metrics);
        if layout != self.layout {
            tracing::debug!(
                width = layout.size().width,
                height = layout.size().height,
                scale = layout.scale(),
                "editor resized"
            );
        }
        self.layout = layout;
    }

    /// Draw operations for the current state, or `None` while the surface is empty.
    pub fn scene(&self, measure: &mut dyn TextMeasure) -> Option<Scene> {
        build_editor_scene(
            &self.script,
            &self.cursor,
            &self.layout,
            &self.options.palette,
            measure,
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/typing/editor.rs"]
mod tests;
