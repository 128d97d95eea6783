use crate::content::Script;
use crate::foundation::math::sanitize_delta_ms;

/// Default per-character reveal interval.
pub const DEFAULT_CHAR_INTERVAL_MS: f64 = 50.0;

/// Default caret blink interval (time between visibility toggles).
pub const DEFAULT_BLINK_INTERVAL_MS: f64 = 500.0;

/// Highlight opacity steps per line in the sweep (opacity grows by `1 / STEPS` per reveal tick).
const HIGHLIGHT_STEPS: u32 = 100;

/// Timing of the typing animation.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TypingTimings {
    /// Time between reveal steps. At most one step happens per interval; excess time is dropped.
    pub char_interval_ms: f64,
    /// Time between caret visibility toggles. Excess time is carried over.
    pub blink_interval_ms: f64,
}

impl Default for TypingTimings {
    fn default() -> Self {
        Self {
            char_interval_ms: DEFAULT_CHAR_INTERVAL_MS,
            blink_interval_ms: DEFAULT_BLINK_INTERVAL_MS,
        }
    }
}

/// What happens once every line has been revealed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case", tag = "mode")]
pub enum CompletionMode {
    /// Start over from line 0, char 0 on the next reveal step.
    #[default]
    Restart,
    /// Keep the script on screen and sweep an execution highlight over the lines, starting at
    /// `first_line` and wrapping back to it.
    HighlightSweep {
        /// First line of the swept region.
        first_line: usize,
    },
}

/// Execution-line highlight state during a sweep.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Highlight {
    /// Highlighted line index.
    pub line: usize,
    steps: u32,
}

impl Highlight {
    /// Highlight opacity in `[0, 1)`.
    pub fn opacity(&self) -> f64 {
        f64::from(self.steps) / f64::from(HIGHLIGHT_STEPS)
    }
}

/// Coarse animation phase.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TypingPhase {
    /// Revealing characters.
    Typing,
    /// Every line is revealed; the next step restarts (or starts the sweep).
    Revealed,
    /// Sweeping the execution highlight over a fully revealed script.
    Highlighting(Highlight),
}

/// Progress of the typing animation.
///
/// Only [`TypingCursor::advance`] mutates it. Rendering and resizing read it but never move it.
#[derive(Clone, Debug, PartialEq)]
pub struct TypingCursor {
    line: usize,
    char_index: usize,
    caret_visible: bool,
    blink_accum_ms: f64,
    reveal_accum_ms: f64,
    highlight: Option<Highlight>,
    loops: u64,
    caret_toggles: u64,
}

impl Default for TypingCursor {
    fn default() -> Self {
        Self::new()
    }
}

impl TypingCursor {
    /// Cursor at line 0, char 0 with a visible caret.
    pub fn new() -> Self {
        Self {
            line: 0,
            char_index: 0,
            caret_visible: true,
            blink_accum_ms: 0.0,
            reveal_accum_ms: 0.0,
            highlight: None,
            loops: 0,
            caret_toggles: 0,
        }
    }

    /// Current line index (equals the line count once the script is fully revealed).
    pub fn line(&self) -> usize {
        self.line
    }

    /// Revealed characters of the current line.
    pub fn char_index(&self) -> usize {
        self.char_index
    }

    /// Caret visibility.
    pub fn caret_visible(&self) -> bool {
        self.caret_visible
    }

    /// Active sweep highlight, if any.
    pub fn highlight(&self) -> Option<Highlight> {
        self.highlight
    }

    /// Number of times the animation restarted from the top.
    pub fn completed_loops(&self) -> u64 {
        self.loops
    }

    /// Number of caret visibility toggles so far.
    pub fn caret_toggles(&self) -> u64 {
        self.caret_toggles
    }

    /// Whether every line of `script` is revealed.
    pub fn is_fully_revealed(&self, script: &Script) -> bool {
        self.line >= script.len()
    }

    /// Coarse phase for `script`.
    pub fn phase(&self, script: &Script) -> TypingPhase {
        match self.highlight {
            Some(h) => TypingPhase::Highlighting(h),
            None if self.is_fully_revealed(script) => TypingPhase::Revealed,
            None => TypingPhase::Typing,
        }
    }

    /// Feed one frame's elapsed time.
    ///
    /// Returns `true` when a reveal step happened this frame.
    pub fn advance(
        &mut self,
        script: &Script,
        timings: TypingTimings,
        completion: CompletionMode,
        dt_ms: f64,
    ) -> bool {
        let dt_ms = sanitize_delta_ms(dt_ms);
        self.blink(dt_ms, timings.blink_interval_ms);

        if timings.char_interval_ms <= 0.0 {
            return false;
        }
        self.reveal_accum_ms += dt_ms;
        if self.reveal_accum_ms < timings.char_interval_ms {
            return false;
        }
        // One step per interval; a long pause does not type a burst of characters.
        self.reveal_accum_ms = 0.0;
        self.step(script, completion);
        true
    }

    /// Perform exactly one reveal step.
    pub fn step(&mut self, script: &Script, completion: CompletionMode) {
        if let Some(line) = script.lines.get(self.line) {
            if self.char_index < line.char_count() {
                self.char_index += 1;
            } else {
                self.line += 1;
                self.char_index = 0;
            }
            return;
        }

        match completion {
            CompletionMode::Restart => {
                self.line = 0;
                self.char_index = 0;
                self.loops += 1;
                tracing::debug!(loops = self.loops, "typing animation restarted");
            }
            CompletionMode::HighlightSweep { first_line } => {
                if script.is_empty() {
                    return;
                }
                let first = first_line.min(script.len() - 1);
                self.highlight = Some(match self.highlight {
                    None => Highlight {
                        line: first,
                        steps: 0,
                    },
                    Some(h) if h.steps + 1 >= HIGHLIGHT_STEPS => {
                        let next = (h.line + 1) % script.len();
                        Highlight {
                            line: if next < first { first } else { next },
                            steps: 0,
                        }
                    }
                    Some(h) => Highlight {
                        steps: h.steps + 1,
                        ..h
                    },
                });
            }
        }
    }

    fn blink(&mut self, dt_ms: f64, interval_ms: f64) {
        if interval_ms <= 0.0 {
            return;
        }
        self.blink_accum_ms += dt_ms;
        while self.blink_accum_ms >= interval_ms {
            self.blink_accum_ms -= interval_ms;
            self.caret_visible = !self.caret_visible;
            self.caret_toggles += 1;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/typing/state.rs"]
mod tests;
