//! Canvas-style typing animation for code editor panels.
//!
//! [`TypingCursor`] is the frame-rate independent state machine, [`EditorLayout`] fits the editor
//! to its container, and [`build_editor_scene`] turns both into draw operations.
//! [`CodeEditorAnimation`] ties them together.

/// Animation facade.
pub mod editor;
/// Responsive geometry.
pub mod layout;
/// Scene building.
pub mod scene;
/// Reveal and caret state machine.
pub mod state;

pub use editor::{CodeEditorAnimation, EditorOptions};
pub use layout::{EditorLayout, EditorMetrics};
pub use scene::build_editor_scene;
pub use state::{
    CompletionMode, DEFAULT_BLINK_INTERVAL_MS, DEFAULT_CHAR_INTERVAL_MS, Highlight, TypingCursor,
    TypingPhase, TypingTimings,
};
