//! Page components with explicit mount/unmount.
//!
//! A mounted component owns listener and frame-request handles on its [`Page`](crate::page::Page).
//! Unmounting releases all of them, so a torn-down component never sees another callback.

/// Typing-animation panel.
pub mod code_editor;
/// Navigation bar and scroll tracking.
pub mod navigation;

pub use code_editor::{CodeEditor, ContainerWidth};
pub use navigation::{Navigation, ScrollBehavior};

#[cfg(test)]
#[path = "../../tests/unit/component/lifecycle.rs"]
mod tests;
