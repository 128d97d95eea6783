//! Static content consumed by the tracker and the typing animation.
//!
//! Everything here is immutable configuration: the navigation sections in on-page order, and the
//! scripts typed by the code editor animations together with their color palette.

/// Script presets and their palette.
pub mod script;
/// Navigation sections.
pub mod section;

pub use script::{ColorTag, Palette, Script, ScriptLine, ScriptPreset};
pub use section::{Section, default_sections};
