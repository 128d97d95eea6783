//! folio implements the two live behaviors of a single-page portfolio front end:
//!
//! - the scroll-synchronized **active-section tracker** behind the navigation highlight, and
//! - the **code typing animation** that types a colored script with a blinking caret and loops.
//!
//! Both run against a headless [`Page`] host (viewport, section extents, scroll/resize listeners
//! and a frame scheduler). The animation renders into RGBA8 frames on the CPU.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Easing and frame timing.
pub mod animation;
/// Page components with explicit mount/unmount.
pub mod component;
/// JSON configuration.
pub mod config;
/// Static sections and scripts.
pub mod content;
/// Frame sinks.
pub mod encode;
/// Headless page host.
pub mod page;
/// Scene model and rasterization.
pub mod render;
/// Offline recording.
pub mod session;
/// Observable values.
pub mod store;
/// Active-section tracking.
pub mod tracker;
/// Typing animation.
pub mod typing;

pub use crate::animation::{Ease, FrameClock};
pub use crate::component::{CodeEditor, Navigation, ScrollBehavior};
pub use crate::config::FolioConfig;
pub use crate::content::{
    ColorTag, Palette, Script, ScriptLine, ScriptPreset, Section, default_sections,
};
pub use crate::encode::{FfmpegSink, FfmpegSinkOpts, FrameSink, InMemorySink, SinkConfig};
pub use crate::foundation::core::{Point, Rect, Rgba8, SurfaceSize};
pub use crate::foundation::error::{FolioError, FolioResult};
pub use crate::page::{Document, FrameRequester, Page, Viewport};
pub use crate::render::{CpuRasterizer, FrameRGBA, Rasterizer, Scene, TextMeasure};
pub use crate::session::{RecordSession, RecordStats};
pub use crate::store::Store;
pub use crate::tracker::{ScrollTracker, SectionExtent, SectionMeasure, compute_active_section};
pub use crate::typing::{CodeEditorAnimation, EditorOptions, TypingCursor};
