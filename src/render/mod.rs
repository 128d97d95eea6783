//! Frame rendering: a flat draw-op scene and a CPU rasterizer.

/// Rendered frames and the rasterizer contract.
pub mod backend;
/// CPU rasterizer built on `vello_cpu`.
pub mod cpu;
/// Backend-agnostic draw operations.
pub mod scene;
pub(crate) mod text;

pub use backend::{FrameRGBA, Rasterizer};
pub use cpu::CpuRasterizer;
pub use scene::{DrawOp, MonospaceEstimate, Scene, TextAlign, TextMeasure};
