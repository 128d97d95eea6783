//! Frame sinks for recorded animation runs.

/// `ffmpeg`-based MP4 output.
pub mod ffmpeg;
/// Sink trait and the in-memory sink.
pub mod sink;

pub use ffmpeg::{FfmpegSink, FfmpegSinkOpts, is_ffmpeg_on_path};
pub use sink::{FrameSink, InMemorySink, SinkConfig};
