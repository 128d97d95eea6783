use crate::foundation::error::{FolioError, FolioResult};
use crate::render::backend::FrameRGBA;

/// Stream parameters handed to a [`FrameSink`] before the first frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SinkConfig {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Frames per second.
    pub fps: u32,
}

impl SinkConfig {
    /// Check that the stream is non-empty and has a frame rate.
    pub fn validate(&self) -> FolioResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(FolioError::validation("sink width/height must be non-zero"));
        }
        if self.fps == 0 {
            return Err(FolioError::validation("sink fps must be non-zero"));
        }
        Ok(())
    }

    /// Duration of one frame in milliseconds.
    pub fn frame_interval_ms(&self) -> f64 {
        1000.0 / f64::from(self.fps.max(1))
    }
}

/// Consumer of rendered frames, in increasing frame order.
pub trait FrameSink {
    /// Called once before any frame.
    fn begin(&mut self, cfg: SinkConfig) -> FolioResult<()>;
    /// Push frame number `idx`.
    fn push_frame(&mut self, idx: u64, frame: &FrameRGBA) -> FolioResult<()>;
    /// Called once after the last frame.
    fn end(&mut self) -> FolioResult<()>;
}

/// Sink that keeps every frame, for tests and previews.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<(u64, FrameRGBA)>,
    ended: bool,
}

impl InMemorySink {
    /// Empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration received in `begin`.
    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg
    }

    /// Captured frames in push order.
    pub fn frames(&self) -> &[(u64, FrameRGBA)] {
        &self.frames
    }

    /// Whether `end` was called.
    pub fn is_ended(&self) -> bool {
        self.ended
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> FolioResult<()> {
        cfg.validate()?;
        self.cfg = Some(cfg);
        self.frames.clear();
        self.ended = false;
        Ok(())
    }

    fn push_frame(&mut self, idx: u64, frame: &FrameRGBA) -> FolioResult<()> {
        if self.cfg.is_none() {
            return Err(FolioError::encode("in-memory sink not started"));
        }
        if let Some((last, _)) = self.frames.last()
            && idx <= *last
        {
            return Err(FolioError::encode("out-of-order frame index"));
        }
        self.frames.push((idx, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> FolioResult<()> {
        self.ended = true;
        Ok(())
    }
}
