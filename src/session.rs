//! Offline recording of the typing animation at a fixed frame rate.

use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::error::{FolioError, FolioResult};
use crate::render::backend::{FrameRGBA, Rasterizer};
use crate::render::scene::TextMeasure;
use crate::typing::CodeEditorAnimation;

/// Statistics of a [`RecordSession::render_range`] run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RecordStats {
    /// Frames pushed into the sink.
    pub frames: u64,
    /// Reveal steps that happened during the run.
    pub reveal_steps: u64,
}

/// Drives a [`CodeEditorAnimation`] with simulated frame timestamps.
///
/// The animation only moves forward. Every frame feeds exactly one frame interval, so a
/// recording is deterministic for a given frame rate.
pub struct RecordSession<R> {
    animation: CodeEditorAnimation,
    rasterizer: R,
    fps: u32,
    elapsed_ms: f64,
}

impl<R: Rasterizer + TextMeasure> RecordSession<R> {
    /// New session at `fps` frames per second.
    pub fn new(animation: CodeEditorAnimation, rasterizer: R, fps: u32) -> FolioResult<Self> {
        if fps == 0 {
            return Err(FolioError::validation("fps must be non-zero"));
        }
        Ok(Self {
            animation,
            rasterizer,
            fps,
            elapsed_ms: 0.0,
        })
    }

    /// Animation state.
    pub fn animation(&self) -> &CodeEditorAnimation {
        &self.animation
    }

    /// Simulated time fed so far.
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }

    fn frame_interval_ms(&self) -> f64 {
        1000.0 / f64::from(self.fps)
    }

    /// Advance frame by frame until at least `t_ms` of animation time has elapsed.
    ///
    /// Returns the number of reveal steps. Earlier times are an error (the animation is not
    /// seekable).
    pub fn advance_to(&mut self, t_ms: f64) -> FolioResult<u64> {
        if !t_ms.is_finite() || t_ms < 0.0 {
            return Err(FolioError::validation("time offset must be finite and >= 0"));
        }
        if t_ms + 1e-9 < self.elapsed_ms {
            return Err(FolioError::validation(format!(
                "cannot rewind from {:.1}ms to {t_ms:.1}ms",
                self.elapsed_ms
            )));
        }
        let dt = self.frame_interval_ms();
        let mut steps = 0;
        while self.elapsed_ms + 1e-9 < t_ms {
            if self.animation.advance(dt) {
                steps += 1;
            }
            self.elapsed_ms += dt;
        }
        Ok(steps)
    }

    /// Rasterize the current state. `None` while the surface is empty.
    pub fn render_current(&mut self) -> FolioResult<Option<FrameRGBA>> {
        let Some(scene) = self.animation.scene(&mut self.rasterizer) else {
            tracing::warn!("editor surface is empty, nothing to render");
            return Ok(None);
        };
        self.rasterizer.rasterize(&scene)
    }

    /// Advance to `t_ms` and rasterize.
    pub fn render_frame_at(&mut self, t_ms: f64) -> FolioResult<Option<FrameRGBA>> {
        self.advance_to(t_ms)?;
        self.render_current()
    }

    /// Record `duration_ms` of animation into `sink`, one frame per interval.
    pub fn render_range(
        &mut self,
        duration_ms: f64,
        sink: &mut dyn FrameSink,
    ) -> FolioResult<RecordStats> {
        if !duration_ms.is_finite() || duration_ms <= 0.0 {
            return Err(FolioError::validation("duration must be finite and > 0"));
        }
        let size = self.animation.layout().size();
        if size.is_empty() {
            return Err(FolioError::validation(
                "editor surface is empty, widen the container",
            ));
        }
        let count = (duration_ms * f64::from(self.fps) / 1000.0).ceil() as u64;
        sink.begin(SinkConfig {
            width: size.width,
            height: size.height,
            fps: self.fps,
        })?;

        let mut stats = RecordStats::default();
        for idx in 0..count {
            if idx > 0 {
                let t = self.elapsed_ms + self.frame_interval_ms();
                stats.reveal_steps += self.advance_to(t)?;
            }
            let frame = self
                .render_current()?
                .ok_or_else(|| FolioError::render("editor surface became empty"))?;
            sink.push_frame(idx, &frame)?;
            stats.frames += 1;
        }
        sink.end()?;
        tracing::info!(
            frames = stats.frames,
            reveal_steps = stats.reveal_steps,
            loops = self.animation.cursor().completed_loops(),
            "recording finished"
        );
        Ok(stats)
    }
}

#[cfg(test)]
#[path = "../tests/unit/session.rs"]
mod tests;
