use crate::animation::Ease;
use crate::foundation::math::sanitize_delta_ms;

/// Default smooth-scroll duration.
pub const DEFAULT_SMOOTH_SCROLL_MS: f64 = 600.0;

/// Eased interpolation of the scroll offset from a start to a target over a fixed duration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SmoothScroll {
    from: f64,
    to: f64,
    duration_ms: f64,
    elapsed_ms: f64,
    ease: Ease,
}

impl SmoothScroll {
    /// Start an animation. Non-positive durations jump straight to the target.
    pub fn new(from: f64, to: f64, duration_ms: f64, ease: Ease) -> Self {
        Self {
            from,
            to,
            duration_ms: sanitize_delta_ms(duration_ms),
            elapsed_ms: 0.0,
            ease,
        }
    }

    /// Scroll target.
    pub fn target(&self) -> f64 {
        self.to
    }

    /// Whether the animation has reached its target.
    pub fn is_finished(&self) -> bool {
        self.elapsed_ms >= self.duration_ms
    }

    /// Current offset.
    pub fn offset(&self) -> f64 {
        if self.is_finished() {
            return self.to;
        }
        let t = self.elapsed_ms / self.duration_ms;
        self.from + (self.to - self.from) * self.ease.apply(t)
    }

    /// Advance by `dt_ms` and return the new offset.
    pub fn step(&mut self, dt_ms: f64) -> f64 {
        self.elapsed_ms = (self.elapsed_ms + sanitize_delta_ms(dt_ms)).min(self.duration_ms);
        self.offset()
    }
}
