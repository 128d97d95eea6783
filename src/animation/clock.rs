use crate::foundation::math::sanitize_delta_ms;

/// Turns monotonically increasing host timestamps (milliseconds) into per-frame deltas.
///
/// The first timestamp yields a zero delta. A timestamp that goes backwards, or is not finite,
/// also yields zero and does not move the clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    /// A clock that has not seen a frame yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a frame timestamp and return the elapsed time since the previous one.
    pub fn tick(&mut self, now_ms: f64) -> f64 {
        if !now_ms.is_finite() {
            return 0.0;
        }
        let dt = match self.last_ms {
            None => 0.0,
            Some(last) if now_ms < last => return 0.0,
            Some(last) => sanitize_delta_ms(now_ms - last),
        };
        self.last_ms = Some(now_ms);
        dt
    }

    /// Forget the last timestamp, so the next tick yields zero (used after a pause).
    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}
