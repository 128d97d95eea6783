/// Easing curves.
pub mod ease;
/// Host-timestamp to frame-delta conversion.
pub mod clock;

pub use clock::FrameClock;
pub use ease::Ease;
