//! Time source capability.

use crate::config::units::Ticks;

/// Monotonic (modulo 2^32) clock the controller reads to time moves.
///
/// The unit is whatever the host counts in, and must match the durations
/// passed to [`MotionController::move_for`](super::MotionController::move_for).
///
/// Any `FnMut() -> u32` is a time source, so a HAL timer can be wired in
/// with a closure:
///
/// ```rust,ignore
/// let clock = || timer.get_counter().ticks() as u32;
/// ```
pub trait TimeSource {
    /// Current reading. Must not block.
    fn now(&mut self) -> Ticks;
}

impl<F> TimeSource for F
where
    F: FnMut() -> u32,
{
    #[inline]
    fn now(&mut self) -> Ticks {
        Ticks(self())
    }
}
