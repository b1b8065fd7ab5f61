//! Unit types for time quantities.
//!
//! The controller never assumes a particular time unit. Whatever the host's
//! time source counts (milliseconds, timer ticks, ...) is what durations are
//! expressed in, so both sides share the [`Ticks`] type.

use core::fmt;
use core::ops::Add;

use serde::Deserialize;

/// A reading of, or a span on, the host's 32-bit free-running clock.
///
/// Readings wrap at `u32::MAX`. Spans computed with [`Ticks::elapsed_since`]
/// stay correct across a wrap as long as the real interval is shorter than
/// half the counter range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct Ticks(pub u32);

impl Ticks {
    /// Zero ticks.
    pub const ZERO: Self = Self(0);

    /// Create a new Ticks value.
    #[inline]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Check for zero.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Span between an earlier reading and this one, modulo 2^32.
    #[inline]
    pub const fn elapsed_since(self, earlier: Ticks) -> Ticks {
        Ticks(self.0.wrapping_sub(earlier.0))
    }

    /// Subtract, clamping at zero.
    #[inline]
    pub const fn saturating_sub(self, rhs: Ticks) -> Ticks {
        Ticks(self.0.saturating_sub(rhs.0))
    }
}

impl Add for Ticks {
    type Output = Self;

    /// Saturates at `u32::MAX`; durations never wrap.
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl From<u32> for Ticks {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for Ticks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ticks", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elapsed_plain() {
        assert_eq!(Ticks(140).elapsed_since(Ticks(100)), Ticks(40));
    }

    #[test]
    fn test_elapsed_across_wrap() {
        // Started 6 ticks before the counter wrapped, read 4 ticks after.
        let start = Ticks(u32::MAX - 5);
        let now = Ticks(4);
        assert_eq!(now.elapsed_since(start), Ticks(10));
    }

    #[test]
    fn test_add_saturates() {
        assert_eq!(Ticks(u32::MAX - 1) + Ticks(10), Ticks(u32::MAX));
        assert_eq!(Ticks(3) + Ticks(4), Ticks(7));
    }

    #[test]
    fn test_saturating_sub() {
        assert_eq!(Ticks(5).saturating_sub(Ticks(9)), Ticks::ZERO);
        assert_eq!(Ticks(100).saturating_sub(Ticks(40)), Ticks(60));
    }
}
