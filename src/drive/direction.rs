//! Drive direction and its pin pattern.

use core::fmt;

use embedded_hal::digital::PinState;
use serde::Deserialize;

use crate::error::DriveError;

/// Movement command for a two-motor differential drive.
///
/// Each direction maps to a fixed (left, right) motor line pattern:
///
/// | Direction   | Left | Right |
/// |-------------|------|-------|
/// | `Idle`      | Low  | Low   |
/// | `Forward`   | High | High  |
/// | `TurnLeft`  | High | Low   |
/// | `TurnRight` | Low  | High  |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Direction {
    /// Both motors off. The rest state.
    #[default]
    Idle = 0,
    /// Both motors on.
    Forward = 1,
    /// Left motor only.
    TurnLeft = 2,
    /// Right motor only.
    TurnRight = 3,
}

impl Direction {
    /// Every direction, in raw-value order.
    pub const ALL: [Direction; 4] = [
        Direction::Idle,
        Direction::Forward,
        Direction::TurnLeft,
        Direction::TurnRight,
    ];

    /// Line levels as `(left, right)`, before any polarity inversion.
    #[inline]
    pub const fn pin_states(self) -> (PinState, PinState) {
        match self {
            Direction::Idle => (PinState::Low, PinState::Low),
            Direction::Forward => (PinState::High, PinState::High),
            Direction::TurnLeft => (PinState::High, PinState::Low),
            Direction::TurnRight => (PinState::Low, PinState::High),
        }
    }

    /// Check for the rest state.
    #[inline]
    pub const fn is_idle(self) -> bool {
        matches!(self, Direction::Idle)
    }

    /// Raw command byte.
    #[inline]
    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    /// Name for display/debugging.
    pub const fn name(self) -> &'static str {
        match self {
            Direction::Idle => "Idle",
            Direction::Forward => "Forward",
            Direction::TurnLeft => "TurnLeft",
            Direction::TurnRight => "TurnRight",
        }
    }
}

impl TryFrom<u8> for Direction {
    type Error = DriveError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        Direction::ALL
            .get(raw as usize)
            .copied()
            .ok_or(DriveError::UnknownDirection(raw))
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
