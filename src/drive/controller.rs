//! Differential drive controller.
//!
//! Generic over embedded-hal 1.0 output pins and an injected time source.

use embedded_hal::digital::{OutputPin, PinState};

use crate::config::units::Ticks;
use crate::error::{DriveError, Error, ManeuverError, Result};
use crate::maneuver::ManeuverRegistry;

use super::builder::MotionControllerBuilder;
use super::clock::TimeSource;
use super::direction::Direction;

/// Outcome of a [`MotionController::check_timeout`] poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotionStatus {
    /// The current move has time left.
    Running {
        /// Ticks left before auto-stop.
        remaining: Ticks,
    },
    /// The drive is idle and the motors have been (re)driven to stop.
    Stopped,
}

/// Two-motor differential drive with timed, self-stopping moves.
///
/// Generic over:
/// - `LEFT`: left motor line (must implement `OutputPin`)
/// - `RIGHT`: right motor line (must implement `OutputPin`)
/// - `CLOCK`: time source (must implement [`TimeSource`])
///
/// The controller has no clock or thread of its own. The host calls
/// [`check_timeout`](Self::check_timeout) periodically from its main loop
/// or a timer interrupt; a move can overshoot its duration by up to one
/// polling period.
pub struct MotionController<LEFT, RIGHT, CLOCK>
where
    LEFT: OutputPin,
    RIGHT: OutputPin,
    CLOCK: TimeSource,
{
    /// Left motor line.
    left_pin: LEFT,

    /// Right motor line.
    right_pin: RIGHT,

    /// Time source for move timing.
    clock: CLOCK,

    /// Active command.
    direction: Direction,

    /// Time left before auto-stop; zero means no timed move.
    remaining: Ticks,

    /// Clock reading taken when the current move began.
    last_timestamp: Ticks,

    /// Whether the lines currently reflect `direction`.
    pins_synced: bool,

    /// Per-line inversion for active-low wiring.
    invert_left: bool,
    invert_right: bool,

    /// Drive name for logging/debugging.
    name: heapless::String<32>,
}

impl<LEFT, RIGHT, CLOCK> MotionController<LEFT, RIGHT, CLOCK>
where
    LEFT: OutputPin,
    RIGHT: OutputPin,
    CLOCK: TimeSource,
{
    /// Start building a controller.
    pub fn builder() -> MotionControllerBuilder<LEFT, RIGHT, CLOCK> {
        MotionControllerBuilder::new()
    }

    /// Create an idle controller. The lines are not touched until the first sync.
    pub(crate) fn new(
        left_pin: LEFT,
        right_pin: RIGHT,
        clock: CLOCK,
        name: heapless::String<32>,
        invert_left: bool,
        invert_right: bool,
    ) -> Self {
        Self {
            left_pin,
            right_pin,
            clock,
            direction: Direction::Idle,
            remaining: Ticks::ZERO,
            last_timestamp: Ticks::ZERO,
            pins_synced: false,
            invert_left,
            invert_right,
            name,
        }
    }

    /// Get the drive name.
    #[inline]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Get the active direction.
    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Get the time left on the current move.
    #[inline]
    pub fn remaining(&self) -> Ticks {
        self.remaining
    }

    /// Get the clock reading taken when the current move began.
    #[inline]
    pub fn last_timestamp(&self) -> Ticks {
        self.last_timestamp
    }

    /// Whether the lines currently reflect the active direction.
    #[inline]
    pub fn pins_synced(&self) -> bool {
        self.pins_synced
    }

    /// Check if a non-idle move is active.
    #[inline]
    pub fn is_moving(&self) -> bool {
        !self.direction.is_idle()
    }

    /// Start a timed move.
    ///
    /// The new direction is driven onto the lines before this returns. A
    /// `duration` of zero stops on the next [`check_timeout`](Self::check_timeout).
    ///
    /// # Errors
    ///
    /// Returns `DriveError::PinError` if a line cannot be set. The new
    /// direction and timer are kept and the next sync retries the lines.
    pub fn move_for(&mut self, direction: Direction, duration: Ticks) -> Result<()> {
        self.direction = direction;
        self.remaining = duration;
        self.last_timestamp = self.clock.now();

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "{}: move {} for {} ticks at {}",
            self.name.as_str(),
            direction,
            duration.0,
            self.last_timestamp.0
        );

        self.resync()
    }

    /// Stop immediately. Same as `move_for(Direction::Idle, 0)`.
    pub fn stop(&mut self) -> Result<()> {
        self.move_for(Direction::Idle, Ticks::ZERO)
    }

    /// Run a named maneuver from a registry.
    ///
    /// # Errors
    ///
    /// Returns `ManeuverError::NotFound` if the registry has no such maneuver,
    /// or a pin error from the move itself.
    pub fn execute(&mut self, maneuver_name: &str, registry: &ManeuverRegistry) -> Result<()> {
        let maneuver = registry.get(maneuver_name).ok_or_else(|| {
            Error::Maneuver(ManeuverError::NotFound(
                heapless::String::try_from(maneuver_name).unwrap_or_default(),
            ))
        })?;

        self.move_for(maneuver.direction, maneuver.duration)
    }

    /// Advance the move timer against the clock.
    ///
    /// Elapsed time is always measured from the reading taken when the move
    /// began, and the remaining duration is decremented by it on every call.
    /// Once elapsed reaches the remaining duration (an exact match counts as
    /// expired), the drive goes idle and the lines are driven low within this
    /// same call. While idle, every call re-asserts the stop pattern.
    pub fn check_timeout(&mut self) -> Result<MotionStatus> {
        let now = self.clock.now();
        let elapsed = now.elapsed_since(self.last_timestamp);

        if self.remaining > elapsed {
            self.remaining = self.remaining.saturating_sub(elapsed);
            return Ok(MotionStatus::Running {
                remaining: self.remaining,
            });
        }

        if !self.direction.is_idle() {
            #[cfg(feature = "defmt")]
            defmt::debug!("{}: {} expired at {}", self.name.as_str(), self.direction, now.0);
        }

        self.remaining = Ticks::ZERO;
        self.direction = Direction::Idle;
        self.resync()?;
        Ok(MotionStatus::Stopped)
    }

    /// Drive the lines to match the active direction, if they don't already.
    ///
    /// Writes the left line, then the right line, then marks the lines
    /// synced. Calling again before the next direction change writes nothing.
    pub fn sync_pins(&mut self) -> Result<()> {
        if self.pins_synced {
            return Ok(());
        }

        let (left, right) = self.direction.pin_states();
        let left = apply_polarity(left, self.invert_left);
        let right = apply_polarity(right, self.invert_right);

        self.left_pin
            .set_state(left)
            .map_err(|_| DriveError::PinError)?;
        self.right_pin
            .set_state(right)
            .map_err(|_| DriveError::PinError)?;

        self.pins_synced = true;
        Ok(())
    }

    /// Release the lines and the clock.
    pub fn release(self) -> (LEFT, RIGHT, CLOCK) {
        (self.left_pin, self.right_pin, self.clock)
    }

    /// Every state-changing transition ends here so the guard is never bypassed.
    fn resync(&mut self) -> Result<()> {
        self.pins_synced = false;
        self.sync_pins()
    }
}

#[inline]
fn apply_polarity(state: PinState, invert: bool) -> PinState {
    if invert {
        !state
    } else {
        state
    }
}
