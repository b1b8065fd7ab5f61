//! Builder pattern for MotionController.

use embedded_hal::digital::OutputPin;

use crate::config::{DriveConfig, SystemConfig};
use crate::error::{ConfigError, Error, Result};

use super::clock::TimeSource;
use super::controller::MotionController;

/// Builder for creating MotionController instances.
pub struct MotionControllerBuilder<LEFT, RIGHT, CLOCK>
where
    LEFT: OutputPin,
    RIGHT: OutputPin,
    CLOCK: TimeSource,
{
    left_pin: Option<LEFT>,
    right_pin: Option<RIGHT>,
    clock: Option<CLOCK>,
    name: Option<heapless::String<32>>,
    invert_left: bool,
    invert_right: bool,
}

impl<LEFT, RIGHT, CLOCK> Default for MotionControllerBuilder<LEFT, RIGHT, CLOCK>
where
    LEFT: OutputPin,
    RIGHT: OutputPin,
    CLOCK: TimeSource,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<LEFT, RIGHT, CLOCK> MotionControllerBuilder<LEFT, RIGHT, CLOCK>
where
    LEFT: OutputPin,
    RIGHT: OutputPin,
    CLOCK: TimeSource,
{
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            left_pin: None,
            right_pin: None,
            clock: None,
            name: None,
            invert_left: false,
            invert_right: false,
        }
    }

    /// Set the left motor line.
    pub fn left_pin(mut self, pin: LEFT) -> Self {
        self.left_pin = Some(pin);
        self
    }

    /// Set the right motor line.
    pub fn right_pin(mut self, pin: RIGHT) -> Self {
        self.right_pin = Some(pin);
        self
    }

    /// Set the time source.
    pub fn clock(mut self, clock: CLOCK) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Set the drive name.
    pub fn name(mut self, name: &str) -> Self {
        self.name = heapless::String::try_from(name).ok();
        self
    }

    /// Treat the left line as active-low.
    pub fn invert_left(mut self, invert: bool) -> Self {
        self.invert_left = invert;
        self
    }

    /// Treat the right line as active-low.
    pub fn invert_right(mut self, invert: bool) -> Self {
        self.invert_right = invert;
        self
    }

    /// Configure from a DriveConfig.
    pub fn from_drive_config(mut self, config: &DriveConfig) -> Self {
        self.name = Some(config.name.clone());
        self.invert_left = config.invert_left;
        self.invert_right = config.invert_right;
        self
    }

    /// Configure from the `[drive]` section of a SystemConfig.
    pub fn from_config(self, config: &SystemConfig) -> Self {
        self.from_drive_config(&config.drive)
    }

    /// Build the MotionController.
    ///
    /// # Errors
    ///
    /// Returns an error if a line or the clock is missing.
    pub fn build(self) -> Result<MotionController<LEFT, RIGHT, CLOCK>> {
        let left_pin = self
            .left_pin
            .ok_or(Error::Config(ConfigError::MissingField("left_pin")))?;

        let right_pin = self
            .right_pin
            .ok_or(Error::Config(ConfigError::MissingField("right_pin")))?;

        let clock = self
            .clock
            .ok_or(Error::Config(ConfigError::MissingField("clock")))?;

        let name = self
            .name
            .unwrap_or_else(|| heapless::String::try_from("drive").unwrap_or_default());

        Ok(MotionController::new(
            left_pin,
            right_pin,
            clock,
            name,
            self.invert_left,
            self.invert_right,
        ))
    }
}
