//! Maneuver and sequence configuration from TOML.

use heapless::{String, Vec};
use serde::Deserialize;

use super::units::Ticks;
use crate::drive::Direction;

/// Maximum number of steps in one sequence.
pub const MAX_SEQUENCE_STEPS: usize = 16;

/// A named timed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ManeuverConfig {
    /// Direction to drive.
    pub direction: Direction,

    /// How long to drive before stopping.
    #[serde(rename = "duration_ticks")]
    pub duration: Ticks,
}

impl ManeuverConfig {
    /// Create a new maneuver.
    pub const fn new(direction: Direction, duration: Ticks) -> Self {
        Self {
            direction,
            duration,
        }
    }
}

/// An ordered list of maneuver names run back to back.
#[derive(Debug, Clone, Deserialize)]
pub struct SequenceConfig {
    /// Maneuver names, in execution order.
    pub steps: Vec<String<32>, MAX_SEQUENCE_STEPS>,

    /// Start over from the first step after the last one stops.
    #[serde(default)]
    pub repeat: bool,
}

impl SequenceConfig {
    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Check if the sequence has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Step name at `index`.
    pub fn step(&self, index: usize) -> Option<&str> {
        self.steps.get(index).map(|s| s.as_str())
    }
}
