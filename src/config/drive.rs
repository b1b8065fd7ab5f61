//! Drive configuration from TOML.

use heapless::String;
use serde::Deserialize;

use super::units::Ticks;

/// Wiring and scheduling settings for one differential drive.
#[derive(Debug, Clone, Deserialize)]
pub struct DriveConfig {
    /// Human-readable name (max 32 chars).
    #[serde(default = "default_name")]
    pub name: String<32>,

    /// Left motor line is active-low.
    #[serde(default)]
    pub invert_left: bool,

    /// Right motor line is active-low.
    #[serde(default)]
    pub invert_right: bool,

    /// How often the host intends to call `check_timeout`.
    ///
    /// A move can overshoot its duration by up to one poll interval.
    #[serde(default = "default_poll_interval", rename = "poll_interval_ticks")]
    pub poll_interval: Ticks,
}

fn default_name() -> String<32> {
    String::try_from("drive").unwrap_or_default()
}

fn default_poll_interval() -> Ticks {
    Ticks(10)
}

impl Default for DriveConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            invert_left: false,
            invert_right: false,
            poll_interval: default_poll_interval(),
        }
    }
}

impl DriveConfig {
    /// Latest a move of `duration` can stop, given the configured poll interval.
    pub fn worst_case_stop(&self, duration: Ticks) -> Ticks {
        duration + self.poll_interval
    }
}
