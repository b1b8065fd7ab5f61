//! Configuration module for drive-motion.
//!
//! Provides types for loading and validating drive, maneuver, and sequence
//! configurations from TOML files (with `std` feature) or pre-parsed data.

mod drive;
mod maneuver;
mod system;
pub mod units;
#[cfg(feature = "std")]
mod loader;
mod validation;

pub use drive::DriveConfig;
pub use maneuver::{ManeuverConfig, SequenceConfig, MAX_SEQUENCE_STEPS};
pub use system::SystemConfig;
pub use validation::validate_config;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::Ticks;
