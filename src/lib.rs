//! # drive-motion
//!
//! Timed two-motor differential drive control with embedded-hal 1.0 support.
//!
//! ## Features
//!
//! - **Timed moves**: every command carries a duration and stops itself once it elapses
//! - **embedded-hal 1.0**: Uses `OutputPin` for the left and right motor lines
//! - **Injected time**: any [`TimeSource`] (or plain `FnMut() -> u32`) drives the timer
//! - **no_std compatible**: Core library works without standard library
//! - **Configuration-driven**: Named maneuvers and sequences from TOML files
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use drive_motion::{Direction, MotionController, Ticks};
//!
//! let mut drive = MotionController::builder()
//!     .name("rover")
//!     .left_pin(left_pin)
//!     .right_pin(right_pin)
//!     .clock(|| timer.now_ms())
//!     .build()?;
//!
//! drive.move_for(Direction::Forward, Ticks(1_500))?;
//!
//! loop {
//!     drive.check_timeout()?;
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `defmt`: Enables defmt logging for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
#![allow(clippy::result_large_err)]

// Core modules
pub mod config;
pub mod drive;
pub mod error;
pub mod maneuver;

// Re-exports for ergonomic API
pub use config::{validate_config, DriveConfig, ManeuverConfig, SequenceConfig, SystemConfig};
pub use drive::{Direction, MotionController, MotionControllerBuilder, MotionStatus, TimeSource};
pub use error::{Error, Result};
pub use maneuver::{ManeuverRegistry, ManeuverSequencer, SequenceStatus};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};

// Unit types
pub use config::units::Ticks;
