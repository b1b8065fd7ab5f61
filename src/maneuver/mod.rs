//! Maneuver module for drive-motion.
//!
//! Provides named maneuver lookup and sequencing of timed moves.

mod registry;
mod sequencer;

pub use registry::{ManeuverRegistry, MAX_MANEUVERS, MAX_SEQUENCES};
pub use sequencer::{ManeuverSequencer, SequenceStatus};
