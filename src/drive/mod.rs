//! Drive module for drive-motion.
//!
//! Provides the differential drive controller, its direction type, and the
//! time source capability it runs on.

mod builder;
mod clock;
mod controller;
mod direction;

pub use builder::MotionControllerBuilder;
pub use clock::TimeSource;
pub use controller::{MotionController, MotionStatus};
pub use direction::Direction;
