//! Runs a named sequence of maneuvers on a controller.
//!
//! The sequencer owns no hardware and no clock. Each [`poll`] forwards to
//! [`MotionController::check_timeout`] and, once the current step has
//! stopped, starts the next one. At most one step is started per poll.
//!
//! [`poll`]: ManeuverSequencer::poll

use embedded_hal::digital::OutputPin;
use heapless::{String, Vec};

use crate::config::{SequenceConfig, MAX_SEQUENCE_STEPS};
use crate::drive::{MotionController, MotionStatus, TimeSource};
use crate::error::{Error, ManeuverError, Result};

use super::registry::ManeuverRegistry;

/// Progress of a [`ManeuverSequencer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SequenceStatus {
    /// Not started yet.
    Idle,
    /// Step `step` is driving.
    Running {
        /// Zero-based index of the active step.
        step: usize,
    },
    /// Last step stopped and the sequence does not repeat.
    Finished,
}

/// Steps through a sequence of named maneuvers.
#[derive(Debug, Clone)]
pub struct ManeuverSequencer {
    name: String<32>,
    steps: Vec<String<32>, MAX_SEQUENCE_STEPS>,
    repeat: bool,
    next_step: usize,
    status: SequenceStatus,
}

impl ManeuverSequencer {
    /// Create a sequencer for an already-resolved sequence.
    ///
    /// # Errors
    ///
    /// Returns `ManeuverError::EmptySequence` if there is nothing to run.
    pub fn new(name: &str, sequence: &SequenceConfig) -> Result<Self> {
        let name = String::try_from(name)
            .map_err(|_| Error::Maneuver(ManeuverError::invalid_name(name)))?;

        if sequence.is_empty() {
            return Err(Error::Maneuver(ManeuverError::EmptySequence(name)));
        }

        Ok(Self {
            name,
            steps: sequence.steps.clone(),
            repeat: sequence.repeat,
            next_step: 0,
            status: SequenceStatus::Idle,
        })
    }

    /// Create a sequencer for a sequence registered under `name`.
    pub fn from_registry(registry: &ManeuverRegistry, name: &str) -> Result<Self> {
        let sequence = registry.sequence(name).ok_or_else(|| {
            Error::Maneuver(ManeuverError::SequenceNotFound(
                String::try_from(name).unwrap_or_default(),
            ))
        })?;

        Self::new(name, sequence)
    }

    /// Sequence name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Current progress.
    pub fn status(&self) -> SequenceStatus {
        self.status
    }

    /// Check if the last step has stopped.
    pub fn is_finished(&self) -> bool {
        self.status == SequenceStatus::Finished
    }

    /// Start (or restart) from the first step.
    pub fn start<LEFT, RIGHT, CLOCK>(
        &mut self,
        controller: &mut MotionController<LEFT, RIGHT, CLOCK>,
        registry: &ManeuverRegistry,
    ) -> Result<SequenceStatus>
    where
        LEFT: OutputPin,
        RIGHT: OutputPin,
        CLOCK: TimeSource,
    {
        self.next_step = 0;
        self.issue_next(controller, registry)
    }

    /// Advance the controller's timer and move on to the next step when due.
    ///
    /// Does nothing before [`start`](Self::start) or after the sequence finished.
    pub fn poll<LEFT, RIGHT, CLOCK>(
        &mut self,
        controller: &mut MotionController<LEFT, RIGHT, CLOCK>,
        registry: &ManeuverRegistry,
    ) -> Result<SequenceStatus>
    where
        LEFT: OutputPin,
        RIGHT: OutputPin,
        CLOCK: TimeSource,
    {
        if !matches!(self.status, SequenceStatus::Running { .. }) {
            return Ok(self.status);
        }

        match controller.check_timeout()? {
            MotionStatus::Running { .. } => Ok(self.status),
            MotionStatus::Stopped => {
                if self.next_step >= self.steps.len() {
                    if !self.repeat {
                        #[cfg(feature = "defmt")]
                        defmt::info!("sequence {} finished", self.name.as_str());

                        self.status = SequenceStatus::Finished;
                        return Ok(self.status);
                    }
                    self.next_step = 0;
                }
                self.issue_next(controller, registry)
            }
        }
    }

    fn issue_next<LEFT, RIGHT, CLOCK>(
        &mut self,
        controller: &mut MotionController<LEFT, RIGHT, CLOCK>,
        registry: &ManeuverRegistry,
    ) -> Result<SequenceStatus>
    where
        LEFT: OutputPin,
        RIGHT: OutputPin,
        CLOCK: TimeSource,
    {
        let step = self.next_step;
        let step_name = &self.steps[step];
        let maneuver = registry.get(step_name.as_str()).ok_or_else(|| {
            Error::Maneuver(ManeuverError::UnknownStep {
                sequence: self.name.clone(),
                maneuver: step_name.clone(),
            })
        })?;

        #[cfg(feature = "defmt")]
        defmt::info!(
            "sequence {} step {}: {}",
            self.name.as_str(),
            step,
            step_name.as_str()
        );

        controller.move_for(maneuver.direction, maneuver.duration)?;
        self.next_step = step + 1;
        self.status = SequenceStatus::Running { step };
        Ok(self.status)
    }
}
