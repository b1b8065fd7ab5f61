//! Configuration validation.

use heapless::String;

use crate::error::{ConfigError, Error, ManeuverError, Result};

use super::units::Ticks;
use super::{DriveConfig, SequenceConfig, SystemConfig};

/// Validate a system configuration.
///
/// Checks:
/// - Poll interval is non-zero
/// - Sequences have at least one step
/// - Every sequence step names an existing maneuver
/// - Repeating sequences take a non-zero amount of time per pass
pub fn validate_config(config: &SystemConfig) -> Result<()> {
    validate_drive(&config.drive)?;

    for (name, seq) in config.sequences.iter() {
        validate_sequence(name, seq, config)?;
    }

    Ok(())
}

fn validate_drive(config: &DriveConfig) -> Result<()> {
    if config.poll_interval.is_zero() {
        return Err(Error::Config(ConfigError::InvalidPollInterval(
            config.poll_interval.value(),
        )));
    }

    Ok(())
}

fn validate_sequence(name: &String<32>, seq: &SequenceConfig, config: &SystemConfig) -> Result<()> {
    if seq.is_empty() {
        return Err(Error::Maneuver(ManeuverError::EmptySequence(name.clone())));
    }

    let mut total = Ticks::ZERO;
    for step in seq.steps.iter() {
        let maneuver = config.maneuver(step.as_str()).ok_or_else(|| {
            Error::Maneuver(ManeuverError::UnknownStep {
                sequence: name.clone(),
                maneuver: step.clone(),
            })
        })?;
        total = total + maneuver.duration;
    }

    // A zero-length loop would reissue moves on every poll forever.
    if seq.repeat && total.is_zero() {
        return Err(Error::Maneuver(ManeuverError::ZeroLengthLoop(name.clone())));
    }

    Ok(())
}
