//! Configuration loading from files (std only).

use std::fs;
use std::path::Path;

use crate::error::{ConfigError, Error, Result};

use super::SystemConfig;

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
///
/// ```rust,ignore
/// use drive_motion::load_config;
///
/// let config = load_config("drive.toml")?;
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SystemConfig> {
    let content = fs::read_to_string(path.as_ref()).map_err(|e| {
        let msg = heapless::String::try_from(e.to_string().as_str()).unwrap_or_default();
        Error::Config(ConfigError::IoError(msg))
    })?;

    parse_config(&content)
}

/// Parse configuration from a TOML string.
///
/// # Errors
///
/// Returns an error if the TOML is invalid or fails validation.
pub fn parse_config(content: &str) -> Result<SystemConfig> {
    let config: SystemConfig = toml::from_str(content).map_err(|e| {
        let msg = heapless::String::try_from(e.message()).unwrap_or_default();
        Error::Config(ConfigError::ParseError(msg))
    })?;

    super::validation::validate_config(&config)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::units::Ticks;
    use crate::drive::Direction;
    use crate::error::ManeuverError;

    #[test]
    fn test_parse_empty_config() {
        let config = parse_config("").unwrap();
        assert_eq!(config.drive.name.as_str(), "drive");
        assert!(config.maneuvers.is_empty());
    }

    #[test]
    fn test_parse_with_maneuver() {
        let toml = r#"
[drive]
name = "rover"
poll_interval_ticks = 5

[maneuvers.nudge]
direction = "forward"
duration_ticks = 250
"#;

        let config = parse_config(toml).unwrap();
        assert_eq!(config.drive.name.as_str(), "rover");
        assert_eq!(config.drive.poll_interval, Ticks(5));
        let nudge = config.maneuver("nudge").unwrap();
        assert_eq!(nudge.direction, Direction::Forward);
        assert_eq!(nudge.duration, Ticks(250));
    }

    #[test]
    fn test_parse_rejects_dangling_step() {
        let toml = r#"
[maneuvers.nudge]
direction = "forward"
duration_ticks = 250

[sequences.patrol]
steps = ["nudge", "spin"]
"#;

        let result = parse_config(toml);
        assert!(matches!(
            result,
            Err(Error::Maneuver(ManeuverError::UnknownStep { .. }))
        ));
    }

    #[test]
    fn test_parse_error_is_reported() {
        let toml = r#"
[maneuvers.nudge]
direction = "backward"
duration_ticks = 250
"#;

        let result = parse_config(toml);
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::ParseError(_)))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_config("/definitely/not/here/drive.toml");
        assert!(matches!(result, Err(Error::Config(ConfigError::IoError(_)))));
    }
}
