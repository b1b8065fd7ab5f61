//! Unit tests for configuration validation.

use drive_motion::config::{validate_config, SystemConfig};
use drive_motion::error::{ConfigError, Error, ManeuverError};

/// Test validation of a valid configuration.
#[test]
fn test_valid_config_passes_validation() {
    let toml_str = r#"
[maneuvers.ahead]
direction = "forward"
duration_ticks = 100

[sequences.once]
steps = ["ahead"]
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    assert!(validate_config(&config).is_ok());
}

/// Test validation fails for a sequence step naming no maneuver.
#[test]
fn test_sequence_invalid_step_reference() {
    let toml_str = r#"
[maneuvers.ahead]
direction = "forward"
duration_ticks = 100

[sequences.bad_ref]
steps = ["ahead", "backflip"]
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    match validate_config(&config) {
        Err(Error::Maneuver(ManeuverError::UnknownStep { sequence, maneuver })) => {
            assert_eq!(sequence.as_str(), "bad_ref");
            assert_eq!(maneuver.as_str(), "backflip");
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

/// Test validation fails for a zero poll interval.
#[test]
fn test_zero_poll_interval() {
    let toml_str = r#"
[drive]
poll_interval_ticks = 0
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let result = validate_config(&config);
    assert_eq!(
        result,
        Err(Error::Config(ConfigError::InvalidPollInterval(0)))
    );
}

/// Test validation fails for an empty sequence.
#[test]
fn test_empty_sequence() {
    let toml_str = r#"
[sequences.nothing]
steps = []
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let result = validate_config(&config);
    assert!(matches!(
        result,
        Err(Error::Maneuver(ManeuverError::EmptySequence(_)))
    ));
}

/// Test validation fails for a repeating sequence that never waits.
#[test]
fn test_zero_length_loop() {
    let toml_str = r#"
[maneuvers.blip]
direction = "forward"
duration_ticks = 0

[sequences.spin]
steps = ["blip", "blip"]
repeat = true
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let result = validate_config(&config);
    assert!(matches!(
        result,
        Err(Error::Maneuver(ManeuverError::ZeroLengthLoop(_)))
    ));
}

/// Test that empty configuration is valid.
#[test]
fn test_empty_config_is_valid() {
    let config = SystemConfig::default();
    assert!(validate_config(&config).is_ok());
}
