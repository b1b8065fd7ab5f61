//! Unit tests for TOML configuration parsing.

use drive_motion::config::units::Ticks;
use drive_motion::config::{parse_config, SystemConfig};
use drive_motion::drive::Direction;
use drive_motion::maneuver::ManeuverRegistry;

const ROVER_CONFIG: &str = r#"
[drive]
name = "rover"
invert_left = true
poll_interval_ticks = 5

[maneuvers.ahead]
direction = "forward"
duration_ticks = 1500

[maneuvers.spin_left]
direction = "turn_left"
duration_ticks = 400

[maneuvers.spin_right]
direction = "turn_right"
duration_ticks = 400

[maneuvers.rest]
direction = "idle"
duration_ticks = 1000

[sequences.patrol]
steps = ["ahead", "spin_left", "ahead", "spin_right", "rest"]
repeat = true
"#;

/// Test parsing the drive section.
#[test]
fn test_parse_drive_config() {
    let config: SystemConfig = toml::from_str(ROVER_CONFIG).expect("Failed to parse TOML");

    assert_eq!(config.drive.name.as_str(), "rover");
    assert!(config.drive.invert_left);
    assert!(!config.drive.invert_right);
    assert_eq!(config.drive.poll_interval, Ticks(5));
}

/// Test parsing every direction name.
#[test]
fn test_parse_maneuvers() {
    let config: SystemConfig = toml::from_str(ROVER_CONFIG).expect("Failed to parse TOML");

    let cases = [
        ("ahead", Direction::Forward, 1500),
        ("spin_left", Direction::TurnLeft, 400),
        ("spin_right", Direction::TurnRight, 400),
        ("rest", Direction::Idle, 1000),
    ];
    for (name, direction, duration) in cases {
        let maneuver = config.maneuver(name).expect("Maneuver not found");
        assert_eq!(maneuver.direction, direction, "{}", name);
        assert_eq!(maneuver.duration, Ticks(duration), "{}", name);
    }
}

/// Test parsing a sequence.
#[test]
fn test_parse_sequence() {
    let config: SystemConfig = toml::from_str(ROVER_CONFIG).expect("Failed to parse TOML");
    let patrol = config.sequence("patrol").expect("Sequence not found");

    assert_eq!(patrol.len(), 5);
    assert_eq!(patrol.step(0), Some("ahead"));
    assert_eq!(patrol.step(4), Some("rest"));
    assert_eq!(patrol.step(5), None);
    assert!(patrol.repeat);
}

/// Test that the registry picks up everything from a parsed config.
#[test]
fn test_registry_from_config() {
    let config = parse_config(ROVER_CONFIG).expect("Config should be valid");
    let registry = ManeuverRegistry::from_config(&config);

    assert_eq!(registry.len(), 4);
    assert!(registry.contains("spin_left"));
    assert!(registry.sequence("patrol").is_some());
    assert_eq!(registry.sequence_names().count(), 1);
}

/// Test that unknown directions are rejected during parsing.
#[test]
fn test_unknown_direction_rejected() {
    let toml_str = r#"
[maneuvers.back]
direction = "reverse"
duration_ticks = 100
"#;

    let result: Result<SystemConfig, _> = toml::from_str(toml_str);
    assert!(result.is_err(), "Should reject directions outside the enum");
}

/// Test that negative durations are rejected during parsing.
#[test]
fn test_negative_duration_rejected() {
    let toml_str = r#"
[maneuvers.back]
direction = "forward"
duration_ticks = -5
"#;

    let result: Result<SystemConfig, _> = toml::from_str(toml_str);
    assert!(result.is_err(), "Durations are unsigned");
}
