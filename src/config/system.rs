//! System configuration - root configuration structure.

use heapless::{FnvIndexMap, String};
use serde::Deserialize;

use super::drive::DriveConfig;
use super::maneuver::{ManeuverConfig, SequenceConfig};

/// Root configuration structure from TOML.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SystemConfig {
    /// Drive wiring and polling settings.
    #[serde(default)]
    pub drive: DriveConfig,

    /// Named timed moves.
    #[serde(default)]
    pub maneuvers: FnvIndexMap<String<32>, ManeuverConfig, 32>,

    /// Named maneuver sequences.
    #[serde(default)]
    pub sequences: FnvIndexMap<String<32>, SequenceConfig, 8>,
}

impl SystemConfig {
    /// Get a maneuver by name.
    pub fn maneuver(&self, name: &str) -> Option<&ManeuverConfig> {
        self.maneuvers
            .iter()
            .find(|(k, _)| k.as_str() == name)
            .map(|(_, v)| v)
    }

    /// Get a sequence by name.
    pub fn sequence(&self, name: &str) -> Option<&SequenceConfig> {
        self.sequences
            .iter()
            .find(|(k, _)| k.as_str() == name)
            .map(|(_, v)| v)
    }

    /// List all maneuver names.
    pub fn maneuver_names(&self) -> impl Iterator<Item = &str> {
        self.maneuvers.keys().map(|s| s.as_str())
    }

    /// List all sequence names.
    pub fn sequence_names(&self) -> impl Iterator<Item = &str> {
        self.sequences.keys().map(|s| s.as_str())
    }
}
