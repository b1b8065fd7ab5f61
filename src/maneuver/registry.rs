//! Maneuver registry for named maneuver and sequence lookup.

use heapless::{FnvIndexMap, String};

use crate::config::{ManeuverConfig, SequenceConfig, SystemConfig};
use crate::error::{Error, ManeuverError, Result};

/// Maximum number of maneuvers in the registry.
pub const MAX_MANEUVERS: usize = 32;

/// Maximum number of sequences in the registry.
pub const MAX_SEQUENCES: usize = 8;

/// Registry for named maneuvers and sequences.
#[derive(Debug)]
pub struct ManeuverRegistry {
    maneuvers: FnvIndexMap<String<32>, ManeuverConfig, MAX_MANEUVERS>,
    sequences: FnvIndexMap<String<32>, SequenceConfig, MAX_SEQUENCES>,
}

impl Default for ManeuverRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn key(name: &str) -> Result<String<32>> {
    String::try_from(name).map_err(|_| Error::Maneuver(ManeuverError::invalid_name(name)))
}

impl ManeuverRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            maneuvers: FnvIndexMap::new(),
            sequences: FnvIndexMap::new(),
        }
    }

    /// Load maneuvers and sequences from a SystemConfig.
    pub fn from_config(config: &SystemConfig) -> Self {
        let mut registry = Self::new();
        for (name, maneuver) in &config.maneuvers {
            let _ = registry.register(name.as_str(), *maneuver);
        }
        for (name, sequence) in &config.sequences {
            let _ = registry.register_sequence(name.as_str(), sequence.clone());
        }
        registry
    }

    /// Register a maneuver with a name, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is too long or the registry is full.
    pub fn register(&mut self, name: &str, maneuver: ManeuverConfig) -> Result<()> {
        self.maneuvers
            .insert(key(name)?, maneuver)
            .map_err(|_| Error::Maneuver(ManeuverError::RegistryFull))?;
        Ok(())
    }

    /// Register a sequence with a name, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is too long or the registry is full.
    pub fn register_sequence(&mut self, name: &str, sequence: SequenceConfig) -> Result<()> {
        self.sequences
            .insert(key(name)?, sequence)
            .map_err(|_| Error::Maneuver(ManeuverError::RegistryFull))?;
        Ok(())
    }

    /// Get a maneuver by name.
    pub fn get(&self, name: &str) -> Option<&ManeuverConfig> {
        let name_str = String::try_from(name).ok()?;
        self.maneuvers.get(&name_str)
    }

    /// Get a sequence by name.
    pub fn sequence(&self, name: &str) -> Option<&SequenceConfig> {
        let name_str = String::try_from(name).ok()?;
        self.sequences.get(&name_str)
    }

    /// Check if a maneuver exists.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Remove a maneuver by name.
    pub fn remove(&mut self, name: &str) -> Option<ManeuverConfig> {
        let name_str = String::try_from(name).ok()?;
        self.maneuvers.remove(&name_str)
    }

    /// Get the number of registered maneuvers.
    pub fn len(&self) -> usize {
        self.maneuvers.len()
    }

    /// Check if the registry has no maneuvers.
    pub fn is_empty(&self) -> bool {
        self.maneuvers.is_empty()
    }

    /// Get an iterator over maneuver names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.maneuvers.keys().map(|s| s.as_str())
    }

    /// Get an iterator over sequence names.
    pub fn sequence_names(&self) -> impl Iterator<Item = &str> {
        self.sequences.keys().map(|s| s.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::units::Ticks;
    use crate::drive::Direction;

    #[test]
    fn test_register_and_get() {
        let mut registry = ManeuverRegistry::new();
        registry
            .register("spin", ManeuverConfig::new(Direction::TurnLeft, Ticks(300)))
            .unwrap();

        assert!(registry.contains("spin"));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("spin").unwrap().duration, Ticks(300));
        assert!(registry.get("missing").is_none());
    }

    #[test]
    fn test_register_replaces() {
        let mut registry = ManeuverRegistry::new();
        registry
            .register("go", ManeuverConfig::new(Direction::Forward, Ticks(10)))
            .unwrap();
        registry
            .register("go", ManeuverConfig::new(Direction::Forward, Ticks(20)))
            .unwrap();

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("go").unwrap().duration, Ticks(20));
    }

    #[test]
    fn test_name_too_long() {
        let mut registry = ManeuverRegistry::new();
        let long = "a_maneuver_name_that_is_much_longer_than_thirty_two";

        let result = registry.register(long, ManeuverConfig::new(Direction::Idle, Ticks(1)));
        match result {
            Err(Error::Maneuver(ManeuverError::InvalidName(rejected))) => {
                assert_eq!(rejected.as_str(), long);
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(!registry.contains(long));
    }

    #[test]
    fn test_registry_full() {
        let mut registry = ManeuverRegistry::new();
        let maneuver = ManeuverConfig::new(Direction::Forward, Ticks(1));
        for i in 0..MAX_MANEUVERS {
            let mut name: String<32> = String::new();
            core::fmt::Write::write_fmt(&mut name, format_args!("m{}", i)).unwrap();
            registry.register(name.as_str(), maneuver).unwrap();
        }

        let result = registry.register("one_more", maneuver);
        assert_eq!(result, Err(Error::Maneuver(ManeuverError::RegistryFull)));
    }

    #[test]
    fn test_remove() {
        let mut registry = ManeuverRegistry::new();
        registry
            .register("go", ManeuverConfig::new(Direction::Forward, Ticks(10)))
            .unwrap();

        assert!(registry.remove("go").is_some());
        assert!(registry.is_empty());
        assert!(registry.remove("go").is_none());
    }
}
