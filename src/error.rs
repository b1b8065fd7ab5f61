//! Error types for drive-motion library.
//!
//! Provides unified error handling across configuration, pin actuation, and maneuvers.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all drive-motion operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Drive (pin or direction) error
    Drive(DriveError),
    /// Maneuver lookup or sequencing error
    Maneuver(ManeuverError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// A required builder field was never set
    MissingField(&'static str),
    /// Poll interval must be greater than zero
    InvalidPollInterval(u32),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Drive operation errors.
#[derive(Debug, Clone, PartialEq)]
pub enum DriveError {
    /// Pin operation failed
    PinError,
    /// Raw direction value outside 0..=3
    UnknownDirection(u8),
}

/// Maneuver and sequence errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ManeuverError {
    /// No maneuver registered under this name
    NotFound(heapless::String<32>),
    /// No sequence registered under this name
    SequenceNotFound(heapless::String<32>),
    /// Sequence step names a maneuver that does not exist
    UnknownStep {
        /// Sequence name
        sequence: heapless::String<32>,
        /// Referenced maneuver name
        maneuver: heapless::String<32>,
    },
    /// Sequence has no steps
    EmptySequence(heapless::String<32>),
    /// Too many steps in a sequence
    TooManySteps,
    /// Repeating sequence whose steps add up to zero duration
    ZeroLengthLoop(heapless::String<32>),
    /// Name too long or otherwise unusable (holds up to 64 bytes of it)
    InvalidName(heapless::String<64>),
    /// Registry capacity exhausted
    RegistryFull,
}

impl ManeuverError {
    /// `InvalidName` carrying as much of the rejected name as fits.
    pub fn invalid_name(name: &str) -> Self {
        let mut end = name.len().min(64);
        while !name.is_char_boundary(end) {
            end -= 1;
        }
        ManeuverError::InvalidName(heapless::String::try_from(&name[..end]).unwrap_or_default())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Drive(e) => write!(f, "Drive error: {}", e),
            Error::Maneuver(e) => write!(f, "Maneuver error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::MissingField(field) => write!(f, "{} is required", field),
            ConfigError::InvalidPollInterval(v) => {
                write!(f, "Invalid poll interval: {}. Must be > 0", v)
            }
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for DriveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriveError::PinError => write!(f, "GPIO pin operation failed"),
            DriveError::UnknownDirection(raw) => {
                write!(f, "Unknown direction value {}. Valid values: 0-3", raw)
            }
        }
    }
}

impl fmt::Display for ManeuverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManeuverError::NotFound(name) => write!(f, "Maneuver '{}' not found", name),
            ManeuverError::SequenceNotFound(name) => write!(f, "Sequence '{}' not found", name),
            ManeuverError::UnknownStep { sequence, maneuver } => {
                write!(f, "Sequence '{}' references unknown maneuver '{}'", sequence, maneuver)
            }
            ManeuverError::EmptySequence(name) => write!(f, "Sequence '{}' has no steps", name),
            ManeuverError::TooManySteps => write!(f, "Too many sequence steps (max 16)"),
            ManeuverError::ZeroLengthLoop(name) => {
                write!(f, "Repeating sequence '{}' has zero total duration", name)
            }
            ManeuverError::InvalidName(name) => {
                write!(f, "Invalid name (max 32 chars): '{}'", name)
            }
            ManeuverError::RegistryFull => write!(f, "Maneuver registry is full"),
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<DriveError> for Error {
    fn from(e: DriveError) -> Self {
        Error::Drive(e)
    }
}

impl From<ManeuverError> for Error {
    fn from(e: ManeuverError) -> Self {
        Error::Maneuver(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for DriveError {}

#[cfg(feature = "std")]
impl std::error::Error for ManeuverError {}
