use std::error;
use std::fmt;

use crate::base::MutationTypeId;

/// Errors that can occur in fitness calculations.
#[derive(Debug, Clone, PartialEq)]
pub enum FitnessError {
    /// Invalid parameter value
    InvalidParameter(String),
}

impl fmt::Display for FitnessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FitnessError::InvalidParameter(msg) => {
                write!(f, "Invalid fitness parameter: {msg}")
            }
        }
    }
}

impl error::Error for FitnessError {}

/// Errors that can occur during mutation operations.
#[derive(Debug, Clone, PartialEq)]
pub enum MutationError {
    /// Invalid mutation rate (must be between 0.0 and 1.0)
    InvalidMutationRate(f64),
    /// Invalid fraction of new mutations drawn from the tracked type
    InvalidTrackedFraction(f64),
}

impl fmt::Display for MutationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MutationError::InvalidMutationRate(mu) => {
                write!(
                    f,
                    "Invalid mutation rate: {mu} (must be between 0.0 and 1.0)"
                )
            }
            MutationError::InvalidTrackedFraction(frac) => {
                write!(
                    f,
                    "Invalid tracked mutation fraction: {frac} (must be between 0.0 and 1.0)"
                )
            }
        }
    }
}

impl error::Error for MutationError {}

/// Errors that can occur during recombination operations.
#[derive(Debug, Clone, PartialEq)]
pub enum RecombinationError {
    /// Invalid probability value
    InvalidProbability(&'static str, f64),
}

impl fmt::Display for RecombinationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecombinationError::InvalidProbability(name, val) => {
                write!(
                    f,
                    "Invalid probability for {name}: {val} (must be between 0.0 and 1.0)"
                )
            }
        }
    }
}

impl error::Error for RecombinationError {}

/// Errors that can occur while loading, saving or validating a configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// IO error
    Io(std::io::Error),
    /// Parse error
    Parse(String),
    /// Validation error
    Validation(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {e}"),
            Self::Parse(msg) => write!(f, "Parse error: {msg}"),
            Self::Validation(msg) => write!(f, "Validation error: {msg}"),
        }
    }
}

impl error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(format!("JSON error: {e}"))
    }
}

/// Errors that can occur during simulation building.
#[derive(Debug)]
pub enum BuilderError {
    /// A required parameter is missing
    MissingRequired(&'static str),
    /// An invalid parameter value was provided
    InvalidParameter(String),
}

impl fmt::Display for BuilderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingRequired(param) => {
                write!(f, "Missing required parameter: {param}")
            }
            Self::InvalidParameter(msg) => {
                write!(f, "Invalid parameter: {msg}")
            }
        }
    }
}

impl error::Error for BuilderError {}

impl From<ConfigError> for BuilderError {
    fn from(e: ConfigError) -> Self {
        Self::InvalidParameter(e.to_string())
    }
}

impl From<SimulationError> for BuilderError {
    fn from(e: SimulationError) -> Self {
        Self::InvalidParameter(e.to_string())
    }
}

/// Errors raised by the simulation engine while stepping or while applying
/// the one-time sweep introduction.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// The population holds no individuals
    EmptyPopulation,
    /// A mutation type was referenced that the configuration does not define
    UnknownMutationType(MutationTypeId),
    /// A position outside `[0, genome_length)` was requested
    InvalidPosition { position: usize, length: usize },
    /// The configuration failed validation
    InvalidConfiguration(String),
    /// A mutation model failed to build
    Mutation(MutationError),
    /// A recombination model failed to build
    Recombination(RecombinationError),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPopulation => write!(f, "Population is empty"),
            Self::UnknownMutationType(ty) => write!(f, "Unknown mutation type: {ty}"),
            Self::InvalidPosition { position, length } => {
                write!(
                    f,
                    "Invalid position {position} for genome of length {length}"
                )
            }
            Self::InvalidConfiguration(msg) => write!(f, "Invalid configuration: {msg}"),
            Self::Mutation(e) => write!(f, "Mutation model error: {e}"),
            Self::Recombination(e) => write!(f, "Recombination model error: {e}"),
        }
    }
}

impl error::Error for SimulationError {}

impl From<MutationError> for SimulationError {
    fn from(e: MutationError) -> Self {
        Self::Mutation(e)
    }
}

impl From<RecombinationError> for SimulationError {
    fn from(e: RecombinationError) -> Self {
        Self::Recombination(e)
    }
}

impl From<ConfigError> for SimulationError {
    fn from(e: ConfigError) -> Self {
        Self::InvalidConfiguration(e.to_string())
    }
}
