//! Simulation configuration.
//!
//! The master [`Configuration`] can be serialized to and from JSON so that a
//! sweep setup can be reproduced exactly.

use crate::base::{MutationType, MutationTypeId};
use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Default values shared by the builder, the configuration and the CLI.
pub mod defaults {
    pub const POPULATION_SIZE: usize = 500;
    pub const MAX_GENERATIONS: usize = 10_000;
    pub const GENOME_LENGTH: usize = 100_000;
    pub const MUTATION_RATE: f64 = 1e-7;
    pub const RECOMBINATION_RATE: f64 = 1e-8;
    pub const TRACKED_MUTATION_FRACTION: f64 = 0.0;
    pub const SELECTION_COEFFICIENT: f64 = 0.5;
    pub const DOMINANCE: f64 = 0.5;
    pub const INTRODUCTION_GENERATION: usize = 1_000;
    /// Label of the neutral background mutation type (`m1`)
    pub const BACKGROUND_TYPE: u32 = 1;
    /// Label of the tracked sweep mutation type (`m2`)
    pub const TRACKED_TYPE: u32 = 2;
}

/// The master configuration struct.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    #[serde(default)]
    pub execution: ExecutionConfig,
    #[serde(default)]
    pub evolution: EvolutionConfig,
    #[serde(default)]
    pub sweep: SweepConfig,
}

/// High-level run parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecutionConfig {
    /// Number of diploid individuals in population
    pub population_size: usize,
    /// Generation ceiling; the run stops here even if the sweep is unresolved
    pub max_generations: usize,
    /// Optional RNG seed for reproducibility
    pub seed: Option<u64>,
}

impl ExecutionConfig {
    pub fn new(population_size: usize, max_generations: usize, seed: Option<u64>) -> Self {
        Self {
            population_size,
            max_generations,
            seed,
        }
    }
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self::new(defaults::POPULATION_SIZE, defaults::MAX_GENERATIONS, None)
    }
}

/// Background evolutionary parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolutionConfig {
    /// Genome length in bases
    pub genome_length: usize,
    /// Mutation rate per base per generation
    pub mutation_rate: f64,
    /// Crossover rate per base interval per generation
    pub recombination_rate: f64,
    /// Probability that a new background mutation is of the tracked type
    pub tracked_mutation_fraction: f64,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            genome_length: defaults::GENOME_LENGTH,
            mutation_rate: defaults::MUTATION_RATE,
            recombination_rate: defaults::RECOMBINATION_RATE,
            tracked_mutation_fraction: defaults::TRACKED_MUTATION_FRACTION,
        }
    }
}

/// The introduced sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepConfig {
    /// Mutation type of the swept allele
    pub mutation_type: MutationTypeId,
    pub selection_coefficient: f64,
    pub dominance: f64,
    /// Generation at which the allele is introduced (>= 1)
    pub introduction_generation: usize,
    /// Position of the allele; defaults to the middle of the genome
    pub position: Option<usize>,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            mutation_type: MutationTypeId::new(defaults::TRACKED_TYPE),
            selection_coefficient: defaults::SELECTION_COEFFICIENT,
            dominance: defaults::DOMINANCE,
            introduction_generation: defaults::INTRODUCTION_GENERATION,
            position: None,
        }
    }
}

impl Configuration {
    /// Load a configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let file = File::open(path.as_ref())?;
        let config: Self = serde_json::from_reader(BufReader::new(file))?;
        Ok(config)
    }

    /// Parse a configuration from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Write this configuration as pretty-printed JSON.
    pub fn to_json_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let file = File::create(path.as_ref())?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }

    /// Label of the neutral background mutation type.
    pub fn background_type(&self) -> MutationTypeId {
        MutationTypeId::new(defaults::BACKGROUND_TYPE)
    }

    /// All mutation types used by this configuration (background first).
    pub fn mutation_types(&self) -> Result<Vec<MutationType>, ConfigError> {
        let tracked = MutationType::new(
            self.sweep.mutation_type,
            self.sweep.selection_coefficient,
            self.sweep.dominance,
        )
        .map_err(|e| ConfigError::Validation(e.to_string()))?;
        Ok(vec![MutationType::neutral(self.background_type()), tracked])
    }

    /// Position of the introduced allele.
    pub fn sweep_position(&self) -> usize {
        self.sweep
            .position
            .unwrap_or(self.evolution.genome_length / 2)
    }

    /// Check every parameter for consistency.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fail = |msg: String| Err(ConfigError::Validation(msg));
        let exec = &self.execution;
        let evo = &self.evolution;
        let sweep = &self.sweep;

        if exec.population_size == 0 {
            return fail("population_size must be greater than 0".into());
        }
        if exec.max_generations == 0 {
            return fail("max_generations must be greater than 0".into());
        }
        if evo.genome_length == 0 {
            return fail("genome_length must be greater than 0".into());
        }
        for (name, value) in [
            ("mutation_rate", evo.mutation_rate),
            ("recombination_rate", evo.recombination_rate),
            ("tracked_mutation_fraction", evo.tracked_mutation_fraction),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return fail(format!("{name} must be between 0.0 and 1.0, got {value}"));
            }
        }
        if sweep.mutation_type == self.background_type() {
            return fail(format!(
                "sweep mutation type {} collides with the background type",
                sweep.mutation_type
            ));
        }
        if sweep.introduction_generation == 0 {
            return fail("introduction_generation must be at least 1".into());
        }
        if sweep.introduction_generation > exec.max_generations {
            return fail(format!(
                "introduction_generation ({}) exceeds max_generations ({})",
                sweep.introduction_generation, exec.max_generations
            ));
        }
        let position = self.sweep_position();
        if position >= evo.genome_length {
            return fail(format!(
                "sweep position {position} is outside genome of length {}",
                evo.genome_length
            ));
        }
        self.mutation_types()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = Configuration::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.sweep_position(), 50_000);
        assert_eq!(config.sweep.mutation_type.to_string(), "m2");
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = Configuration::from_json_str(
            r#"{ "execution": { "population_size": 50, "seed": 7 } }"#,
        )
        .unwrap();

        assert_eq!(config.execution.population_size, 50);
        assert_eq!(config.execution.seed, Some(7));
        assert_eq!(config.execution.max_generations, defaults::MAX_GENERATIONS);
        assert_eq!(config.sweep, SweepConfig::default());
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let err = Configuration::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sweep.json");

        let mut config = Configuration::default();
        config.execution.seed = Some(99);
        config.sweep.position = Some(10);
        config.to_json_file(&path).unwrap();

        let loaded = Configuration::from_json_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Configuration::from_json_file("/nonexistent/sweep.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_validation_failures() {
        let mut config = Configuration::default();
        config.execution.population_size = 0;
        assert!(config.validate().is_err());

        let mut config = Configuration::default();
        config.evolution.mutation_rate = 2.0;
        assert!(config.validate().is_err());

        let mut config = Configuration::default();
        config.sweep.introduction_generation = 0;
        assert!(config.validate().is_err());

        let mut config = Configuration::default();
        config.sweep.introduction_generation = config.execution.max_generations + 1;
        assert!(config.validate().is_err());

        let mut config = Configuration::default();
        config.sweep.position = Some(config.evolution.genome_length);
        assert!(config.validate().is_err());

        let mut config = Configuration::default();
        config.sweep.mutation_type = config.background_type();
        assert!(config.validate().is_err());

        let mut config = Configuration::default();
        config.sweep.selection_coefficient = -2.0;
        assert!(config.validate().is_err());
    }
}
