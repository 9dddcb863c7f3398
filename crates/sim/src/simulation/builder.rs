//! Builder pattern for creating simulations.
//!
//! Provides a fluent API for configuring and creating simulations with
//! sensible defaults and comprehensive validation.

pub use crate::errors::BuilderError;
use crate::simulation::configs::defaults;
use crate::simulation::{
    Configuration, EvolutionConfig, ExecutionConfig, Simulation, SweepConfig,
};
use crate::base::MutationTypeId;

/// Builder for constructing Simulation instances with a fluent API.
///
/// # Examples
///
/// ```
/// use hwsweep_sim::simulation::SimulationBuilder;
///
/// // Simple simulation with defaults
/// let sim = SimulationBuilder::new()
///     .population_size(50)
///     .build()
///     .unwrap();
///
/// // A strongly selected sweep introduced early
/// let sim = SimulationBuilder::new()
///     .population_size(100)
///     .max_generations(500)
///     .genome_length(10_000)
///     .sweep(0.5, 0.5)
///     .introduction_generation(10)
///     .seed(42)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct SimulationBuilder {
    // Required parameters
    population_size: Option<usize>,

    // Run parameters (with defaults)
    max_generations: usize,
    seed: Option<u64>,

    // Evolutionary parameters (with defaults)
    genome_length: usize,
    mutation_rate: f64,
    recombination_rate: f64,
    tracked_mutation_fraction: f64,

    // Sweep parameters (with defaults)
    tracked_type: MutationTypeId,
    selection_coefficient: f64,
    dominance: f64,
    introduction_generation: usize,
    sweep_position: Option<usize>,
}

impl Default for SimulationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulationBuilder {
    /// Create a new simulation builder with default values.
    pub fn new() -> Self {
        Self {
            population_size: None,
            max_generations: defaults::MAX_GENERATIONS,
            seed: None,
            genome_length: defaults::GENOME_LENGTH,
            mutation_rate: defaults::MUTATION_RATE,
            recombination_rate: defaults::RECOMBINATION_RATE,
            tracked_mutation_fraction: defaults::TRACKED_MUTATION_FRACTION,
            tracked_type: MutationTypeId::new(defaults::TRACKED_TYPE),
            selection_coefficient: defaults::SELECTION_COEFFICIENT,
            dominance: defaults::DOMINANCE,
            introduction_generation: defaults::INTRODUCTION_GENERATION,
            sweep_position: None,
        }
    }

    /// Start from an existing configuration.
    pub fn from_config(config: &Configuration) -> Self {
        Self {
            population_size: Some(config.execution.population_size),
            max_generations: config.execution.max_generations,
            seed: config.execution.seed,
            genome_length: config.evolution.genome_length,
            mutation_rate: config.evolution.mutation_rate,
            recombination_rate: config.evolution.recombination_rate,
            tracked_mutation_fraction: config.evolution.tracked_mutation_fraction,
            tracked_type: config.sweep.mutation_type,
            selection_coefficient: config.sweep.selection_coefficient,
            dominance: config.sweep.dominance,
            introduction_generation: config.sweep.introduction_generation,
            sweep_position: config.sweep.position,
        }
    }

    /// Set the population size (required).
    pub fn population_size(mut self, size: usize) -> Self {
        self.population_size = Some(size);
        self
    }

    /// Set the generation ceiling.
    pub fn max_generations(mut self, generations: usize) -> Self {
        self.max_generations = generations;
        self
    }

    /// Set the genome length in bases.
    pub fn genome_length(mut self, length: usize) -> Self {
        self.genome_length = length;
        self
    }

    /// Set the per-base mutation rate.
    pub fn mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Set the per-interval crossover rate.
    pub fn recombination_rate(mut self, rate: f64) -> Self {
        self.recombination_rate = rate;
        self
    }

    /// Set the probability that a new background mutation is of the tracked type.
    pub fn tracked_mutation_fraction(mut self, fraction: f64) -> Self {
        self.tracked_mutation_fraction = fraction;
        self
    }

    /// Set the tracked mutation type label.
    pub fn tracked_type(mut self, id: MutationTypeId) -> Self {
        self.tracked_type = id;
        self
    }

    /// Set the selection coefficient and dominance of the swept allele.
    pub fn sweep(mut self, selection_coefficient: f64, dominance: f64) -> Self {
        self.selection_coefficient = selection_coefficient;
        self.dominance = dominance;
        self
    }

    /// Set the generation at which the swept allele is introduced.
    pub fn introduction_generation(mut self, generation: usize) -> Self {
        self.introduction_generation = generation;
        self
    }

    /// Set the position of the swept allele.
    pub fn sweep_position(mut self, position: usize) -> Self {
        self.sweep_position = Some(position);
        self
    }

    /// Set the random seed for reproducibility.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Assemble and validate the configuration without building a simulation.
    pub fn build_config(&self) -> Result<Configuration, BuilderError> {
        let population_size = self
            .population_size
            .ok_or(BuilderError::MissingRequired("population_size"))?;

        let config = Configuration {
            execution: ExecutionConfig::new(population_size, self.max_generations, self.seed),
            evolution: EvolutionConfig {
                genome_length: self.genome_length,
                mutation_rate: self.mutation_rate,
                recombination_rate: self.recombination_rate,
                tracked_mutation_fraction: self.tracked_mutation_fraction,
            },
            sweep: SweepConfig {
                mutation_type: self.tracked_type,
                selection_coefficient: self.selection_coefficient,
                dominance: self.dominance,
                introduction_generation: self.introduction_generation,
                position: self.sweep_position,
            },
        };
        config.validate()?;
        Ok(config)
    }

    /// Build the simulation.
    pub fn build(self) -> Result<Simulation, BuilderError> {
        let config = self.build_config()?;
        Ok(Simulation::new(config)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::SimulationView;

    #[test]
    fn test_builder_minimal() {
        let sim = SimulationBuilder::new().population_size(20).build().unwrap();

        assert_eq!(sim.individuals().len(), 20);
        assert_eq!(sim.config().execution.max_generations, defaults::MAX_GENERATIONS);
        assert_eq!(sim.config().sweep_position(), defaults::GENOME_LENGTH / 2);
    }

    #[test]
    fn test_builder_missing_population_size() {
        let err = SimulationBuilder::new().build().unwrap_err();
        assert!(matches!(err, BuilderError::MissingRequired("population_size")));
    }

    #[test]
    fn test_builder_invalid_rate() {
        let err = SimulationBuilder::new()
            .population_size(10)
            .mutation_rate(1.5)
            .build()
            .unwrap_err();
        assert!(matches!(err, BuilderError::InvalidParameter(_)));
    }

    #[test]
    fn test_builder_sweep_parameters() {
        let config = SimulationBuilder::new()
            .population_size(10)
            .max_generations(100)
            .genome_length(500)
            .sweep(0.1, 1.0)
            .introduction_generation(5)
            .sweep_position(3)
            .seed(1)
            .build_config()
            .unwrap();

        assert_eq!(config.sweep.selection_coefficient, 0.1);
        assert_eq!(config.sweep.dominance, 1.0);
        assert_eq!(config.sweep.introduction_generation, 5);
        assert_eq!(config.sweep_position(), 3);
        assert_eq!(config.execution.seed, Some(1));
    }

    #[test]
    fn test_from_config_round_trip() {
        let mut config = Configuration::default();
        config.execution.population_size = 42;
        config.execution.seed = Some(3);

        let rebuilt = SimulationBuilder::from_config(&config).build_config().unwrap();
        assert_eq!(rebuilt, config);
    }
}
