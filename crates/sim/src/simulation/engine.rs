//! Simulation engine for a diploid Wright-Fisher population.
//!
//! Each call to [`Simulation::step`] runs one non-overlapping generation:
//! fitness evaluation, fitness-weighted parent selection, recombination into
//! gametes, new mutations, and a registry tally that turns fixed mutations
//! into substitutions.

use crate::base::{MutationId, MutationType, MutationTypeId};
use crate::errors::SimulationError;
use crate::evolution::{MultiplicativeFitness, MutationModel, RecombinationModel};
use crate::genome::{Haplotype, Individual, MutationRef};
use crate::simulation::{
    Configuration, MutationRegistry, Population, SimulationView, SweepHost,
};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use rayon::prelude::*;

/// Main simulation engine.
#[derive(Debug)]
pub struct Simulation {
    /// Current population
    population: Population,
    /// Segregating mutations and substitutions
    registry: MutationRegistry,
    /// Mutation types known to this run (background first)
    mutation_types: Vec<MutationType>,
    mutation: MutationModel,
    recombination: RecombinationModel,
    config: Configuration,
    /// Random number generator (using Xoshiro256++ for better performance)
    rng: Xoshiro256PlusPlus,
}

/// A new mutation sampled for one gamete before it is given an id.
struct PendingMutation {
    offspring: usize,
    second_copy: bool,
    mutation_type: MutationTypeId,
    position: usize,
}

impl Simulation {
    /// Create a new simulation of wild-type individuals from `config`.
    pub fn new(config: Configuration) -> Result<Self, SimulationError> {
        config.validate()?;

        let mutation_types = config.mutation_types()?;
        let evo = &config.evolution;
        let mutation = MutationModel::new(
            evo.mutation_rate,
            evo.genome_length,
            evo.tracked_mutation_fraction,
        )?;
        let recombination = RecombinationModel::new(evo.recombination_rate, evo.genome_length)?;

        // Create RNG from seed or thread_rng
        let rng = match config.execution.seed {
            Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed),
            None => Xoshiro256PlusPlus::from_seed(rand::rng().random()),
        };

        let individuals = (0..config.execution.population_size)
            .map(|i| Individual::new(format!("ind_{i}"), Haplotype::new(), Haplotype::new()))
            .collect();
        let mut population = Population::new("pop1", individuals);

        let mut registry = MutationRegistry::new();
        registry.tally(population.individuals_mut(), 0);

        tracing::debug!(
            population_size = config.execution.population_size,
            genome_length = evo.genome_length,
            seed = ?config.execution.seed,
            "initialized simulation"
        );

        Ok(Self {
            population,
            registry,
            mutation_types,
            mutation,
            recombination,
            config,
            rng,
        })
    }

    /// Get reference to current population.
    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Get the mutation registry.
    pub fn registry(&self) -> &MutationRegistry {
        &self.registry
    }

    /// Get the configuration this simulation was built from.
    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Look up a configured mutation type.
    pub fn mutation_type(&self, id: MutationTypeId) -> Option<&MutationType> {
        self.mutation_types.iter().find(|t| t.id == id)
    }

    /// Select parents and build offspring haplotypes for the next generation.
    fn generate_offspring(&mut self) -> Result<Vec<Individual>, SimulationError> {
        if self.population.is_empty() {
            return Err(SimulationError::EmptyPopulation);
        }

        let model = MultiplicativeFitness::new(&self.registry);
        let fitness_values = self.population.update_fitness(&model);

        let size = self.config.execution.population_size;
        let pairs = self
            .population
            .select_parents(&mut self.rng, &fitness_values, size);

        // Generate seeds for each offspring
        let seeds: Vec<u64> = (0..size).map(|_| self.rng.random()).collect();

        let population = &self.population;
        let recombination = &self.recombination;
        let mutation = &self.mutation;
        let background = self.config.background_type();
        let tracked = self.config.sweep.mutation_type;

        let (mut haplotypes, pending): (Vec<(Haplotype, Haplotype)>, Vec<Vec<PendingMutation>>) =
            pairs
                .par_iter()
                .zip(seeds.par_iter())
                .enumerate()
                .map(|(i, (&(p1, p2), &seed))| {
                    let mut local_rng = Xoshiro256PlusPlus::seed_from_u64(seed);
                    let mut new_mutations = Vec::new();

                    let gametes = [p1, p2].map(|idx| {
                        let parent = &population.individuals()[idx];
                        recombination.recombine(
                            parent.haplotype1(),
                            parent.haplotype2(),
                            &mut local_rng,
                        )
                    });

                    for second_copy in [false, true] {
                        for _ in 0..mutation.sample_count(&mut local_rng) {
                            new_mutations.push(PendingMutation {
                                offspring: i,
                                second_copy,
                                mutation_type: mutation.sample_type(
                                    background,
                                    tracked,
                                    &mut local_rng,
                                ),
                                position: mutation.sample_position(&mut local_rng),
                            });
                        }
                    }

                    let [hap1, hap2] = gametes;
                    ((hap1, hap2), new_mutations)
                })
                .unzip();

        // Ids are handed out sequentially so runs stay reproducible
        let generation = self.generation() + 1;
        for new in pending.into_iter().flatten() {
            let ty = self
                .mutation_types
                .iter()
                .find(|t| t.id == new.mutation_type)
                .ok_or(SimulationError::UnknownMutationType(new.mutation_type))?;
            let m = self.registry.allocate(ty, new.position, generation);
            let (hap1, hap2) = &mut haplotypes[new.offspring];
            let target = if new.second_copy { hap2 } else { hap1 };
            target.insert(MutationRef::new(m.position, m.id));
        }

        Ok(haplotypes
            .into_iter()
            .enumerate()
            .map(|(i, (hap1, hap2))| Individual::new(format!("ind_{i}"), hap1, hap2))
            .collect())
    }

    /// Advance simulation by one generation.
    pub fn step(&mut self) -> Result<(), SimulationError> {
        let offspring = self.generate_offspring()?;

        self.population.set_individuals(offspring);
        self.population.increment_generation();

        let generation = self.population.generation();
        let result = self
            .registry
            .tally(self.population.individuals_mut(), generation);

        if !result.fixed.is_empty() {
            tracing::debug!(generation, fixed = ?result.fixed, "mutations fixed");
        }
        Ok(())
    }

    /// Run simulation for a specific number of generations.
    pub fn run_for(&mut self, generations: usize) -> Result<(), SimulationError> {
        for _ in 0..generations {
            self.step()?;
        }
        Ok(())
    }

    /// Add one copy of a new mutation to a uniformly chosen genome copy.
    pub fn introduce_mutation(
        &mut self,
        mutation_type: MutationTypeId,
        position: usize,
    ) -> Result<MutationId, SimulationError> {
        let ty = self
            .mutation_type(mutation_type)
            .cloned()
            .ok_or(SimulationError::UnknownMutationType(mutation_type))?;
        let length = self.config.evolution.genome_length;
        if position >= length {
            return Err(SimulationError::InvalidPosition { position, length });
        }
        let size = self.population.size();
        if size == 0 {
            return Err(SimulationError::EmptyPopulation);
        }

        let copy = self.rng.random_range(0..2 * size);
        let generation = self.generation();
        let mutation = self.registry.allocate(&ty, position, generation);
        let individual = self
            .population
            .get_mut(copy / 2)
            .ok_or(SimulationError::EmptyPopulation)?;
        let haplotype = if copy % 2 == 0 {
            individual.haplotype1_mut()
        } else {
            individual.haplotype2_mut()
        };
        haplotype.insert(MutationRef::new(position, mutation.id));
        self.registry.add_copy(mutation.id);

        tracing::info!(
            generation,
            mutation = %mutation.id,
            mutation_type = %mutation_type,
            position,
            individual = individual.id(),
            "introduced mutation"
        );
        Ok(mutation.id)
    }
}

impl SimulationView for Simulation {
    fn generation(&self) -> usize {
        self.population.generation()
    }

    fn individuals(&self) -> &[Individual] {
        self.population.individuals()
    }

    fn frequency_of(&self, mutation_type: MutationTypeId) -> Option<f64> {
        self.registry.frequency_of_type(mutation_type)
    }

    fn segregating_of_type(&self, mutation_type: MutationTypeId) -> Vec<MutationId> {
        self.registry.segregating_of_type(mutation_type)
    }

    fn substitutions_of_type(&self, mutation_type: MutationTypeId) -> usize {
        self.registry.substitutions_of_type(mutation_type)
    }
}

impl SweepHost for Simulation {
    fn step(&mut self) -> Result<(), SimulationError> {
        Simulation::step(self)
    }

    fn introduce_mutation(
        &mut self,
        mutation_type: MutationTypeId,
        position: usize,
    ) -> Result<MutationId, SimulationError> {
        Simulation::introduce_mutation(self, mutation_type, position)
    }
}
