//! Population management and operations.
//!
//! This module provides structures and functions for managing populations
//! of individuals during evolutionary simulations.

use crate::base::FitnessValue;
use crate::evolution::IndividualFitness;
use crate::genome::Individual;
use rand::Rng;
use rayon::prelude::*;
use std::sync::Arc;

/// A population of diploid individuals.
#[derive(Debug, Clone)]
pub struct Population {
    /// The individuals in this population
    individuals: Vec<Individual>,
    /// Generation counter
    generation: usize,
    /// Population ID
    id: Arc<str>,
}

impl Population {
    /// Create a new population from individuals.
    pub fn new(id: impl Into<Arc<str>>, individuals: Vec<Individual>) -> Self {
        Self {
            individuals,
            generation: 0,
            id: id.into(),
        }
    }

    /// Get population ID.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the current generation number.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Increment the generation counter.
    pub fn increment_generation(&mut self) {
        self.generation += 1;
    }

    /// Get the number of individuals in the population.
    pub fn size(&self) -> usize {
        self.individuals.len()
    }

    /// Check if population is empty.
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Get all individuals as a slice.
    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    /// Get mutable access to individuals.
    pub fn individuals_mut(&mut self) -> &mut [Individual] {
        &mut self.individuals
    }

    /// Replace the entire population with new individuals.
    pub fn set_individuals(&mut self, individuals: Vec<Individual>) {
        self.individuals = individuals;
    }

    /// Get a specific individual by index.
    pub fn get(&self, index: usize) -> Option<&Individual> {
        self.individuals.get(index)
    }

    /// Get a mutable reference to a specific individual.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Individual> {
        self.individuals.get_mut(index)
    }

    /// Compute fitness values for all individuals.
    pub fn compute_fitness<F: IndividualFitness + ?Sized>(&self, model: &F) -> Vec<FitnessValue> {
        self.individuals
            .par_iter()
            .map(|ind| model.individual_fitness(ind))
            .collect()
    }

    /// Select parent pairs using fitness-proportional sampling.
    ///
    /// Returns `n_pairs` of parent pairs. Each pair consists of two distinct
    /// individuals (no selfing) whenever at least two individuals can be
    /// drawn. When a single individual carries all the fitness, it is paired
    /// with itself. Individuals can appear in multiple pairs.
    pub fn select_parents<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        fitness_values: &[FitnessValue],
        n_pairs: usize,
    ) -> Vec<(usize, usize)> {
        let size = self.size();
        if size == 0 {
            return Vec::new();
        }

        let total_fitness: f64 = fitness_values.iter().map(|f| f.get()).sum();
        let all_equal = fitness_values.windows(2).all(|w| w[0] == w[1]);
        if total_fitness <= 0.0 || all_equal {
            // Fitness values are all zeros/all identical - use uniform selection
            return (0..n_pairs)
                .map(|_| {
                    let parent1 = rng.random_range(0..size);
                    let mut parent2 = rng.random_range(0..size);
                    while parent2 == parent1 && size > 1 {
                        parent2 = rng.random_range(0..size);
                    }
                    (parent1, parent2)
                })
                .collect();
        }

        // Distinct parents need at least two individuals with positive weight
        let viable = fitness_values.iter().filter(|f| f.get() > 0.0).count();
        let distinct = viable > 1;

        // Weighted selection over the cumulative distribution
        let cumulative: Vec<f64> = fitness_values
            .iter()
            .scan(0.0, |acc, f| {
                *acc += f.get();
                Some(*acc)
            })
            .collect();
        let draw = |rng: &mut R| {
            let r = rng.random_range(0.0..total_fitness);
            cumulative.partition_point(|&c| c <= r).min(size - 1)
        };

        (0..n_pairs)
            .map(|_| {
                let parent1 = draw(rng);
                let mut parent2 = draw(rng);
                while parent2 == parent1 && distinct {
                    parent2 = draw(rng);
                }
                (parent1, parent2)
            })
            .collect()
    }

    /// Update cached fitness values for all individuals in the population.
    pub fn update_fitness<F: IndividualFitness + ?Sized>(&mut self, model: &F) -> Vec<FitnessValue> {
        let fitness_values = self.compute_fitness(model);
        for (ind, fitness) in self.individuals.iter_mut().zip(fitness_values.iter()) {
            ind.set_cached_fitness(*fitness);
        }
        fitness_values
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::{Mutation, MutationId, MutationType, MutationTypeId};
    use crate::evolution::MultiplicativeFitness;
    use crate::genome::{Haplotype, MutationRef};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    fn create_test_individual(id: &str, carries: bool) -> Individual {
        let hap1 = if carries {
            Haplotype::from_mutations(vec![MutationRef::new(5, MutationId::new(0))])
        } else {
            Haplotype::new()
        };
        Individual::new(id, hap1, Haplotype::new())
    }

    fn beneficial_registry() -> HashMap<MutationId, Mutation> {
        let ty = MutationType::new(MutationTypeId::new(2), 1.0, 1.0).unwrap();
        let m = Mutation::new(MutationId::new(0), &ty, 5, 0);
        HashMap::from([(m.id, m)])
    }

    #[test]
    fn test_population_new() {
        let individuals = vec![
            create_test_individual("ind1", false),
            create_test_individual("ind2", true),
        ];

        let pop = Population::new("pop1", individuals);
        assert_eq!(pop.size(), 2);
        assert_eq!(pop.generation(), 0);
        assert_eq!(pop.id(), "pop1");
    }

    #[test]
    fn test_population_increment_generation() {
        let mut pop = Population::new("pop1", vec![create_test_individual("ind1", false)]);

        assert_eq!(pop.generation(), 0);
        pop.increment_generation();
        pop.increment_generation();
        assert_eq!(pop.generation(), 2);
    }

    #[test]
    fn test_population_empty() {
        let pop = Population::new("pop1", Vec::new());
        assert!(pop.is_empty());

        let mut rng = StdRng::seed_from_u64(1);
        assert!(pop.select_parents(&mut rng, &[], 3).is_empty());
    }

    #[test]
    fn test_population_get() {
        let pop = Population::new(
            "pop1",
            vec![
                create_test_individual("ind1", false),
                create_test_individual("ind2", false),
            ],
        );

        assert_eq!(pop.get(0).unwrap().id(), "ind1");
        assert_eq!(pop.get(1).unwrap().id(), "ind2");
        assert!(pop.get(2).is_none());
    }

    #[test]
    fn test_population_update_fitness() {
        let mut pop = Population::new(
            "pop1",
            vec![
                create_test_individual("ind1", false),
                create_test_individual("ind2", true),
            ],
        );
        let registry = beneficial_registry();
        let model = MultiplicativeFitness::new(&registry);

        assert_eq!(pop.get(0).unwrap().cached_fitness(), None);

        let values = pop.update_fitness(&model);

        assert_eq!(values, vec![FitnessValue::new(1.0), FitnessValue::new(2.0)]);
        assert_eq!(pop.get(1).unwrap().cached_fitness(), Some(FitnessValue::new(2.0)));
    }

    #[test]
    fn test_population_select_parents_uniform() {
        let individuals = (0..4)
            .map(|i| create_test_individual(&format!("ind{i}"), false))
            .collect();
        let pop = Population::new("pop1", individuals);
        let fitness_values = vec![FitnessValue::default(); 4];

        let mut rng = StdRng::seed_from_u64(42);
        let pairs = pop.select_parents(&mut rng, &fitness_values, 5);

        assert_eq!(pairs.len(), 5);
        for (p1, p2) in pairs {
            assert!(p1 < pop.size());
            assert!(p2 < pop.size());
            assert_ne!(p1, p2);
        }
    }

    #[test]
    fn test_population_select_parents_weighted() {
        let individuals = (0..3)
            .map(|i| create_test_individual(&format!("ind{i}"), false))
            .collect();
        let pop = Population::new("pop1", individuals);
        let fitness_values = vec![
            FitnessValue::new(0.0),
            FitnessValue::new(1.0),
            FitnessValue::new(3.0),
        ];

        let mut rng = StdRng::seed_from_u64(42);
        let pairs = pop.select_parents(&mut rng, &fitness_values, 200);

        assert_eq!(pairs.len(), 200);
        let mut hits = [0usize; 3];
        for (p1, p2) in pairs {
            assert_ne!(p1, p2);
            hits[p1] += 1;
        }
        // A lethal individual is never the first parent
        assert_eq!(hits[0], 0);
        assert!(hits[2] > hits[1]);
    }

    #[test]
    fn test_population_select_parents_single_viable() {
        let individuals = (0..3)
            .map(|i| create_test_individual(&format!("ind{i}"), false))
            .collect();
        let pop = Population::new("pop1", individuals);
        let fitness_values = vec![
            FitnessValue::new(0.0),
            FitnessValue::new(1.5),
            FitnessValue::new(0.0),
        ];

        let mut rng = StdRng::seed_from_u64(7);
        let pairs = pop.select_parents(&mut rng, &fitness_values, 20);

        assert_eq!(pairs.len(), 20);
        assert!(pairs.iter().all(|&pair| pair == (1, 1)));
    }

    #[test]
    fn test_population_set_individuals() {
        let mut pop = Population::new("pop1", vec![create_test_individual("ind1", false)]);
        pop.set_individuals(vec![
            create_test_individual("ind2", false),
            create_test_individual("ind3", false),
        ]);
        assert_eq!(pop.size(), 2);
    }
}
