//! Selection and fitness functions for individuals.
//!
//! Fitness determines reproductive success: individuals with higher fitness
//! contribute more offspring to the next generation, which is what drives a
//! beneficial mutation towards fixation.
//!
//! ## Multiplicative fitness
//! Every selected mutation carried by an individual scales its fitness:
//! - **Homozygous carriers**: `× (1 + s)`
//! - **Heterozygous carriers**: `× (1 + h·s)`
//!
//! Effects of different mutations are independent and multiply. Neutral
//! mutations (`s = 0`) do not affect fitness.

use crate::base::{FitnessValue, Mutation, MutationId};
use crate::genome::{Individual, MutationRef};
use std::collections::HashMap;

/// Trait for scoring fitness of a diploid individual.
///
/// Implementors must be `Sync` so fitness can be evaluated across the
/// population in parallel.
pub trait IndividualFitness: Sync {
    /// Calculate fitness score for a diploid individual.
    fn individual_fitness(&self, individual: &Individual) -> FitnessValue;
}

/// Resolves a mutation id to its full record.
pub trait MutationLookup: Sync {
    fn mutation(&self, id: MutationId) -> Option<&Mutation>;
}

impl<S: std::hash::BuildHasher + Sync> MutationLookup for HashMap<MutationId, Mutation, S> {
    fn mutation(&self, id: MutationId) -> Option<&Mutation> {
        self.get(&id)
    }
}

/// Multiplicative fitness over all selected mutations an individual carries.
///
/// Ids the lookup cannot resolve are treated as neutral.
pub struct MultiplicativeFitness<'a, L: ?Sized> {
    lookup: &'a L,
}

impl<'a, L: MutationLookup + ?Sized> MultiplicativeFitness<'a, L> {
    pub fn new(lookup: &'a L) -> Self {
        Self { lookup }
    }

    fn effect(&self, id: MutationId, copies: u8) -> FitnessValue {
        match self.lookup.mutation(id) {
            Some(m) if !m.is_neutral() => m.fitness_effect(copies),
            _ => FitnessValue::NEUTRAL_FITNESS,
        }
    }
}

impl<L: MutationLookup + ?Sized> IndividualFitness for MultiplicativeFitness<'_, L> {
    fn individual_fitness(&self, individual: &Individual) -> FitnessValue {
        let (h1, h2) = individual.haplotypes();
        let mut fitness = FitnessValue::NEUTRAL_FITNESS;

        // Both haplotypes are sorted by (position, id), so a merge walk
        // visits every carried mutation once with its copy number.
        let (a, b): (&[MutationRef], &[MutationRef]) = (h1.mutations(), h2.mutations());
        let (mut i, mut j) = (0, 0);
        while i < a.len() || j < b.len() {
            let (id, copies) = match (a.get(i), b.get(j)) {
                (Some(x), Some(y)) if x == y => {
                    i += 1;
                    j += 1;
                    (x.id, 2)
                }
                (Some(x), Some(y)) if x < y => {
                    i += 1;
                    (x.id, 1)
                }
                (Some(_), Some(y)) => {
                    j += 1;
                    (y.id, 1)
                }
                (Some(x), None) => {
                    i += 1;
                    (x.id, 1)
                }
                (None, Some(y)) => {
                    j += 1;
                    (y.id, 1)
                }
                (None, None) => break,
            };
            fitness *= self.effect(id, copies);
        }

        fitness
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::{MutationType, MutationTypeId};
    use crate::genome::Haplotype;

    fn registry() -> HashMap<MutationId, Mutation> {
        let beneficial = MutationType::new(MutationTypeId::new(2), 0.5, 0.5).unwrap();
        let neutral = MutationType::neutral(MutationTypeId::new(1));
        let deleterious = MutationType::new(MutationTypeId::new(3), -0.2, 1.0).unwrap();

        [
            Mutation::new(MutationId::new(1), &beneficial, 50, 0),
            Mutation::new(MutationId::new(2), &neutral, 10, 0),
            Mutation::new(MutationId::new(3), &deleterious, 90, 0),
        ]
        .into_iter()
        .map(|m| (m.id, m))
        .collect()
    }

    fn hap(entries: &[(usize, u64)]) -> Haplotype {
        Haplotype::from_mutations(
            entries
                .iter()
                .map(|&(pos, id)| MutationRef::new(pos, MutationId::new(id)))
                .collect(),
        )
    }

    fn fitness_of(ind: &Individual) -> f64 {
        let reg = registry();
        let model = MultiplicativeFitness::new(&reg);
        model.individual_fitness(ind).get()
    }

    #[test]
    fn test_wild_type_is_neutral() {
        let ind = Individual::new("wt", hap(&[]), hap(&[]));
        assert_eq!(fitness_of(&ind), 1.0);
    }

    #[test]
    fn test_heterozygous_and_homozygous_effects() {
        let het = Individual::new("het", hap(&[(50, 1)]), hap(&[]));
        let hom = Individual::new("hom", hap(&[(50, 1)]), hap(&[(50, 1)]));

        assert!((fitness_of(&het) - 1.25).abs() < 1e-12);
        assert!((fitness_of(&hom) - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_neutral_mutations_ignored() {
        let ind = Individual::new("n", hap(&[(10, 2)]), hap(&[(10, 2), (50, 1)]));
        assert!((fitness_of(&ind) - 1.25).abs() < 1e-12);
    }

    #[test]
    fn test_effects_multiply() {
        let ind = Individual::new("mix", hap(&[(50, 1), (90, 3)]), hap(&[(50, 1)]));
        // 1.5 (homozygous beneficial) × 0.8 (dominant deleterious)
        assert!((fitness_of(&ind) - 1.2).abs() < 1e-12);
    }

    #[test]
    fn test_unknown_ids_are_neutral() {
        let ind = Individual::new("u", hap(&[(5, 99)]), hap(&[]));
        assert_eq!(fitness_of(&ind), 1.0);
    }
}
