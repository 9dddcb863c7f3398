//! Bookkeeping for segregating mutations and fixed substitutions.

use crate::base::{Mutation, MutationId, MutationType, MutationTypeId, Substitution};
use crate::evolution::MutationLookup;
use crate::genome::Individual;
use std::collections::HashMap;

/// Result of a registry tally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TallyResult {
    /// Mutations that reached fixation this generation
    pub fixed: Vec<MutationId>,
    /// Number of mutations that were lost this generation
    pub lost: usize,
}

/// Registry of every mutation currently segregating in the population.
///
/// Copy counts are refreshed by [`MutationRegistry::tally`] after each round
/// of reproduction. A mutation carried by every genome copy is removed from
/// all haplotypes and recorded as a [`Substitution`]; a mutation carried by
/// none is dropped.
#[derive(Debug, Clone, Default)]
pub struct MutationRegistry {
    mutations: HashMap<MutationId, Mutation>,
    counts: HashMap<MutationId, usize>,
    substitutions: Vec<Substitution>,
    /// Total number of genome copies at the last tally (2N)
    total_copies: usize,
    next_id: u64,
}

impl MutationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a new mutation instance of `mutation_type` and register it
    /// with zero copies.
    pub fn allocate(
        &mut self,
        mutation_type: &MutationType,
        position: usize,
        generation: usize,
    ) -> Mutation {
        let id = MutationId::new(self.next_id);
        self.next_id += 1;
        let mutation = Mutation::new(id, mutation_type, position, generation);
        self.mutations.insert(id, mutation.clone());
        self.counts.insert(id, 0);
        mutation
    }

    /// Record one additional copy of `id` outside of a full tally.
    pub fn add_copy(&mut self, id: MutationId) {
        *self.counts.entry(id).or_insert(0) += 1;
    }

    /// Get a segregating mutation by id.
    pub fn get(&self, id: MutationId) -> Option<&Mutation> {
        self.mutations.get(&id)
    }

    /// Number of segregating mutations.
    pub fn len(&self) -> usize {
        self.mutations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mutations.is_empty()
    }

    /// Iterate over segregating mutations in arbitrary order.
    pub fn segregating(&self) -> impl Iterator<Item = &Mutation> {
        self.mutations.values()
    }

    /// Ids of segregating mutations of `mutation_type`, in ascending order.
    pub fn segregating_of_type(&self, mutation_type: MutationTypeId) -> Vec<MutationId> {
        let mut ids: Vec<MutationId> = self
            .mutations
            .values()
            .filter(|m| m.mutation_type == mutation_type)
            .map(|m| m.id)
            .collect();
        ids.sort_unstable();
        ids
    }

    /// Copies of `id` at the last tally.
    pub fn copies(&self, id: MutationId) -> usize {
        self.counts.get(&id).copied().unwrap_or(0)
    }

    /// Total genome copies (2N) at the last tally.
    pub fn total_copies(&self) -> usize {
        self.total_copies
    }

    /// Frequency of `id` among all genome copies, or `None` if it is not
    /// segregating.
    pub fn frequency(&self, id: MutationId) -> Option<f64> {
        if !self.mutations.contains_key(&id) || self.total_copies == 0 {
            return None;
        }
        Some(self.copies(id) as f64 / self.total_copies as f64)
    }

    /// Combined frequency of all segregating instances of `mutation_type`,
    /// or `None` when there are none.
    pub fn frequency_of_type(&self, mutation_type: MutationTypeId) -> Option<f64> {
        let ids = self.segregating_of_type(mutation_type);
        if ids.is_empty() || self.total_copies == 0 {
            return None;
        }
        let copies: usize = ids.iter().map(|&id| self.copies(id)).sum();
        Some(copies as f64 / self.total_copies as f64)
    }

    /// All fixed substitutions, oldest first.
    pub fn substitutions(&self) -> &[Substitution] {
        &self.substitutions
    }

    /// Number of fixed substitutions of `mutation_type`.
    pub fn substitutions_of_type(&self, mutation_type: MutationTypeId) -> usize {
        self.substitutions
            .iter()
            .filter(|s| s.mutation_type() == mutation_type)
            .count()
    }

    /// Recount copies across `individuals`, then convert fixed mutations to
    /// substitutions and drop lost ones.
    pub fn tally(&mut self, individuals: &mut [Individual], generation: usize) -> TallyResult {
        self.total_copies = 2 * individuals.len();
        self.counts.clear();
        for ind in individuals.iter() {
            let (h1, h2) = ind.haplotypes();
            for id in h1.ids().chain(h2.ids()) {
                *self.counts.entry(id).or_insert(0) += 1;
            }
        }

        let mut fixed: Vec<MutationId> = self
            .counts
            .iter()
            .filter(|&(_, &count)| self.total_copies > 0 && count == self.total_copies)
            .map(|(&id, _)| id)
            .collect();
        fixed.sort_unstable();

        if !fixed.is_empty() {
            for ind in individuals.iter_mut() {
                let (h1, h2) = ind.haplotypes_mut();
                h1.retain(|m| fixed.binary_search(&m.id).is_err());
                h2.retain(|m| fixed.binary_search(&m.id).is_err());
            }
            for &id in &fixed {
                self.counts.remove(&id);
                if let Some(mutation) = self.mutations.remove(&id) {
                    self.substitutions.push(Substitution {
                        mutation,
                        fixation_generation: generation,
                    });
                }
            }
        }

        let before = self.mutations.len();
        let counts = &self.counts;
        self.mutations.retain(|id, _| counts.get(id).is_some_and(|&c| c > 0));
        let lost = before - self.mutations.len();

        TallyResult { fixed, lost }
    }
}

impl MutationLookup for MutationRegistry {
    fn mutation(&self, id: MutationId) -> Option<&Mutation> {
        self.get(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genome::{Haplotype, MutationRef};

    fn tracked() -> MutationType {
        MutationType::new(MutationTypeId::new(2), 0.5, 0.5).unwrap()
    }

    fn carrier(id: &str, muts: &[&Mutation], both: bool) -> Individual {
        let refs: Vec<MutationRef> = muts
            .iter()
            .map(|m| MutationRef::new(m.position, m.id))
            .collect();
        let h2 = if both {
            Haplotype::from_mutations(refs.clone())
        } else {
            Haplotype::new()
        };
        Individual::new(id, Haplotype::from_mutations(refs), h2)
    }

    #[test]
    fn test_allocate_assigns_fresh_ids() {
        let mut reg = MutationRegistry::new();
        let a = reg.allocate(&tracked(), 10, 0);
        let b = reg.allocate(&tracked(), 10, 0);
        assert_ne!(a.id, b.id);
        assert_eq!(reg.len(), 2);
        assert_eq!(reg.segregating_of_type(MutationTypeId::new(2)), vec![a.id, b.id]);
    }

    #[test]
    fn test_tally_counts_and_frequency() {
        let mut reg = MutationRegistry::new();
        let m = reg.allocate(&tracked(), 10, 0);
        let mut inds = vec![
            carrier("a", &[&m], true),
            carrier("b", &[&m], false),
            carrier("c", &[], false),
            carrier("d", &[], false),
        ];

        let result = reg.tally(&mut inds, 1);

        assert!(result.fixed.is_empty());
        assert_eq!(result.lost, 0);
        assert_eq!(reg.copies(m.id), 3);
        assert_eq!(reg.total_copies(), 8);
        assert_eq!(reg.frequency(m.id), Some(3.0 / 8.0));
        assert_eq!(reg.frequency_of_type(MutationTypeId::new(2)), Some(3.0 / 8.0));
    }

    #[test]
    fn test_tally_records_fixation() {
        let mut reg = MutationRegistry::new();
        let m = reg.allocate(&tracked(), 10, 0);
        let mut inds = vec![carrier("a", &[&m], true), carrier("b", &[&m], true)];

        let result = reg.tally(&mut inds, 42);

        assert_eq!(result.fixed, vec![m.id]);
        assert!(reg.is_empty());
        assert_eq!(reg.substitutions().len(), 1);
        assert_eq!(reg.substitutions()[0].fixation_generation, 42);
        assert_eq!(reg.substitutions_of_type(MutationTypeId::new(2)), 1);
        assert_eq!(reg.frequency_of_type(MutationTypeId::new(2)), None);
        assert!(inds.iter().all(|ind| ind.copies_carrying(m.id) == 0));
    }

    #[test]
    fn test_tally_drops_lost_mutations() {
        let mut reg = MutationRegistry::new();
        let m = reg.allocate(&tracked(), 10, 0);
        let mut inds = vec![carrier("a", &[], false), carrier("b", &[], false)];

        let result = reg.tally(&mut inds, 3);

        assert_eq!(result.lost, 1);
        assert!(reg.get(m.id).is_none());
        assert_eq!(reg.substitutions_of_type(MutationTypeId::new(2)), 0);
        assert!(reg.segregating_of_type(MutationTypeId::new(2)).is_empty());
    }

    #[test]
    fn test_add_copy() {
        let mut reg = MutationRegistry::new();
        let mut inds = vec![carrier("a", &[], false)];
        reg.tally(&mut inds, 0);

        let m = reg.allocate(&tracked(), 10, 0);
        reg.add_copy(m.id);

        assert_eq!(reg.copies(m.id), 1);
        assert_eq!(reg.frequency(m.id), Some(0.5));
    }
}
