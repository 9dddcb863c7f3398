use crate::base::{FitnessValue, MutationId};
use crate::genome::Haplotype;
use std::sync::Arc;

/// An individual organism with a diploid genome.
///
/// `Individual` contains two `Haplotype`s (the two genome copies) and a
/// cached fitness value. The `id` is stored in an `Arc<str>` so cloning
/// individuals is cheap for the identifier field.
#[derive(Debug, Clone)]
pub struct Individual {
    /// Unique identifier
    id: Arc<str>,
    /// First haplotype
    haplotype1: Haplotype,
    /// Second haplotype
    haplotype2: Haplotype,
    /// Cached fitness value. `None` indicates that the fitness has not
    /// been computed yet.
    fitness: Option<FitnessValue>,
}

impl Individual {
    /// Create a new `Individual` from two haplotypes.
    ///
    /// The initial cached fitness is `None` and may be updated later with
    /// `set_cached_fitness`.
    pub fn new(id: impl Into<Arc<str>>, haplotype1: Haplotype, haplotype2: Haplotype) -> Self {
        Self {
            id: id.into(),
            haplotype1,
            haplotype2,
            fitness: None,
        }
    }

    /// Return the individual's identifier as a `&str`.
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Borrow the first haplotype (read-only).
    #[inline]
    pub fn haplotype1(&self) -> &Haplotype {
        &self.haplotype1
    }

    /// Borrow the first haplotype mutably.
    #[inline]
    pub fn haplotype1_mut(&mut self) -> &mut Haplotype {
        self.fitness = None;
        &mut self.haplotype1
    }

    /// Borrow the second haplotype (read-only).
    #[inline]
    pub fn haplotype2(&self) -> &Haplotype {
        &self.haplotype2
    }

    /// Borrow the second haplotype mutably.
    #[inline]
    pub fn haplotype2_mut(&mut self) -> &mut Haplotype {
        self.fitness = None;
        &mut self.haplotype2
    }

    /// Borrow both haplotypes as a pair of references.
    pub fn haplotypes(&self) -> (&Haplotype, &Haplotype) {
        (&self.haplotype1, &self.haplotype2)
    }

    /// Borrow both haplotypes mutably as a pair of mutable references.
    pub fn haplotypes_mut(&mut self) -> (&mut Haplotype, &mut Haplotype) {
        self.fitness = None;
        (&mut self.haplotype1, &mut self.haplotype2)
    }

    /// Number of genome copies (0, 1 or 2) carrying the mutation instance `id`.
    #[inline]
    pub fn copies_carrying(&self, id: MutationId) -> u8 {
        u8::from(self.haplotype1.carries(id)) + u8::from(self.haplotype2.carries(id))
    }

    /// Return the cached fitness value for this individual.
    #[inline]
    pub fn cached_fitness(&self) -> Option<FitnessValue> {
        self.fitness
    }

    /// Set the cached fitness value for this individual.
    #[inline]
    pub fn set_cached_fitness(&mut self, fitness: impl Into<FitnessValue>) {
        self.fitness = Some(fitness.into());
    }

    /// Clear the cached fitness value, indicating it needs to be recomputed.
    #[inline]
    pub fn clear_cached_fitness(&mut self) {
        self.fitness = None;
    }
}
