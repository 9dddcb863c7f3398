//! Mutation operations.
//!
//! New mutations arise independently at rate `μ` per base per generation,
//! so the number of new mutations on one gamete of length `L` follows a
//! Poisson distribution with mean `μ·L`. Each new mutation lands at a
//! uniformly random position and is drawn from the background (neutral)
//! mutation type, or with a configurable probability from the tracked
//! type. The latter models recurrent mutation at the swept site.

pub use crate::errors::MutationError;
use crate::base::MutationTypeId;
use rand::Rng;
use rand_distr::{Distribution, Poisson};

/// Parameters controlling the appearance of new mutations.
#[derive(Debug, Clone)]
pub struct MutationModel {
    /// Mutation rate per base per generation
    rate: f64,
    /// Length of the simulated genome in bases
    genome_length: usize,
    /// Probability that a new mutation is of the tracked type
    tracked_fraction: f64,
    /// Cached event distribution; `None` when no mutations can occur
    events: Option<Poisson<f64>>,
}

impl MutationModel {
    /// Create a new mutation model.
    ///
    /// # Errors
    /// Returns an error if `rate` or `tracked_fraction` is outside [0.0, 1.0].
    pub fn new(
        rate: f64,
        genome_length: usize,
        tracked_fraction: f64,
    ) -> Result<Self, MutationError> {
        if !(0.0..=1.0).contains(&rate) {
            return Err(MutationError::InvalidMutationRate(rate));
        }
        if !(0.0..=1.0).contains(&tracked_fraction) {
            return Err(MutationError::InvalidTrackedFraction(tracked_fraction));
        }

        let expected = rate * genome_length as f64;
        let events = if expected > 0.0 {
            Poisson::new(expected).ok()
        } else {
            None
        };

        Ok(Self {
            rate,
            genome_length,
            tracked_fraction,
            events,
        })
    }

    /// A model under which no mutations ever occur.
    pub fn none(genome_length: usize) -> Self {
        Self {
            rate: 0.0,
            genome_length,
            tracked_fraction: 0.0,
            events: None,
        }
    }

    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    #[inline]
    pub fn tracked_fraction(&self) -> f64 {
        self.tracked_fraction
    }

    /// Sample the number of new mutations on one gamete.
    pub fn sample_count<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        match &self.events {
            Some(poisson) => poisson.sample(rng) as usize,
            None => 0,
        }
    }

    /// Sample a uniformly random position in `[0, genome_length)`.
    pub fn sample_position<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        rng.random_range(0..self.genome_length.max(1))
    }

    /// Choose the type of a new mutation.
    pub fn sample_type<R: Rng + ?Sized>(
        &self,
        background: MutationTypeId,
        tracked: MutationTypeId,
        rng: &mut R,
    ) -> MutationTypeId {
        if self.tracked_fraction > 0.0 && rng.random_bool(self.tracked_fraction) {
            tracked
        } else {
            background
        }
    }
}
