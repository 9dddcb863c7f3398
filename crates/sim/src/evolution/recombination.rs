//! Recombination operations for haplotypes.
//!
//! Crossovers occur at rate `r` per interval between adjacent bases, so a
//! gamete drawn from a genome of length `L` receives Poisson(`r·(L − 1)`)
//! breakpoints. A breakpoint at `b` falls between bases `b − 1` and `b`;
//! the gamete switches parental copy at every breakpoint.

pub use crate::errors::RecombinationError;
use crate::genome::{Haplotype, MutationRef};
use rand::Rng;
use rand_distr::{Distribution, Poisson};

/// Parameters controlling recombination behavior.
#[derive(Debug, Clone)]
pub struct RecombinationModel {
    /// Crossover probability per base interval per generation
    rate: f64,
    /// Length of the simulated genome in bases
    genome_length: usize,
    /// Cached breakpoint distribution; `None` when no crossovers can occur
    breakpoints: Option<Poisson<f64>>,
}

impl RecombinationModel {
    /// Create a new recombination model.
    ///
    /// # Errors
    /// Returns an error if `rate` is outside [0.0, 1.0].
    pub fn new(rate: f64, genome_length: usize) -> Result<Self, RecombinationError> {
        if !(0.0..=1.0).contains(&rate) {
            return Err(RecombinationError::InvalidProbability("recombination_rate", rate));
        }

        let intervals = genome_length.saturating_sub(1) as f64;
        let expected = rate * intervals;
        let breakpoints = if expected > 0.0 {
            Poisson::new(expected).ok()
        } else {
            None
        };

        Ok(Self {
            rate,
            genome_length,
            breakpoints,
        })
    }

    /// Get the crossover rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Sample sorted, de-duplicated breakpoints in `[1, genome_length)`.
    pub fn sample_breakpoints<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<usize> {
        let Some(poisson) = &self.breakpoints else {
            return Vec::new();
        };

        let count = poisson.sample(rng) as usize;
        let mut breakpoints: Vec<usize> = (0..count)
            .map(|_| rng.random_range(1..self.genome_length))
            .collect();
        breakpoints.sort_unstable();
        breakpoints.dedup();
        breakpoints
    }

    /// Build a gamete from the two parental haplotypes.
    ///
    /// The gamete starts by copying `first` (or `second` when
    /// `start_with_second` is set) and switches source at every breakpoint.
    pub fn gamete(
        first: &Haplotype,
        second: &Haplotype,
        breakpoints: &[usize],
        start_with_second: bool,
    ) -> Haplotype {
        let source = if start_with_second { second } else { first };
        if breakpoints.is_empty() {
            return source.clone();
        }

        // Segment k (between breakpoint k-1 and k) is copied from `first`
        // when k + start is even.
        let start = usize::from(start_with_second);
        let from_first = |m: &MutationRef| {
            let segment = breakpoints.partition_point(|&b| b <= m.position);
            (segment + start) % 2 == 0
        };

        let mut mutations: Vec<MutationRef> =
            Vec::with_capacity(first.len().max(second.len()));
        mutations.extend(first.iter().filter(|m| from_first(m)).copied());
        mutations.extend(second.iter().filter(|m| !from_first(m)).copied());
        Haplotype::from_mutations(mutations)
    }

    /// Sample breakpoints and a starting copy, then build a gamete.
    pub fn recombine<R: Rng + ?Sized>(
        &self,
        first: &Haplotype,
        second: &Haplotype,
        rng: &mut R,
    ) -> Haplotype {
        let breakpoints = self.sample_breakpoints(rng);
        let start_with_second = rng.random_bool(0.5);
        Self::gamete(first, second, &breakpoints, start_with_second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::MutationId;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    fn hap(entries: &[(usize, u64)]) -> Haplotype {
        Haplotype::from_mutations(
            entries
                .iter()
                .map(|&(pos, id)| MutationRef::new(pos, MutationId::new(id)))
                .collect(),
        )
    }

    fn ids(h: &Haplotype) -> Vec<u64> {
        h.ids().map(|id| id.get()).collect()
    }

    #[test]
    fn test_invalid_rate() {
        assert!(RecombinationModel::new(-0.1, 100).is_err());
        assert!(RecombinationModel::new(1.1, 100).is_err());
    }

    #[test]
    fn test_gamete_without_breakpoints_copies_source() {
        let a = hap(&[(10, 1), (90, 2)]);
        let b = hap(&[(50, 3)]);

        assert_eq!(ids(&RecombinationModel::gamete(&a, &b, &[], false)), vec![1, 2]);
        assert_eq!(ids(&RecombinationModel::gamete(&a, &b, &[], true)), vec![3]);
    }

    #[test]
    fn test_gamete_single_crossover() {
        let a = hap(&[(10, 1), (90, 2)]);
        let b = hap(&[(20, 3), (80, 4)]);

        // [0, 50) from a, [50, L) from b
        let g = RecombinationModel::gamete(&a, &b, &[50], false);
        assert_eq!(ids(&g), vec![1, 4]);

        // [0, 50) from b, [50, L) from a
        let g = RecombinationModel::gamete(&a, &b, &[50], true);
        assert_eq!(ids(&g), vec![3, 2]);
    }

    #[test]
    fn test_breakpoint_position_is_exclusive_on_left() {
        let a = hap(&[(50, 1)]);
        let b = hap(&[(50, 2)]);

        // Breakpoint at 50 puts base 50 in the second segment.
        let g = RecombinationModel::gamete(&a, &b, &[50], false);
        assert_eq!(ids(&g), vec![2]);
    }

    #[test]
    fn test_gamete_keeps_shared_mutation_once() {
        let a = hap(&[(10, 1), (60, 5)]);
        let b = hap(&[(10, 1), (70, 6)]);

        let g = RecombinationModel::gamete(&a, &b, &[30], true);
        assert_eq!(ids(&g), vec![1, 5]);
    }

    #[test]
    fn test_sampled_breakpoints_sorted_and_in_range() {
        let model = RecombinationModel::new(0.01, 1_000).unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(5);
        for _ in 0..100 {
            let bps = model.sample_breakpoints(&mut rng);
            assert!(bps.windows(2).all(|w| w[0] < w[1]));
            assert!(bps.iter().all(|&b| (1..1_000).contains(&b)));
        }
    }

    #[test]
    fn test_single_base_genome_never_breaks() {
        let model = RecombinationModel::new(1.0, 1).unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(5);
        assert!(model.sample_breakpoints(&mut rng).is_empty());
    }
}
