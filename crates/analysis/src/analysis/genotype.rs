//! Genotype counting at a single locus
//!
//! Each individual is classified by the number of its two genome copies that
//! carry a given mutation instance.

use hwsweep_sim::base::MutationId;
use hwsweep_sim::genome::Individual;
use rayon::prelude::*;
use serde::Serialize;
use std::ops::Add;

/// Genotype of one individual at the tracked locus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Zygosity {
    /// Two derived copies (AA)
    HomozygousDerived,
    /// One derived copy (Aa)
    Heterozygous,
    /// No derived copies (aa)
    HomozygousAncestral,
}

impl Zygosity {
    /// Classify from the number of carrying genome copies (0, 1 or 2).
    pub fn from_copies(copies: u8) -> Self {
        match copies {
            0 => Zygosity::HomozygousAncestral,
            1 => Zygosity::Heterozygous,
            _ => Zygosity::HomozygousDerived,
        }
    }
}

/// Observed genotype counts `[AA, Aa, aa]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GenotypeCounts {
    pub homozygous_derived: usize,
    pub heterozygous: usize,
    pub homozygous_ancestral: usize,
}

impl GenotypeCounts {
    pub fn new(homozygous_derived: usize, heterozygous: usize, homozygous_ancestral: usize) -> Self {
        Self {
            homozygous_derived,
            heterozygous,
            homozygous_ancestral,
        }
    }

    /// Count one individual.
    pub fn record(&mut self, zygosity: Zygosity) {
        match zygosity {
            Zygosity::HomozygousDerived => self.homozygous_derived += 1,
            Zygosity::Heterozygous => self.heterozygous += 1,
            Zygosity::HomozygousAncestral => self.homozygous_ancestral += 1,
        }
    }

    /// Number of individuals counted.
    pub fn total(&self) -> usize {
        self.homozygous_derived + self.heterozygous + self.homozygous_ancestral
    }

    /// Counts in `[AA, Aa, aa]` order.
    pub fn as_array(&self) -> [f64; 3] {
        [
            self.homozygous_derived as f64,
            self.heterozygous as f64,
            self.homozygous_ancestral as f64,
        ]
    }
}

impl Add for GenotypeCounts {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            homozygous_derived: self.homozygous_derived + other.homozygous_derived,
            heterozygous: self.heterozygous + other.heterozygous,
            homozygous_ancestral: self.homozygous_ancestral + other.homozygous_ancestral,
        }
    }
}

/// Classify every individual in `cohort` by its copies of `mutation`.
///
/// The caller is responsible for `mutation` being the only segregating
/// instance of its type; counts for one instance of a multi-instance type
/// say nothing about the type as a whole.
///
/// # Examples
///
/// ```
/// use hwsweep_analysis::analysis::classify;
/// use hwsweep_sim::base::MutationId;
///
/// let counts = classify(&[], MutationId::new(0));
/// assert_eq!(counts.total(), 0);
/// ```
pub fn classify(cohort: &[Individual], mutation: MutationId) -> GenotypeCounts {
    cohort
        .par_iter()
        .fold(GenotypeCounts::default, |mut counts, ind| {
            counts.record(Zygosity::from_copies(ind.copies_carrying(mutation)));
            counts
        })
        .reduce(GenotypeCounts::default, Add::add)
}
