//! Expected genotype counts under Hardy-Weinberg equilibrium
//!
//! # Formula
//!
//! For a derived allele at frequency $p$ (and $q = 1 - p$) in a cohort of
//! $n$ diploid individuals:
//!
//! $$E[AA] = p^2 n, \quad E[Aa] = 2pq\,n, \quad E[aa] = q^2 n$$
//!
//! Expected counts are real-valued and are never rounded.

use serde::Serialize;

/// Expected genotype counts `[AA, Aa, aa]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExpectedCounts {
    pub homozygous_derived: f64,
    pub heterozygous: f64,
    pub homozygous_ancestral: f64,
}

impl ExpectedCounts {
    /// Sum of the three classes; equals `n` up to rounding.
    pub fn total(&self) -> f64 {
        self.homozygous_derived + self.heterozygous + self.homozygous_ancestral
    }

    /// Counts in `[AA, Aa, aa]` order.
    pub fn as_array(&self) -> [f64; 3] {
        [
            self.homozygous_derived,
            self.heterozygous,
            self.homozygous_ancestral,
        ]
    }
}

/// Expected counts for derived-allele frequency `p` in a cohort of `n`.
///
/// `p` must come from a valid frequency query, i.e. lie in `[0, 1]`.
///
/// # Examples
///
/// ```
/// use hwsweep_analysis::analysis::expected_counts;
///
/// let e = expected_counts(0.5, 1000);
/// assert_eq!(e.as_array(), [250.0, 500.0, 250.0]);
/// ```
pub fn expected_counts(p: f64, n: usize) -> ExpectedCounts {
    let q = 1.0 - p;
    let n = n as f64;
    ExpectedCounts {
        homozygous_derived: p * p * n,
        heterozygous: 2.0 * p * q * n,
        homozygous_ancestral: q * q * n,
    }
}
