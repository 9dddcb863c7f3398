//! Genome structures for representing haplotypes and diploid individuals.

mod haplotype;
mod individual;

pub use haplotype::{Haplotype, MutationRef};
pub use individual::Individual;
