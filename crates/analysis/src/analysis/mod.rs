//! Hardy-Weinberg analysis tools
//!
//! This module provides the per-generation building blocks:
//! - Genotype counting for a single mutation instance
//! - Expected genotype counts under Hardy-Weinberg equilibrium
//! - One-degree-of-freedom chi-square goodness-of-fit test

pub mod chi_square;
pub mod genotype;
pub mod hardy_weinberg;

// Re-export commonly used functions
pub use chi_square::{chi_square, is_significant, ChiSquareResult, CRITICAL_VALUE_DF1};
pub use genotype::{classify, GenotypeCounts, Zygosity};
pub use hardy_weinberg::{expected_counts, ExpectedCounts};
