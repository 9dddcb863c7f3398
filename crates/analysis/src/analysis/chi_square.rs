//! Chi-square goodness-of-fit test against Hardy-Weinberg expectations
//!
//! The statistic is compared with the fixed critical value for one degree
//! of freedom at alpha = 0.05 (three genotype classes, minus one, minus the
//! estimated allele frequency).
//!
//! A zero expected count is not special-cased. With a zero expectation the
//! class contributes `x / 0`, so the statistic becomes infinite (significant)
//! or NaN (not significant, since NaN never compares `>=`). Small expected
//! counts also make a single individual contribute disproportionately; this
//! is a known limitation of the test at low allele frequencies.

use crate::analysis::{ExpectedCounts, GenotypeCounts};

/// Critical value of the chi-square distribution, df = 1, alpha = 0.05.
pub const CRITICAL_VALUE_DF1: f64 = 3.84;

/// Outcome of one chi-square test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChiSquareResult {
    pub statistic: f64,
    pub significant: bool,
}

impl ChiSquareResult {
    /// Verdict string used in reports.
    pub fn verdict(&self) -> &'static str {
        if self.significant {
            "significant"
        } else {
            "not significant"
        }
    }
}

/// Whether `statistic` reaches the df = 1 critical value.
#[inline]
pub fn is_significant(statistic: f64) -> bool {
    statistic >= CRITICAL_VALUE_DF1
}

/// Compute `Σ (observed − expected)² / expected` over the three classes.
///
/// # Examples
///
/// ```
/// use hwsweep_analysis::analysis::{chi_square, expected_counts, GenotypeCounts};
///
/// let expected = expected_counts(0.5, 1000);
/// let result = chi_square(&expected, &GenotypeCounts::new(300, 400, 300));
/// assert!((result.statistic - 40.0).abs() < 1e-9);
/// assert!(result.significant);
/// ```
pub fn chi_square(expected: &ExpectedCounts, observed: &GenotypeCounts) -> ChiSquareResult {
    let statistic: f64 = expected
        .as_array()
        .iter()
        .zip(observed.as_array())
        .map(|(&e, o)| (o - e).powi(2) / e)
        .sum();

    ChiSquareResult {
        statistic,
        significant: is_significant(statistic),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::expected_counts;

    #[test]
    fn test_small_deviation_not_significant() {
        let expected = expected_counts(0.5, 1000);
        let result = chi_square(&expected, &GenotypeCounts::new(260, 480, 260));

        assert!((result.statistic - 1.6).abs() < 1e-9);
        assert!(!result.significant);
        assert_eq!(result.verdict(), "not significant");
    }

    #[test]
    fn test_large_deviation_significant() {
        let expected = expected_counts(0.5, 1000);
        let result = chi_square(&expected, &GenotypeCounts::new(300, 400, 300));

        assert!((result.statistic - 40.0).abs() < 1e-9);
        assert!(result.significant);
        assert_eq!(result.verdict(), "significant");
    }

    #[test]
    fn test_perfect_fit_is_zero() {
        let expected = expected_counts(0.5, 4);
        let result = chi_square(&expected, &GenotypeCounts::new(1, 2, 1));
        assert_eq!(result.statistic, 0.0);
    }

    #[test]
    fn test_statistic_non_negative_for_positive_expectations() {
        for i in 1..100 {
            let p = i as f64 / 100.0;
            let expected = expected_counts(p, 50);
            for het in 0..=50 {
                let observed = GenotypeCounts::new(0, het, 50 - het);
                assert!(chi_square(&expected, &observed).statistic >= 0.0);
            }
        }
    }

    #[test]
    fn test_critical_value_boundary() {
        assert!(is_significant(3.84));
        assert!(!is_significant(3.839_999));
        assert!(is_significant(f64::INFINITY));
        assert!(!is_significant(f64::NAN));
    }

    #[test]
    fn test_zero_expectation_with_observation_is_infinite() {
        // p = 0 but both derived classes observed
        let expected = expected_counts(0.0, 10);
        let result = chi_square(&expected, &GenotypeCounts::new(1, 1, 8));

        assert!(result.statistic.is_infinite());
        assert!(result.significant);
    }

    #[test]
    fn test_zero_expectation_without_observation_is_nan() {
        // 0 / 0 in the empty classes
        let expected = expected_counts(1.0, 10);
        let result = chi_square(&expected, &GenotypeCounts::new(10, 0, 0));

        assert!(result.statistic.is_nan());
        assert!(!result.significant);
    }
}
