//! Plain-text report stream for the operator.
//!
//! ```text
//! Generation 1000: p = 0.001, q = 0.999
//!   Expected: AA = 0.0005, Aa = 0.999, aa = 499.0005
//!   Observed: AA = 0, Aa = 1, aa = 499
//!   Chi-square = 0.000501 (not significant)
//! FIXED
//! 23 generations significant, of 500 (4.6%)
//! ```

use crate::sweep::{GenerationRecord, SweepOutcome, SweepResolution, SweepSummary};
use std::fmt;

/// Render a real value with at most six decimals and no trailing zeros.
/// Non-finite values print as `inf` / `NaN`.
pub fn format_real(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let text = format!("{value:.6}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    match text {
        "-0" | "" => "0".to_string(),
        _ => text.to_string(),
    }
}

impl fmt::Display for GenerationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let e = &self.expected;
        let o = &self.observed;
        writeln!(
            f,
            "Generation {}: p = {}, q = {}",
            self.generation,
            format_real(self.p),
            format_real(self.q)
        )?;
        writeln!(
            f,
            "  Expected: AA = {}, Aa = {}, aa = {}",
            format_real(e.homozygous_derived),
            format_real(e.heterozygous),
            format_real(e.homozygous_ancestral)
        )?;
        writeln!(
            f,
            "  Observed: AA = {}, Aa = {}, aa = {}",
            o.homozygous_derived, o.heterozygous, o.homozygous_ancestral
        )?;
        write!(
            f,
            "  Chi-square = {} ({})",
            format_real(self.statistic),
            self.chi_square_result().verdict()
        )
    }
}

impl fmt::Display for SweepOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SweepOutcome::Fixed => write!(f, "FIXED"),
            SweepOutcome::Lost => write!(f, "LOST"),
        }
    }
}

impl fmt::Display for SweepSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} generations significant, of {} ({}%)",
            self.significant,
            self.total,
            format_real(self.percent())
        )
    }
}

impl fmt::Display for SweepResolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.outcome)?;
        if let Some(summary) = &self.summary {
            write!(f, "\n{summary}")?;
        }
        Ok(())
    }
}
