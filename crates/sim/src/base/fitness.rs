use std::fmt;
use std::iter::Sum;
use std::ops::{Mul, MulAssign};

use serde::{Deserialize, Serialize};

/// A relative fitness value constrained to `[0.0, ∞)`.
///
/// `1.0` is neutral. Values above one are beneficial, values below one are
/// deleterious and `0.0` is lethal. Effects of independent mutations combine
/// multiplicatively.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct FitnessValue(f64);

impl FitnessValue {
    /// Neutral fitness (no effect on reproductive success).
    pub const NEUTRAL_FITNESS: Self = Self(1.0);

    /// Lethal fitness (never chosen as a parent).
    pub const LETHAL_FITNESS: Self = Self(0.0);

    /// Creates a new FitnessValue, clamping negative input to 0.0.
    pub fn new(value: f64) -> Self {
        Self(value.max(0.0))
    }

    /// Returns the inner f64 value.
    pub fn get(self) -> f64 {
        self.0
    }

    /// Returns `true` if this value is exactly lethal.
    pub fn is_lethal(self) -> bool {
        self.0 == 0.0
    }
}

impl From<FitnessValue> for f64 {
    fn from(fitness: FitnessValue) -> Self {
        fitness.0
    }
}

impl From<f64> for FitnessValue {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl Default for FitnessValue {
    fn default() -> Self {
        Self::NEUTRAL_FITNESS
    }
}

impl fmt::Display for FitnessValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Mul for FitnessValue {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        FitnessValue::new(self.0 * rhs.0)
    }
}

impl MulAssign for FitnessValue {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Sum for FitnessValue {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        FitnessValue::new(iter.map(f64::from).sum())
    }
}
