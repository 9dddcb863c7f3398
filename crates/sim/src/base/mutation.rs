use std::fmt;

use serde::{Deserialize, Serialize};

use crate::base::FitnessValue;
use crate::errors::FitnessError;

/// Identity of a single mutation instance.
///
/// Every mutation event gets a fresh id, so two independent mutations of the
/// same type at the same position are still distinct instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MutationId(u64);

impl MutationId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[inline]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for MutationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Label of a mutation type, displayed as `m<N>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MutationTypeId(u32);

impl MutationTypeId {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for MutationTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "m{}", self.0)
    }
}

/// A class of mutations sharing a fixed selection coefficient and dominance.
///
/// Under multiplicative fitness a carrier's fitness is scaled by `1 + s` when
/// homozygous and by `1 + h·s` when heterozygous.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MutationType {
    pub id: MutationTypeId,
    pub selection_coefficient: f64,
    pub dominance: f64,
}

impl MutationType {
    /// Create a mutation type.
    ///
    /// # Errors
    /// Returns an error if `selection_coefficient < -1.0` (negative fitness)
    /// or if either parameter is not finite.
    pub fn new(
        id: MutationTypeId,
        selection_coefficient: f64,
        dominance: f64,
    ) -> Result<Self, FitnessError> {
        if !selection_coefficient.is_finite() || selection_coefficient < -1.0 {
            return Err(FitnessError::InvalidParameter(format!(
                "selection coefficient for {id} must be finite and >= -1.0, got {selection_coefficient}"
            )));
        }
        if !dominance.is_finite() {
            return Err(FitnessError::InvalidParameter(format!(
                "dominance for {id} must be finite, got {dominance}"
            )));
        }
        Ok(Self {
            id,
            selection_coefficient,
            dominance,
        })
    }

    /// A neutral mutation type (`s = 0`).
    pub fn neutral(id: MutationTypeId) -> Self {
        Self {
            id,
            selection_coefficient: 0.0,
            dominance: 0.5,
        }
    }

    #[inline]
    pub fn is_neutral(&self) -> bool {
        self.selection_coefficient == 0.0
    }
}

/// A single mutation instance carried by one or more haplotypes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mutation {
    pub id: MutationId,
    pub mutation_type: MutationTypeId,
    pub position: usize,
    pub selection_coefficient: f64,
    pub dominance: f64,
    /// Generation in which the mutation arose
    pub origin_generation: usize,
}

impl Mutation {
    pub fn new(
        id: MutationId,
        mutation_type: &MutationType,
        position: usize,
        origin_generation: usize,
    ) -> Self {
        Self {
            id,
            mutation_type: mutation_type.id,
            position,
            selection_coefficient: mutation_type.selection_coefficient,
            dominance: mutation_type.dominance,
            origin_generation,
        }
    }

    #[inline]
    pub fn is_neutral(&self) -> bool {
        self.selection_coefficient == 0.0
    }

    /// Fitness factor contributed by carrying `copies` (1 or 2) of this mutation.
    pub fn fitness_effect(&self, copies: u8) -> FitnessValue {
        match copies {
            0 => FitnessValue::NEUTRAL_FITNESS,
            1 => FitnessValue::new(1.0 + self.dominance * self.selection_coefficient),
            _ => FitnessValue::new(1.0 + self.selection_coefficient),
        }
    }
}

/// A mutation that reached fixation and was removed from every haplotype.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Substitution {
    pub mutation: Mutation,
    pub fixation_generation: usize,
}

impl Substitution {
    #[inline]
    pub fn mutation_type(&self) -> MutationTypeId {
        self.mutation.mutation_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mutation_type_display() {
        assert_eq!(MutationTypeId::new(2).to_string(), "m2");
    }

    #[test]
    fn test_mutation_type_rejects_negative_fitness() {
        assert!(MutationType::new(MutationTypeId::new(2), -1.5, 0.5).is_err());
        assert!(MutationType::new(MutationTypeId::new(2), f64::NAN, 0.5).is_err());
        assert!(MutationType::new(MutationTypeId::new(2), -1.0, 0.5).is_ok());
    }

    #[test]
    fn test_fitness_effect_follows_dominance() {
        let ty = MutationType::new(MutationTypeId::new(2), 0.5, 0.5).unwrap();
        let m = Mutation::new(MutationId::new(7), &ty, 100, 10);

        assert_eq!(m.fitness_effect(0).get(), 1.0);
        assert_eq!(m.fitness_effect(1).get(), 1.25);
        assert_eq!(m.fitness_effect(2).get(), 1.5);
    }

    #[test]
    fn test_neutral_type() {
        let ty = MutationType::neutral(MutationTypeId::new(1));
        assert!(ty.is_neutral());
        let m = Mutation::new(MutationId::new(1), &ty, 0, 0);
        assert!(m.is_neutral());
        assert_eq!(m.fitness_effect(2), FitnessValue::NEUTRAL_FITNESS);
    }
}
