//! Base types for mutation bookkeeping and fitness.
//!
//! This module provides the foundational value types of the host
//! simulation: mutation identities and types, fixed substitutions, and the
//! non-negative relative fitness newtype.

pub mod fitness;
mod mutation;

pub use fitness::FitnessValue;
pub use mutation::{Mutation, MutationId, MutationType, MutationTypeId, Substitution};
