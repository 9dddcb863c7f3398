//! # Simulation Crate
//!
//! The `sim` crate provides a small forward-time host simulation for a
//! diploid Wright-Fisher population. It tracks individual mutation
//! instances through reproduction, applies multiplicative selection, records
//! fixed mutations as substitutions, and exposes a read-only view of its
//! state so that per-generation monitors can be driven against it.

pub mod base;
pub mod errors;
pub mod evolution;
pub mod genome;
pub mod simulation;
pub mod prelude;

pub use base::{FitnessValue, Mutation, MutationId, MutationType, MutationTypeId, Substitution};
