//! Commonly used imports for convenience.
//!
//! # Example
//!
//! ```
//! use hwsweep_sim::prelude::*;
//!
//! let sim = SimulationBuilder::new()
//!     .population_size(10)
//!     .genome_length(1_000)
//!     .seed(1)
//!     .build()
//!     .unwrap();
//! assert_eq!(sim.individuals().len(), 10);
//! ```

pub use crate::errors;
pub use crate::base::{FitnessValue, Mutation, MutationId, MutationType, MutationTypeId, Substitution};
pub use crate::genome::{Haplotype, Individual, MutationRef};
pub use crate::simulation::{
    Configuration, Population, Simulation, SimulationBuilder, SimulationView, SweepHost,
};
