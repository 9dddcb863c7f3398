//! Read-only and stepping interfaces that per-generation monitors use to
//! talk to a host simulation.

use crate::base::{MutationId, MutationTypeId};
use crate::errors::SimulationError;
use crate::genome::Individual;

/// Read-only view of the host simulation state after a generation.
pub trait SimulationView {
    /// Current generation number (1-based once the first step has run).
    fn generation(&self) -> usize;

    /// The current population of diploid individuals.
    fn individuals(&self) -> &[Individual];

    /// Combined frequency of all segregating instances of `mutation_type`
    /// among the 2N genome copies, or `None` when there are none.
    fn frequency_of(&self, mutation_type: MutationTypeId) -> Option<f64>;

    /// Ids of segregating instances of `mutation_type`, ascending.
    fn segregating_of_type(&self, mutation_type: MutationTypeId) -> Vec<MutationId>;

    /// Number of fixed substitutions of `mutation_type` recorded so far.
    fn substitutions_of_type(&self, mutation_type: MutationTypeId) -> usize;
}

/// A simulation that can be advanced one generation at a time and that
/// accepts a one-time introduction of a new mutation.
pub trait SweepHost: SimulationView {
    /// Advance the population by one generation.
    fn step(&mut self) -> Result<(), SimulationError>;

    /// Add a single new copy of a mutation of `mutation_type` at `position`
    /// to one uniformly chosen genome copy.
    fn introduce_mutation(
        &mut self,
        mutation_type: MutationTypeId,
        position: usize,
    ) -> Result<MutationId, SimulationError>;
}
