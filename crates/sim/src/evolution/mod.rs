//! Evolution module providing mutation, recombination, and selection.
//!
//! - **Mutation**: Poisson-distributed new mutations at uniform positions
//! - **Recombination**: Poisson-distributed crossovers between parental copies
//! - **Selection**: Multiplicative fitness from carried mutations

pub mod mutation;
pub mod recombination;
pub mod selection;

pub use mutation::MutationModel;
pub use recombination::RecombinationModel;
pub use selection::{IndividualFitness, MultiplicativeFitness, MutationLookup};
