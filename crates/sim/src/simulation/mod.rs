//! Simulation engine and population management.
//!
//! - `Simulation`: the engine that runs generations and orchestrates
//!   selection, recombination and mutation.
//! - `Population`: in-memory container for individuals.
//! - `MutationRegistry`: segregating mutations and fixed substitutions.
//! - `SimulationBuilder`: fluent builder with sensible defaults and validation.
//! - `SimulationView` / `SweepHost`: the interfaces a per-generation monitor
//!   uses to read and drive a host simulation.

pub mod builder;
pub mod configs;
pub mod engine;
pub mod population;
pub mod registry;
pub mod view;

pub use builder::SimulationBuilder;
pub use configs::{defaults, Configuration, EvolutionConfig, ExecutionConfig, SweepConfig};
pub use engine::Simulation;
pub use population::Population;
pub use registry::{MutationRegistry, TallyResult};
pub use view::{SimulationView, SweepHost};
