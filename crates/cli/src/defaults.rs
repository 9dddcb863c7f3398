//! Shared default values for the command line.
//! Simulation defaults come from the library so that `init`, `run` and the
//! builder never disagree.

pub use hwsweep_sim::simulation::defaults::*;

pub const CONFIG_FILE: &str = "sweep.json";
