//! # Analysis Crate
//!
//! Per-generation Hardy-Weinberg deviation monitoring for a single
//! introduced selective sweep.
//!
//! - [`analysis`]: the pure building blocks (genotype counting, expected
//!   Hardy-Weinberg counts and the chi-square goodness-of-fit test).
//! - [`sweep`]: the [`SweepMonitor`] state machine, its text report, and the
//!   loop that drives a host simulation generation by generation.

pub mod analysis;
pub mod errors;
pub mod sweep;

pub use errors::SweepError;
pub use sweep::{
    run_sweep, GenerationRecord, MonitorEvent, MonitorState, SweepMonitor, SweepOutcome,
    SweepObserver, SweepResolution, SweepRun, SweepSettings, SweepSummary,
};
