//! Sweep monitoring
//!
//! - [`monitor`]: the per-generation state machine
//! - [`report`]: text rendering of records and the final verdict
//! - [`driver`]: the loop connecting a host simulation to a monitor

pub mod driver;
pub mod monitor;
pub mod report;

pub use driver::{run_sweep, SweepObserver, SweepRun, SweepSettings};
pub use monitor::{
    GenerationRecord, MonitorEvent, MonitorState, SweepMonitor, SweepOutcome, SweepResolution,
    SweepSummary,
};
pub use report::format_real;
