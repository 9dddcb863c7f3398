use hwsweep_sim::errors::SimulationError;
use thiserror::Error;

/// Error type for sweep monitoring.
#[derive(Debug, Error)]
pub enum SweepError {
    #[error("Host simulation error: {0}")]
    Host(#[from] SimulationError),
    #[error("Monitoring already started at generation {generation}")]
    AlreadyStarted { generation: usize },
    #[error("Monitor has already resolved the sweep")]
    AlreadyResolved,
    #[error(
        "Introduction generation {introduction} must lie in [1, {max_generations}]"
    )]
    IntroductionOutOfRange {
        introduction: usize,
        max_generations: usize,
    },
    #[error("Host is at generation {current}, past the introduction generation {introduction}")]
    IntroductionPassed { introduction: usize, current: usize },
}
