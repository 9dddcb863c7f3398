//! The sweep monitor state machine.
//!
//! A [`SweepMonitor`] is created in [`MonitorState::WaitingToStart`]. Once
//! the host has introduced the tracked allele, [`SweepMonitor::begin`] moves
//! it to [`MonitorState::Monitoring`], where every call to
//! [`SweepMonitor::on_generation`] runs one Hardy-Weinberg evaluation. When
//! no instance of the tracked type is left segregating the monitor resolves
//! the sweep as fixed or lost and summarizes its statistic history.

use crate::analysis::{
    chi_square, classify, expected_counts, is_significant, ChiSquareResult, ExpectedCounts,
    GenotypeCounts,
};
use crate::errors::SweepError;
use hwsweep_sim::base::{MutationId, MutationTypeId};
use hwsweep_sim::simulation::SimulationView;
use serde::Serialize;

/// Lifecycle of a monitoring session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonitorState {
    /// The tracked allele has not been introduced yet
    WaitingToStart,
    /// Evaluating once per generation while the allele segregates
    Monitoring,
    /// The allele fixed or was lost; further generations are ignored
    Resolved,
}

/// Everything computed for one evaluated generation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationRecord {
    pub generation: usize,
    /// The single segregating instance of the tracked type
    pub mutation: MutationId,
    /// Derived-allele frequency
    pub p: f64,
    /// `1 - p`
    pub q: f64,
    pub expected: ExpectedCounts,
    pub observed: GenotypeCounts,
    pub statistic: f64,
    pub significant: bool,
}

impl GenerationRecord {
    /// The chi-square outcome stored in this record.
    pub fn chi_square_result(&self) -> ChiSquareResult {
        ChiSquareResult {
            statistic: self.statistic,
            significant: self.significant,
        }
    }
}

/// How the sweep ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SweepOutcome {
    Fixed,
    Lost,
}

/// Fraction of evaluated generations flagged significant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SweepSummary {
    pub significant: usize,
    pub total: usize,
}

impl SweepSummary {
    /// Percentage of significant generations. `total` is never zero.
    pub fn percent(&self) -> f64 {
        100.0 * self.significant as f64 / self.total as f64
    }
}

/// Final verdict emitted when the sweep resolves.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepResolution {
    pub generation: usize,
    pub outcome: SweepOutcome,
    /// `None` when the sweep resolved before any generation was evaluated
    pub summary: Option<SweepSummary>,
}

/// What a single call to [`SweepMonitor::on_generation`] did.
#[derive(Debug, Clone, PartialEq)]
pub enum MonitorEvent {
    /// Not monitoring (before the start or after resolution)
    Idle,
    /// One Hardy-Weinberg evaluation was run
    Evaluated(GenerationRecord),
    /// Several instances of the tracked type were segregating; no test run
    Skipped { generation: usize, instances: usize },
    /// No instance of the tracked type is left
    Resolved(SweepResolution),
}

/// Ordered chi-square statistics, one per evaluated generation.
#[derive(Debug, Clone, Default)]
struct StatisticHistory(Vec<f64>);

impl StatisticHistory {
    fn push(&mut self, statistic: f64) {
        self.0.push(statistic);
    }

    fn len(&self) -> usize {
        self.0.len()
    }

    fn summarize(self) -> Option<SweepSummary> {
        if self.0.is_empty() {
            return None;
        }
        Some(SweepSummary {
            significant: self.0.iter().filter(|&&h| is_significant(h)).count(),
            total: self.0.len(),
        })
    }
}

/// Per-generation Hardy-Weinberg monitor for one tracked mutation type.
#[derive(Debug, Clone)]
pub struct SweepMonitor {
    tracked_type: MutationTypeId,
    state: MonitorState,
    started_at: Option<usize>,
    /// Tracked-type substitutions already recorded when monitoring began
    substitution_baseline: usize,
    history: Option<StatisticHistory>,
}

impl SweepMonitor {
    pub fn new(tracked_type: MutationTypeId) -> Self {
        Self {
            tracked_type,
            state: MonitorState::WaitingToStart,
            started_at: None,
            substitution_baseline: 0,
            history: None,
        }
    }

    pub fn tracked_type(&self) -> MutationTypeId {
        self.tracked_type
    }

    pub fn state(&self) -> MonitorState {
        self.state
    }

    /// Generation at which monitoring started.
    pub fn started_at(&self) -> Option<usize> {
        self.started_at
    }

    /// Number of generations evaluated so far in this session.
    pub fn evaluated(&self) -> usize {
        self.history.as_ref().map_or(0, StatisticHistory::len)
    }

    /// Enter monitoring after the tracked allele was introduced.
    ///
    /// Substitutions of the tracked type that `view` already holds predate
    /// the introduced allele and never count towards fixation.
    pub fn begin<V: SimulationView + ?Sized>(
        &mut self,
        generation: usize,
        view: &V,
    ) -> Result<(), SweepError> {
        match self.state {
            MonitorState::WaitingToStart => {
                self.state = MonitorState::Monitoring;
                self.started_at = Some(generation);
                self.substitution_baseline = view.substitutions_of_type(self.tracked_type);
                self.history = Some(StatisticHistory::default());
                Ok(())
            }
            MonitorState::Monitoring => Err(SweepError::AlreadyStarted {
                generation: self.started_at.unwrap_or(generation),
            }),
            MonitorState::Resolved => Err(SweepError::AlreadyResolved),
        }
    }

    /// Run one generation tick against the host's current state.
    pub fn on_generation<V: SimulationView + ?Sized>(
        &mut self,
        generation: usize,
        view: &V,
    ) -> MonitorEvent {
        if self.state != MonitorState::Monitoring {
            return MonitorEvent::Idle;
        }

        let instances = view.segregating_of_type(self.tracked_type);
        match (instances.as_slice(), view.frequency_of(self.tracked_type)) {
            ([], _) | (_, None) => MonitorEvent::Resolved(self.resolve(generation, view)),
            (&[mutation], Some(p)) => {
                MonitorEvent::Evaluated(self.evaluate(generation, mutation, p, view))
            }
            (many, Some(_)) => {
                tracing::warn!(
                    generation,
                    instances = many.len(),
                    mutation_type = %self.tracked_type,
                    "multiple segregating instances of tracked type, skipping evaluation"
                );
                MonitorEvent::Skipped {
                    generation,
                    instances: many.len(),
                }
            }
        }
    }

    fn evaluate<V: SimulationView + ?Sized>(
        &mut self,
        generation: usize,
        mutation: MutationId,
        p: f64,
        view: &V,
    ) -> GenerationRecord {
        let cohort = view.individuals();
        let observed = classify(cohort, mutation);
        let expected = expected_counts(p, cohort.len());
        let result = chi_square(&expected, &observed);

        if let Some(history) = self.history.as_mut() {
            history.push(result.statistic);
        }

        tracing::debug!(
            generation,
            p,
            statistic = result.statistic,
            significant = result.significant,
            "evaluated generation"
        );

        GenerationRecord {
            generation,
            mutation,
            p,
            q: 1.0 - p,
            expected,
            observed,
            statistic: result.statistic,
            significant: result.significant,
        }
    }

    fn resolve<V: SimulationView + ?Sized>(
        &mut self,
        generation: usize,
        view: &V,
    ) -> SweepResolution {
        let substitutions = view.substitutions_of_type(self.tracked_type);
        let outcome = if substitutions > self.substitution_baseline {
            SweepOutcome::Fixed
        } else {
            SweepOutcome::Lost
        };
        let summary = self.history.take().and_then(StatisticHistory::summarize);
        self.state = MonitorState::Resolved;

        tracing::info!(
            generation,
            ?outcome,
            evaluated = summary.map_or(0, |s| s.total),
            "sweep resolved"
        );

        SweepResolution {
            generation,
            outcome,
            summary,
        }
    }
}
