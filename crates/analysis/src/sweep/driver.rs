//! The generation loop that drives a host simulation and a monitor.

use crate::errors::SweepError;
use crate::sweep::{MonitorEvent, SweepMonitor, SweepResolution};
use hwsweep_sim::base::{MutationId, MutationTypeId};
use hwsweep_sim::simulation::{Configuration, SweepHost};

/// Receives every monitor event as the sweep runs.
pub trait SweepObserver {
    fn on_event(&mut self, generation: usize, event: &MonitorEvent);
}

impl<F: FnMut(usize, &MonitorEvent)> SweepObserver for F {
    fn on_event(&mut self, generation: usize, event: &MonitorEvent) {
        self(generation, event)
    }
}

/// When and where the tracked allele is introduced, and when to give up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepSettings {
    pub tracked_type: MutationTypeId,
    pub introduction_generation: usize,
    pub max_generations: usize,
    pub position: usize,
}

impl SweepSettings {
    pub fn from_config(config: &Configuration) -> Self {
        Self {
            tracked_type: config.sweep.mutation_type,
            introduction_generation: config.sweep.introduction_generation,
            max_generations: config.execution.max_generations,
            position: config.sweep_position(),
        }
    }
}

/// Result of [`run_sweep`].
#[derive(Debug, Clone, PartialEq)]
pub struct SweepRun {
    /// Host generation when the loop stopped
    pub final_generation: usize,
    /// The introduced instance, if the introduction generation was reached
    pub introduced: Option<MutationId>,
    /// `None` when the generation ceiling was hit first
    pub resolution: Option<SweepResolution>,
}

impl SweepRun {
    pub fn is_resolved(&self) -> bool {
        self.resolution.is_some()
    }
}

/// Step `host` until the sweep resolves or `max_generations` is reached.
///
/// The tracked allele is introduced right after the host reaches
/// `introduction_generation`, and that same generation is the first one
/// evaluated.
pub fn run_sweep<H, O>(
    host: &mut H,
    monitor: &mut SweepMonitor,
    settings: &SweepSettings,
    observer: &mut O,
) -> Result<SweepRun, SweepError>
where
    H: SweepHost + ?Sized,
    O: SweepObserver + ?Sized,
{
    let introduction = settings.introduction_generation;
    if introduction == 0 || introduction > settings.max_generations {
        return Err(SweepError::IntroductionOutOfRange {
            introduction,
            max_generations: settings.max_generations,
        });
    }
    if host.generation() >= introduction {
        return Err(SweepError::IntroductionPassed {
            introduction,
            current: host.generation(),
        });
    }

    let mut introduced = None;
    let mut resolution = None;

    while host.generation() < settings.max_generations {
        host.step()?;
        let generation = host.generation();

        if generation == introduction {
            let id = host.introduce_mutation(settings.tracked_type, settings.position)?;
            monitor.begin(generation, &*host)?;
            introduced = Some(id);
        }

        let event = monitor.on_generation(generation, &*host);
        observer.on_event(generation, &event);

        if let MonitorEvent::Resolved(r) = event {
            resolution = Some(r);
            break;
        }
    }

    if resolution.is_none() {
        tracing::warn!(
            max_generations = settings.max_generations,
            "generation ceiling reached before the sweep resolved"
        );
    }

    Ok(SweepRun {
        final_generation: host.generation(),
        introduced,
        resolution,
    })
}
