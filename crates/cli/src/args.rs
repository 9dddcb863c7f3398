use clap::Args;
use hwsweep_sim::simulation::Configuration;
use std::path::PathBuf;

use crate::defaults;

/// Simulation parameters. Every flag overrides the corresponding value of
/// the loaded (or default) configuration.
#[derive(Args, Debug, Clone, Default)]
pub struct SimulationArgs {
    /// Population size (diploid individuals)
    #[arg(short = 'n', long)]
    pub population_size: Option<usize>,

    /// Generation ceiling
    #[arg(short = 'g', long)]
    pub generations: Option<usize>,

    /// Genome length in bases
    #[arg(short = 'L', long)]
    pub genome_length: Option<usize>,

    /// Mutation rate (per base per generation)
    #[arg(long)]
    pub mutation_rate: Option<f64>,

    /// Recombination rate (per base interval per generation)
    #[arg(long)]
    pub recombination_rate: Option<f64>,

    /// Probability that a new background mutation is of the tracked type
    #[arg(long)]
    pub tracked_mutation_fraction: Option<f64>,

    /// Selection coefficient of the swept allele
    #[arg(short = 's', long, allow_negative_numbers = true)]
    pub selection_coefficient: Option<f64>,

    /// Dominance coefficient of the swept allele
    #[arg(long, allow_negative_numbers = true)]
    pub dominance: Option<f64>,

    /// Generation at which the swept allele is introduced
    #[arg(long)]
    pub introduction_generation: Option<usize>,

    /// Position of the swept allele (default: middle of the genome)
    #[arg(long)]
    pub position: Option<usize>,

    /// Random seed
    #[arg(long)]
    pub seed: Option<u64>,
}

impl SimulationArgs {
    /// Apply every provided flag to `config`.
    pub fn apply(&self, config: &mut Configuration) {
        let exec = &mut config.execution;
        if let Some(v) = self.population_size {
            exec.population_size = v;
        }
        if let Some(v) = self.generations {
            exec.max_generations = v;
        }
        if let Some(v) = self.seed {
            exec.seed = Some(v);
        }

        let evo = &mut config.evolution;
        if let Some(v) = self.genome_length {
            evo.genome_length = v;
        }
        if let Some(v) = self.mutation_rate {
            evo.mutation_rate = v;
        }
        if let Some(v) = self.recombination_rate {
            evo.recombination_rate = v;
        }
        if let Some(v) = self.tracked_mutation_fraction {
            evo.tracked_mutation_fraction = v;
        }

        let sweep = &mut config.sweep;
        if let Some(v) = self.selection_coefficient {
            sweep.selection_coefficient = v;
        }
        if let Some(v) = self.dominance {
            sweep.dominance = v;
        }
        if let Some(v) = self.introduction_generation {
            sweep.introduction_generation = v;
        }
        if let Some(v) = self.position {
            sweep.position = Some(v);
        }
    }
}

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Output configuration path
    #[arg(short, long, default_value = defaults::CONFIG_FILE)]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,

    #[command(flatten)]
    pub simulation: SimulationArgs,
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Configuration file (defaults are used when omitted)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub simulation: SimulationArgs,

    /// Write every evaluated generation as JSON to this file
    #[arg(long)]
    pub records: Option<PathBuf>,

    /// Only print the final verdict
    #[arg(short, long)]
    pub quiet: bool,

    /// Show progress bar
    #[arg(long)]
    pub progress: bool,
}

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Configuration file to check
    #[arg(short, long, default_value = defaults::CONFIG_FILE)]
    pub config: PathBuf,
}
