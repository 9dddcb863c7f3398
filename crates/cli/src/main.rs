mod args;
mod commands;
pub mod defaults;
mod printing;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use args::{InitArgs, RunArgs, ValidateArgs};
use commands::{init, run, validate};

/// hwsweep: Hardy-Weinberg monitoring of a selective sweep
///
/// Simulates a diploid population, introduces a single beneficial mutation,
/// and tests every generation whether genotype frequencies at the swept site
/// depart from Hardy-Weinberg equilibrium.
#[derive(Parser, Debug)]
#[command(name = "hwsweep")]
#[command(author, version, about = "Tracks Hardy-Weinberg deviation during a selective sweep", long_about = None)]
struct Cli {
    /// Number of threads to use for parallel processing
    ///
    /// If not specified, defaults to the number of logical CPUs.
    #[arg(short = 't', long, global = true)]
    threads: Option<usize>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write a sweep configuration file.
    ///
    /// Sets up the parameters for a new experiment (population size, sweep
    /// strength, introduction generation, etc.) but does not run it.
    Init(Box<InitArgs>),

    /// Run a sweep and print the per-generation Hardy-Weinberg report.
    Run(Box<RunArgs>),

    /// Check that a configuration file loads and is valid.
    Validate(ValidateArgs),
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()?;
    }

    match cli.command {
        Commands::Init(args) => init::init_config(&args)?,
        Commands::Run(args) => run::run_sweep(&args)?,
        Commands::Validate(args) => validate::validate_config(&args)?,
    }

    Ok(())
}
