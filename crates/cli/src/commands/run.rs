use anyhow::{Context, Result};
use hwsweep_analysis::{GenerationRecord, MonitorEvent, SweepMonitor, SweepSettings};
use hwsweep_sim::simulation::{Configuration, Simulation};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::BufWriter;

use crate::args::RunArgs;
use crate::printing::print_parameters;

pub fn run_sweep(args: &RunArgs) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => Configuration::from_json_file(path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => Configuration::default(),
    };
    args.simulation.apply(&mut config);
    config.validate().context("Invalid configuration")?;

    if !args.quiet {
        println!("🧬 hwsweep - Running Sweep");
        println!("============================================");
        print_parameters(&config);
    }

    let settings = SweepSettings::from_config(&config);
    let mut sim = Simulation::new(config).context("Failed to create simulation")?;
    let mut monitor = SweepMonitor::new(settings.tracked_type);

    let pb = if args.progress {
        let pb = ProgressBar::new(settings.max_generations as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {per_sec}",
                )
                .context("Invalid progress bar template")?
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let quiet = args.quiet;
    let keep_records = args.records.is_some();
    let mut records: Vec<GenerationRecord> = Vec::new();

    let mut observer = |generation: usize, event: &MonitorEvent| {
        let text = match event {
            MonitorEvent::Evaluated(record) => {
                if keep_records {
                    records.push(record.clone());
                }
                (!quiet).then(|| record.to_string())
            }
            MonitorEvent::Skipped { instances, .. } => (!quiet).then(|| {
                format!(
                    "Generation {generation}: skipped ({instances} segregating instances of {})",
                    settings.tracked_type
                )
            }),
            MonitorEvent::Resolved(_) | MonitorEvent::Idle => None,
        };

        match (&pb, text) {
            (Some(pb), Some(text)) => pb.suspend(|| println!("{text}")),
            (None, Some(text)) => println!("{text}"),
            _ => {}
        }
        if let Some(pb) = &pb {
            pb.set_position(generation as u64);
        }
    };

    let run = hwsweep_analysis::run_sweep(&mut sim, &mut monitor, &settings, &mut observer)
        .context("Sweep failed")?;

    if let Some(pb) = &pb {
        pb.finish_and_clear();
    }

    match &run.resolution {
        Some(resolution) => println!("{resolution}"),
        None => println!(
            "UNRESOLVED after {} generations ({} evaluated)",
            run.final_generation,
            monitor.evaluated()
        ),
    }

    if let Some(path) = &args.records {
        let file = File::create(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), &records)
            .with_context(|| format!("Failed to write records to {}", path.display()))?;
        if !quiet {
            println!("✓ {} records written: {}", records.len(), path.display());
        }
    }

    Ok(())
}
