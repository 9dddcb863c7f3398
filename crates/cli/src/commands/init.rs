use anyhow::{Context, Result};
use hwsweep_sim::simulation::Configuration;

use crate::args::InitArgs;
use crate::printing::print_parameters;

pub fn init_config(args: &InitArgs) -> Result<()> {
    let output = &args.output;

    println!("🧬 hwsweep - Hardy-Weinberg Sweep Monitor");
    println!("============================================\n");

    if output.exists() && !args.force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            output.display()
        );
    }

    let mut config = Configuration::default();
    args.simulation.apply(&mut config);
    config.validate().context("Invalid configuration")?;

    println!("Configuration:");
    print_parameters(&config);

    config
        .to_json_file(output)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!("✓ Configuration written: {}", output.display());
    println!("\nSweep initialized successfully!");
    println!("  Population size: {}", config.execution.population_size);
    println!("  Generations: {}", config.execution.max_generations);
    println!(
        "\n💡 Use 'hwsweep run -c {}' to start the sweep",
        output.display()
    );

    Ok(())
}
