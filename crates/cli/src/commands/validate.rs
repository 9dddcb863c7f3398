use anyhow::{Context, Result};
use hwsweep_sim::simulation::Configuration;

use crate::args::ValidateArgs;

pub fn validate_config(args: &ValidateArgs) -> Result<()> {
    let path = &args.config;
    println!("🔍 Validating configuration: {}", path.display());

    if !path.exists() {
        anyhow::bail!("Configuration file does not exist");
    }

    let config = Configuration::from_json_file(path)
        .with_context(|| format!("Failed to load {}", path.display()))?;
    println!("✓ Parsed: OK");

    match config.validate() {
        Ok(()) => {
            println!("✓ Parameters: OK");
            println!("\n✓ Configuration is valid");
            Ok(())
        }
        Err(e) => {
            println!("✗ Parameters: FAILED - {e}");
            Err(e).context("Configuration is invalid")
        }
    }
}
