use hwsweep_analysis::sweep::format_real;
use hwsweep_sim::simulation::Configuration;

pub fn print_parameters(config: &Configuration) {
    let exec = &config.execution;
    let evo = &config.evolution;
    let sweep = &config.sweep;

    println!("\n📋 Simulation Configuration");
    println!(
        "  • Population Size: {} [-n, --population-size]",
        exec.population_size
    );
    println!(
        "  • Generation Ceiling: {} [-g, --generations]",
        exec.max_generations
    );
    if let Some(seed) = exec.seed {
        println!("  • Random Seed: {seed} [--seed]");
    } else {
        println!("  • Random Seed: Random [--seed]");
    }

    println!("\n🧬 Genome");
    println!("  • Genome Length: {} bp [-L, --genome-length]", evo.genome_length);
    println!("  • Ploidy: Diploid (2 genome copies)");

    println!("\n⚡ Mutation Parameters");
    println!(
        "  • Mutation Rate: {:.2e} /bp/gen [--mutation-rate]",
        evo.mutation_rate
    );
    println!(
        "  • Tracked Fraction: {} [--tracked-mutation-fraction]",
        format_real(evo.tracked_mutation_fraction)
    );

    println!("\n🔀 Recombination Parameters");
    println!(
        "  • Crossover Rate: {:.2e} /bp/gen [--recombination-rate]",
        evo.recombination_rate
    );

    println!("\n🎯 Sweep");
    println!("  • Mutation Type: {}", sweep.mutation_type);
    println!(
        "  • Selection Coefficient: {} [-s, --selection-coefficient]",
        format_real(sweep.selection_coefficient)
    );
    println!(
        "  • Dominance: {} [--dominance]",
        format_real(sweep.dominance)
    );
    println!(
        "  • Introduced At: generation {} [--introduction-generation]",
        sweep.introduction_generation
    );
    println!("  • Position: {} [--position]", config.sweep_position());
    println!();
}
