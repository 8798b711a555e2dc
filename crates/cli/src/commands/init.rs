use anyhow::{bail, Context, Result};
use punnett_sim::base::{GeneticModel, Locus};
use punnett_sim::simulation::{Configuration, ExecutionConfig};

use crate::args::InitArgs;
use crate::printing::print_parameters;

pub fn init_simulation(args: &InitArgs) -> Result<()> {
    println!("🫛 Punnett - Recessive Trait Simulator");
    println!("=====================================\n");

    let config = build_config(args)?;

    println!("Configuration:");
    print_parameters(&config);

    if args.output.exists() && !args.force {
        bail!(
            "'{}' already exists (use --force to overwrite)",
            args.output.display()
        );
    }
    config
        .save(&args.output)
        .with_context(|| format!("Failed to write configuration to {}", args.output.display()))?;

    println!("✓ Configuration written to {}", args.output.display());
    println!("\nNext step:");
    println!("  punnett run --config {}", args.output.display());

    Ok(())
}

pub fn build_config(args: &InitArgs) -> Result<Configuration> {
    let shape = Locus::from_symbols("shape", &args.shape_alleles)
        .context("Invalid --shape-alleles")?;
    let color = Locus::from_symbols("color", &args.color_alleles)
        .context("Invalid --color-alleles")?;

    let config = Configuration::new(
        ExecutionConfig::new(args.generations, args.trials, args.seed),
        GeneticModel::new(shape, color),
    );
    config.validate().context("Invalid configuration")?;
    Ok(config)
}
