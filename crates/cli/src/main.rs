mod args;
mod commands;
pub mod defaults;
mod printing;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use args::{InitArgs, RunArgs};
use commands::{info, init, run};

/// Punnett: A Recessive Trait Simulator
///
/// This tool follows two Mendelian traits of pea seeds (shape and color)
/// through generations of random mating and charts how often the recessive
/// forms appear.
#[derive(Parser, Debug)]
#[command(name = "punnett")]
#[command(author, version, about = "Simulates recessive traits under random mating", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write a new simulation configuration.
    ///
    /// Sets up the parameters for an experiment (generations, trials, allele
    /// symbols) but does not run it yet.
    Init(InitArgs),

    /// Run a simulation and chart the recessive phenotypes.
    ///
    /// Executes the simulation generation by generation, prints a table and
    /// writes the SVG chart.
    Run(RunArgs),

    /// Info: Show a configuration and its founder population.
    Info {
        /// Configuration path
        #[arg(short, long, default_value = defaults::CONFIG_PATH)]
        config: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init(args) => {
            init::init_simulation(&args)?;
        }
        Commands::Run(args) => {
            run::run_simulation(&args)?;
        }
        Commands::Info { config } => {
            info::show_info(&config)?;
        }
    }

    Ok(())
}
