use anyhow::{bail, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use punnett_analysis::{mean_trends, CsvTrendWriter, SvgTrendPlot};
use punnett_sim::simulation::{Configuration, Simulation, TrendSeries, TrendSink};

use crate::args::RunArgs;
use crate::printing::{print_parameters, print_trend_table};

pub fn run_simulation(args: &RunArgs) -> Result<()> {
    println!("🫛 Punnett - Running Simulation");
    println!("==============================\n");

    let config = load_configuration(args)?;
    print_parameters(&config);

    if args.replicates == 0 {
        bail!("--replicates must be at least 1");
    }

    let pb = if args.progress {
        let total = config.execution.generations * args.replicates;
        let pb = ProgressBar::new(total as u64);
        pb.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {per_sec}",
            )?
            .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let mut runs = Vec::with_capacity(args.replicates);
    for replicate in 0..args.replicates {
        let trends = run_replicate(&config, replicate, pb.as_ref())?;
        runs.push(trends);
    }

    if let Some(pb) = pb {
        pb.finish_with_message("Done");
    }

    let trends = match runs.as_slice() {
        [single] => single.clone(),
        _ => {
            println!("\nMean of {} replicates:", runs.len());
            mean_trends(&runs).context("Failed to average replicates")?
        }
    };

    println!();
    print_trend_table(&trends);

    SvgTrendPlot::new(&args.output)
        .write_trends(&trends)
        .context("Failed to write trend chart")?;
    println!("\n✓ Chart written to {}", args.output.display());

    if let Some(csv) = &args.csv {
        CsvTrendWriter::new(csv)
            .write_trends(&trends)
            .context("Failed to write CSV")?;
        println!("✓ Table written to {}", csv.display());
    }

    Ok(())
}

/// The configuration file (or defaults) with command-line overrides applied.
fn load_configuration(args: &RunArgs) -> Result<Configuration> {
    let mut config = match &args.config {
        Some(path) => Configuration::load(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => Configuration::default(),
    };

    if let Some(generations) = args.generations {
        config.execution.generations = generations;
    }
    if let Some(trials) = args.trials {
        config.execution.trials_per_generation = trials;
    }
    if args.seed.is_some() {
        config.execution.seed = args.seed;
    }

    Ok(config)
}

fn run_replicate(
    config: &Configuration,
    replicate: usize,
    pb: Option<&ProgressBar>,
) -> Result<TrendSeries> {
    let mut config = config.clone();
    config.execution.seed = config
        .execution
        .seed
        .map(|seed| seed.wrapping_add(replicate as u64));

    let mut sim = Simulation::new(config).context("Invalid configuration")?;
    sim.initialize();

    while !sim.is_done() {
        let generation = sim.trends().len();
        sim.step()
            .with_context(|| format!("Replicate {replicate}: generation {generation} failed"))?;
        if let Some(pb) = pb {
            pb.inc(1);
        }
    }
    log::info!("Replicate {replicate} finished");

    Ok(sim.into_trends())
}
