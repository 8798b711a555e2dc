use clap::Args;
use punnett_sim::simulation::{DEFAULT_GENERATIONS, DEFAULT_TRIALS_PER_GENERATION};
use std::path::PathBuf;

use crate::defaults;

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Output configuration path
    #[arg(short, long, default_value = defaults::CONFIG_PATH)]
    pub output: PathBuf,

    /// Number of generations to record
    #[arg(short = 'g', long, default_value_t = DEFAULT_GENERATIONS)]
    pub generations: usize,

    /// Mating trials per generation
    ///
    /// Self-pairings are discarded, so each new generation holds at most
    /// this many individuals.
    #[arg(short = 'n', long, default_value_t = DEFAULT_TRIALS_PER_GENERATION)]
    pub trials: usize,

    /// Random seed (omit for a different run each time)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Shape locus symbols, dominant first
    #[arg(long, default_value = defaults::SHAPE_ALLELES)]
    pub shape_alleles: String,

    /// Color locus symbols, dominant first
    #[arg(long, default_value = defaults::COLOR_ALLELES)]
    pub color_alleles: String,

    /// Overwrite an existing configuration file
    #[arg(long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Configuration file (defaults are used when omitted)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the number of generations
    #[arg(short = 'g', long)]
    pub generations: Option<usize>,

    /// Override the mating trials per generation
    #[arg(short = 'n', long)]
    pub trials: Option<usize>,

    /// Override the random seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Trend chart output path (SVG)
    #[arg(short, long, default_value = defaults::OUTPUT_PLOT)]
    pub output: PathBuf,

    /// Also write the per-generation table as CSV
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Number of independent runs to average
    ///
    /// Replicate i uses seed + i when a seed is set.
    #[arg(short, long, default_value_t = defaults::REPLICATES)]
    pub replicates: usize,

    /// Show progress bar
    #[arg(long)]
    pub progress: bool,
}
