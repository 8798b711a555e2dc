//! Shared default values for the command-line arguments.
//! Generation and trial counts come from the simulation crate.

pub const CONFIG_PATH: &str = "punnett.json";
pub const OUTPUT_PLOT: &str = "out.svg";

pub const SHAPE_ALLELES: &str = "Rr";
pub const COLOR_ALLELES: &str = "Aa";

pub const REPLICATES: usize = 1;
