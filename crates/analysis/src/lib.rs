//! # Analysis Crate
//!
//! The `punnett_analysis` crate turns populations and recorded trend series
//! into numbers and artifacts: genotype composition and allele frequencies,
//! replicate averaging, and the SVG and CSV trend sinks.

pub mod analysis;

pub use analysis::{
    genotype_counts, hardy_weinberg_recessive_percentage, is_non_decreasing, mean_trends,
    recessive_allele_frequency, CsvTrendWriter, GenotypeCounts, SvgTrendPlot, TrendError,
};
