//! Population genetics analysis tools for punnett
//!
//! This module provides:
//! - Genotype composition and allele frequencies
//! - Temporal summaries over replicate runs
//! - Trend sinks writing SVG charts and CSV tables

pub mod composition;
pub mod export;
pub mod plot;
pub mod temporal;

// Re-export commonly used functions
pub use composition::{genotype_counts, recessive_allele_frequency, GenotypeCounts};
pub use export::CsvTrendWriter;
pub use plot::SvgTrendPlot;
pub use temporal::{
    allele_trajectory, hardy_weinberg_recessive_percentage, is_non_decreasing, mean_trends,
    TrendError,
};
