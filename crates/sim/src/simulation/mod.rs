//! Simulation engine and population management.
//!
//! This module provides the generation loop, the population container and
//! the statistics recorded for each generation.

//! Re-exports
//!
//! The most commonly used simulation types are re-exported here for
//! convenience so consumers can import them from `punnett_sim::simulation`.
//!
//! - `Simulation`: the engine that records statistics and advances
//!   generations.
//! - `Population`: in-memory container for individuals of one generation.
//! - `SimulationBuilder`: fluent builder for constructing `Simulation`
//!   instances with sensible defaults and validation.
//! - `TrendSink`: destination for the finished per-generation series.

pub mod builder;
pub mod configs;
pub mod engine;
pub mod population;
pub mod statistics;
pub mod trend;

pub use builder::SimulationBuilder;
pub use configs::{
    Configuration, ExecutionConfig, DEFAULT_GENERATIONS, DEFAULT_TRIALS_PER_GENERATION,
};
pub use engine::{Simulation, SimulationState};
pub use population::Population;
pub use statistics::{
    percentage_green, percentage_green_and_wrinkled, percentage_wrinkled, PhenotypeStats,
};
pub use trend::{GenerationRecord, MemorySink, TrendSeries, TrendSink};
