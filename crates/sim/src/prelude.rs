//! Commonly used imports for convenience.
//!
//! # Example
//!
//! ```
//! use punnett_sim::prelude::*;
//!
//! let model = GeneticModel::default();
//! let founders = Population::founders(&model);
//! assert_eq!(percentage_green(&founders, &model).unwrap(), 0.0);
//! ```

pub use crate::base::{AllelePair, GeneticModel, Locus, LocusKind};
pub use crate::errors::{self, EmptyPopulation, InvalidGenotype, SimulationError};
pub use crate::evolution::{inherit, mate};
pub use crate::genome::{is_green, is_wrinkled, Individual, Phenotype};
pub use crate::simulation::{
    percentage_green, percentage_green_and_wrinkled, percentage_wrinkled, Configuration,
    Population, Simulation, SimulationBuilder, TrendSeries, TrendSink,
};
