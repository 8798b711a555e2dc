//! Genome structures for representing individuals and their phenotypes.

mod individual;
pub mod phenotype;

pub use individual::Individual;
pub use phenotype::{is_green, is_wrinkled, Phenotype};
