//! Evolution module providing inheritance and mating.
//!
//! - **Inheritance**: one offspring allele pair from two parent pairs
//! - **Mating**: one offspring individual from two parents, locus by locus

pub mod inheritance;

pub use inheritance::{inherit, inherit_str, mate};
