//! Base types for genotype representation.
//!
//! This module provides the foundational types for representing alleles,
//! loci and the two-locus genetic model used by the simulator.

mod allele;
mod locus;

pub use allele::AllelePair;
pub use locus::{GeneticModel, Locus, LocusKind};
