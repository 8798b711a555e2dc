//! # Simulation Crate
//!
//! The `punnett_sim` crate provides the core logic of a two-locus Mendelian
//! inheritance simulator. It includes modules for allele pairs and loci,
//! individuals and their recessive phenotypes, inheritance and mating, and
//! the generation loop that records how often the recessive traits are
//! expressed as a randomly mating population evolves.

pub mod base;
pub mod errors;
pub mod evolution;
pub mod genome;
pub mod prelude;
pub mod simulation;

pub use base::{AllelePair, GeneticModel, Locus, LocusKind};
