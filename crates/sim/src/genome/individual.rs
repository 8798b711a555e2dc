use core::fmt;

use crate::base::{AllelePair, GeneticModel, LocusKind};
use crate::errors::InvalidGenotype;

/// An individual with a diploid two-locus genotype.
///
/// `Individual` holds one [`AllelePair`] for the shape locus and one for the
/// color locus. It is `Copy` and has no mutating accessors: individuals are
/// created by founder initialization or by mating and never change afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Individual {
    /// Alleles at the shape locus
    shape: AllelePair,
    /// Alleles at the color locus
    color: AllelePair,
}

impl Individual {
    /// Create a new `Individual` from its two allele pairs.
    #[inline]
    pub const fn new(shape: AllelePair, color: AllelePair) -> Self {
        Self { shape, color }
    }

    /// Parse an individual from two allele strings, validating each against
    /// the corresponding locus of `model`.
    pub fn parse(shape: &str, color: &str, model: &GeneticModel) -> Result<Self, InvalidGenotype> {
        Ok(Self {
            shape: AllelePair::parse_for(shape, &model.shape)?,
            color: AllelePair::parse_for(color, &model.color)?,
        })
    }

    /// Alleles at the shape locus.
    #[inline]
    pub const fn shape(&self) -> AllelePair {
        self.shape
    }

    /// Alleles at the color locus.
    #[inline]
    pub const fn color(&self) -> AllelePair {
        self.color
    }

    /// Alleles at the locus selected by `kind`.
    #[inline]
    pub const fn locus(&self, kind: LocusKind) -> AllelePair {
        match kind {
            LocusKind::Shape => self.shape,
            LocusKind::Color => self.color,
        }
    }
}

impl fmt::Display for Individual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.shape, self.color)
    }
}
