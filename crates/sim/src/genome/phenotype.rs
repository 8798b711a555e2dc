//! Observable recessive traits.
//!
//! A trait is expressed when the allele pair at its locus is *exactly* the
//! fully recessive pair. The comparison is a literal two-character match,
//! not a multiset comparison; it is order-independent only because the
//! recessive pair consists of two identical characters.

use crate::base::GeneticModel;
use crate::genome::Individual;

/// True if the individual's color pair is the recessive color pair
/// (`"aa"` with the default alphabet).
#[inline]
pub fn is_green(individual: &Individual, model: &GeneticModel) -> bool {
    individual.color() == model.color.recessive_pair()
}

/// True if the individual's shape pair is the recessive shape pair
/// (`"rr"` with the default alphabet).
#[inline]
pub fn is_wrinkled(individual: &Individual, model: &GeneticModel) -> bool {
    individual.shape() == model.shape.recessive_pair()
}

/// Both recessive-trait flags of one individual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Phenotype {
    pub green: bool,
    pub wrinkled: bool,
}

impl Phenotype {
    pub fn classify(individual: &Individual, model: &GeneticModel) -> Self {
        Self {
            green: is_green(individual, model),
            wrinkled: is_wrinkled(individual, model),
        }
    }

    /// Green and wrinkled at the same time.
    #[inline]
    pub fn is_double_recessive(self) -> bool {
        self.green && self.wrinkled
    }
}
