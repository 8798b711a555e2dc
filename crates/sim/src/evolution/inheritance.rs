//! Mendelian transmission of alleles from parents to offspring.
//!
//! Each parent passes on one of its two alleles at a locus, chosen by a fair
//! coin. Loci are transmitted independently of each other.

use crate::base::AllelePair;
use crate::errors::InvalidGenotype;
use crate::genome::Individual;
use rand::Rng;

/// Pick one of the two alleles of `pair` with probability 0.5 each.
#[inline]
fn transmit<R: Rng + ?Sized>(pair: AllelePair, rng: &mut R) -> char {
    if rng.random::<f64>() < 0.5 {
        pair.first()
    } else {
        pair.second()
    }
}

/// Produce an offspring allele pair at one locus.
///
/// One allele is drawn from `pair_a`, then one from `pair_b`; the result keeps
/// that order (`allele-from-a`, `allele-from-b`).
pub fn inherit<R: Rng + ?Sized>(pair_a: AllelePair, pair_b: AllelePair, rng: &mut R) -> AllelePair {
    let from_a = transmit(pair_a, rng);
    let from_b = transmit(pair_b, rng);
    AllelePair::new(from_a, from_b)
}

/// Text form of [`inherit`].
///
/// # Errors
/// Returns [`InvalidGenotype::WrongLength`] if either input is not exactly
/// two characters long. No randomness is consumed in that case.
pub fn inherit_str<R: Rng + ?Sized>(
    pair_a: &str,
    pair_b: &str,
    rng: &mut R,
) -> Result<AllelePair, InvalidGenotype> {
    let pair_a: AllelePair = pair_a.parse()?;
    let pair_b: AllelePair = pair_b.parse()?;
    Ok(inherit(pair_a, pair_b, rng))
}

/// Produce one offspring of `parent1` and `parent2`.
///
/// The shape locus is inherited first, then the color locus, each with its
/// own independent draws.
pub fn mate<R: Rng + ?Sized>(
    parent1: &Individual,
    parent2: &Individual,
    rng: &mut R,
) -> Individual {
    let shape = inherit(parent1.shape(), parent2.shape(), rng);
    let color = inherit(parent1.color(), parent2.color(), rng);
    Individual::new(shape, color)
}
