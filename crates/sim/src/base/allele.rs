use core::fmt;
use std::str::FromStr;

use crate::base::Locus;
use crate::errors::InvalidGenotype;

/// The two alleles an individual carries at one locus.
///
/// `AllelePair` keeps its alleles in insertion order: the first slot is the
/// allele drawn from the first parent and the second slot the allele drawn
/// from the second parent. The order is never normalized, so `"Rr"` and
/// `"rR"` are distinct values even though they describe the same genotype
/// biologically. Comparisons (`==`) are exact two-character comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AllelePair([char; 2]);

impl AllelePair {
    /// Create a pair from two alleles in the given order.
    #[inline(always)]
    pub const fn new(first: char, second: char) -> Self {
        Self([first, second])
    }

    /// Parse a two-character string and check both alleles against `locus`.
    pub fn parse_for(text: &str, locus: &Locus) -> Result<Self, InvalidGenotype> {
        let pair: Self = text.parse()?;
        pair.validate(locus)
    }

    /// Return `self` if both alleles belong to `locus`'s alphabet.
    pub fn validate(self, locus: &Locus) -> Result<Self, InvalidGenotype> {
        match self.0.iter().find(|&&allele| !locus.contains(allele)) {
            Some(&allele) => Err(InvalidGenotype::UnknownAllele {
                allele,
                locus: locus.name.clone(),
            }),
            None => Ok(self),
        }
    }

    /// First allele (slot 0).
    #[inline(always)]
    pub const fn first(self) -> char {
        self.0[0]
    }

    /// Second allele (slot 1).
    #[inline(always)]
    pub const fn second(self) -> char {
        self.0[1]
    }

    /// Allele at `slot` (0 or 1).
    #[inline]
    pub fn get(self, slot: usize) -> Option<char> {
        self.0.get(slot).copied()
    }

    /// Both alleles as an array, in insertion order.
    #[inline(always)]
    pub const fn alleles(self) -> [char; 2] {
        self.0
    }

    /// True if both slots hold the same allele.
    #[inline]
    pub fn is_homozygous(self) -> bool {
        self.0[0] == self.0[1]
    }

    /// Number of copies of `allele` in this pair (0, 1 or 2).
    #[inline]
    pub fn count(self, allele: char) -> usize {
        self.0.iter().filter(|&&a| a == allele).count()
    }
}

impl FromStr for AllelePair {
    type Err = InvalidGenotype;

    /// Parse exactly two characters. Alphabet membership is not checked; use
    /// [`AllelePair::parse_for`] for that.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(first), Some(second), None) => Ok(Self::new(first, second)),
            _ => Err(InvalidGenotype::WrongLength {
                value: s.to_string(),
                len: s.chars().count(),
            }),
        }
    }
}

impl fmt::Display for AllelePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.0[0], self.0[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allele_pair_keeps_insertion_order() {
        let pair = AllelePair::new('r', 'R');
        assert_eq!(pair.first(), 'r');
        assert_eq!(pair.second(), 'R');
        assert_eq!(pair.to_string(), "rR");
        assert_ne!(pair, AllelePair::new('R', 'r'));
    }

    #[test]
    fn test_allele_pair_from_str() {
        let pair: AllelePair = "Aa".parse().unwrap();
        assert_eq!(pair.alleles(), ['A', 'a']);
    }

    #[test]
    fn test_allele_pair_from_str_wrong_length() {
        assert_eq!(
            "A".parse::<AllelePair>(),
            Err(InvalidGenotype::WrongLength {
                value: "A".to_string(),
                len: 1
            })
        );
        assert!("Aaa".parse::<AllelePair>().is_err());
        assert!("".parse::<AllelePair>().is_err());
    }

    #[test]
    fn test_allele_pair_parse_for_locus() {
        let color = Locus::color();
        assert_eq!(
            AllelePair::parse_for("aA", &color),
            Ok(AllelePair::new('a', 'A'))
        );

        let err = AllelePair::parse_for("Ax", &color).unwrap_err();
        assert_eq!(
            err,
            InvalidGenotype::UnknownAllele {
                allele: 'x',
                locus: "color".to_string()
            }
        );
        assert!(err.to_string().contains("'x'"));
    }

    #[test]
    fn test_allele_pair_homozygous_and_count() {
        let rr = AllelePair::new('r', 'r');
        let rr_het = AllelePair::new('R', 'r');

        assert!(rr.is_homozygous());
        assert!(!rr_het.is_homozygous());
        assert_eq!(rr.count('r'), 2);
        assert_eq!(rr_het.count('r'), 1);
        assert_eq!(rr_het.count('x'), 0);
    }

    #[test]
    fn test_allele_pair_get() {
        let pair = AllelePair::new('A', 'a');
        assert_eq!(pair.get(0), Some('A'));
        assert_eq!(pair.get(1), Some('a'));
        assert_eq!(pair.get(2), None);
    }
}
