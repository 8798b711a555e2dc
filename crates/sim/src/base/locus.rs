use serde::{Deserialize, Serialize};

use crate::base::AllelePair;
use crate::errors::BuilderError;

/// A two-allele locus: a name plus its dominant and recessive symbols.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locus {
    /// Human readable name (e.g. "shape")
    pub name: String,
    /// Symbol of the dominant allele
    pub dominant: char,
    /// Symbol of the recessive allele
    pub recessive: char,
}

impl Locus {
    /// Create a locus, rejecting alphabets whose two symbols coincide.
    pub fn new(
        name: impl Into<String>,
        dominant: char,
        recessive: char,
    ) -> Result<Self, BuilderError> {
        let locus = Self {
            name: name.into(),
            dominant,
            recessive,
        };
        locus.validate()?;
        Ok(locus)
    }

    /// Create a locus from a two-character string, dominant symbol first
    /// (e.g. `"Rr"`).
    pub fn from_symbols(name: impl Into<String>, symbols: &str) -> Result<Self, BuilderError> {
        let name = name.into();
        let pair: AllelePair = symbols
            .parse()
            .map_err(|e| BuilderError::InvalidParameter(format!("locus '{name}': {e}")))?;
        Self::new(name, pair.first(), pair.second())
    }

    /// Seed shape: round (`R`) over wrinkled (`r`).
    pub fn shape() -> Self {
        Self {
            name: "shape".to_string(),
            dominant: 'R',
            recessive: 'r',
        }
    }

    /// Seed color: yellow (`A`) over green (`a`).
    pub fn color() -> Self {
        Self {
            name: "color".to_string(),
            dominant: 'A',
            recessive: 'a',
        }
    }

    /// Check the alphabet invariant.
    pub fn validate(&self) -> Result<(), BuilderError> {
        if self.dominant == self.recessive {
            return Err(BuilderError::InvalidParameter(format!(
                "locus '{}' uses '{}' for both dominant and recessive alleles",
                self.name, self.dominant
            )));
        }
        Ok(())
    }

    /// True if `allele` is one of this locus's two symbols.
    #[inline]
    pub fn contains(&self, allele: char) -> bool {
        allele == self.dominant || allele == self.recessive
    }

    /// The fully recessive pair, e.g. `"rr"`.
    #[inline]
    pub fn recessive_pair(&self) -> AllelePair {
        AllelePair::new(self.recessive, self.recessive)
    }

    /// The fully dominant pair, e.g. `"RR"`.
    #[inline]
    pub fn dominant_pair(&self) -> AllelePair {
        AllelePair::new(self.dominant, self.dominant)
    }

    /// Founder genotypes for this locus: every pair that does not express the
    /// recessive phenotype, in the order `Dr`, `DD`, `rD`.
    pub fn founder_variants(&self) -> [AllelePair; 3] {
        [
            AllelePair::new(self.dominant, self.recessive),
            self.dominant_pair(),
            AllelePair::new(self.recessive, self.dominant),
        ]
    }
}

/// Selects one of the two loci of the [`GeneticModel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocusKind {
    Shape,
    Color,
}

/// The two independent loci every individual carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneticModel {
    pub shape: Locus,
    pub color: Locus,
}

impl GeneticModel {
    pub fn new(shape: Locus, color: Locus) -> Self {
        Self { shape, color }
    }

    /// Borrow the locus selected by `kind`.
    #[inline]
    pub fn locus(&self, kind: LocusKind) -> &Locus {
        match kind {
            LocusKind::Shape => &self.shape,
            LocusKind::Color => &self.color,
        }
    }

    /// Validate both loci.
    pub fn validate(&self) -> Result<(), BuilderError> {
        self.shape.validate()?;
        self.color.validate()
    }
}

impl Default for GeneticModel {
    fn default() -> Self {
        Self {
            shape: Locus::shape(),
            color: Locus::color(),
        }
    }
}
