//! Genotype composition analysis
//!
//! Functions for counting genotype classes and allele frequencies at one
//! locus of a population.

use punnett_sim::base::{GeneticModel, LocusKind};
use punnett_sim::errors::EmptyPopulation;
use punnett_sim::simulation::Population;

/// Number of individuals in each genotype class at one locus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenotypeCounts {
    /// Two dominant alleles (e.g. `RR`)
    pub homozygous_dominant: usize,
    /// One allele of each kind, in either order
    pub heterozygous: usize,
    /// Two recessive alleles (e.g. `rr`)
    pub homozygous_recessive: usize,
}

impl GenotypeCounts {
    pub fn total(&self) -> usize {
        self.homozygous_dominant + self.heterozygous + self.homozygous_recessive
    }

    /// Observed heterozygote proportion (0.0 to 1.0).
    pub fn heterozygosity(&self) -> Result<f64, EmptyPopulation> {
        match self.total() {
            0 => Err(EmptyPopulation),
            n => Ok(self.heterozygous as f64 / n as f64),
        }
    }
}

/// Count the genotype classes at `kind`.
///
/// # Examples
///
/// ```
/// use punnett_analysis::genotype_counts;
/// use punnett_sim::base::{GeneticModel, LocusKind};
/// use punnett_sim::simulation::Population;
///
/// let model = GeneticModel::default();
/// let founders = Population::founders(&model);
/// let counts = genotype_counts(&founders, LocusKind::Shape, &model);
///
/// assert_eq!(counts.homozygous_dominant, 3);
/// assert_eq!(counts.heterozygous, 6);
/// assert_eq!(counts.homozygous_recessive, 0);
/// ```
pub fn genotype_counts(
    population: &Population,
    kind: LocusKind,
    model: &GeneticModel,
) -> GenotypeCounts {
    let recessive = model.locus(kind).recessive;
    let mut counts = GenotypeCounts::default();

    for individual in population {
        match individual.locus(kind).count(recessive) {
            0 => counts.homozygous_dominant += 1,
            1 => counts.heterozygous += 1,
            _ => counts.homozygous_recessive += 1,
        }
    }

    counts
}

/// Frequency `q` of the recessive allele at `kind` across all `2n` allele
/// copies.
pub fn recessive_allele_frequency(
    population: &Population,
    kind: LocusKind,
    model: &GeneticModel,
) -> Result<f64, EmptyPopulation> {
    if population.is_empty() {
        return Err(EmptyPopulation);
    }

    let recessive = model.locus(kind).recessive;
    let copies: usize = population
        .iter()
        .map(|ind| ind.locus(kind).count(recessive))
        .sum();

    Ok(copies as f64 / (2 * population.size()) as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use punnett_sim::genome::Individual;
    use punnett_sim::AllelePair;

    fn individual(shape: &str, color: &str) -> Individual {
        Individual::parse(shape, color, &GeneticModel::default()).unwrap()
    }

    #[test]
    fn test_founder_counts() {
        let model = GeneticModel::default();
        let founders = Population::founders(&model);

        for kind in [LocusKind::Shape, LocusKind::Color] {
            let counts = genotype_counts(&founders, kind, &model);
            assert_eq!(counts.total(), 9);
            assert_eq!(counts.homozygous_dominant, 3);
            assert_eq!(counts.heterozygous, 6);
            assert_eq!(counts.homozygous_recessive, 0);
        }
    }

    #[test]
    fn test_heterozygote_order_is_ignored() {
        let model = GeneticModel::default();
        let population = Population::new(
            "test",
            vec![
                individual("Rr", "AA"),
                individual("rR", "aa"),
                individual("rr", "aA"),
            ],
        );

        let shape = genotype_counts(&population, LocusKind::Shape, &model);
        assert_eq!(shape.heterozygous, 2);
        assert_eq!(shape.homozygous_recessive, 1);

        let color = genotype_counts(&population, LocusKind::Color, &model);
        assert_eq!(color.homozygous_dominant, 1);
        assert_eq!(color.heterozygous, 1);
        assert_eq!(color.homozygous_recessive, 1);
        assert!((color.heterozygosity().unwrap() - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_founder_recessive_frequency_is_one_third() {
        let model = GeneticModel::default();
        let founders = Population::founders(&model);

        for kind in [LocusKind::Shape, LocusKind::Color] {
            let q = recessive_allele_frequency(&founders, kind, &model).unwrap();
            assert!((q - 1.0 / 3.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_frequency_custom_alphabet() {
        let model = GeneticModel::new(
            punnett_sim::Locus::new("height", 'T', 't').unwrap(),
            punnett_sim::Locus::color(),
        );
        let population = Population::new(
            "test",
            vec![
                Individual::new(AllelePair::new('t', 't'), AllelePair::new('A', 'A')),
                Individual::new(AllelePair::new('T', 't'), AllelePair::new('A', 'A')),
            ],
        );

        let q = recessive_allele_frequency(&population, LocusKind::Shape, &model).unwrap();
        assert_eq!(q, 0.75);
        let q = recessive_allele_frequency(&population, LocusKind::Color, &model).unwrap();
        assert_eq!(q, 0.0);
    }

    #[test]
    fn test_empty_population() {
        let model = GeneticModel::default();
        let empty = Population::new("empty", Vec::new());

        assert_eq!(
            genotype_counts(&empty, LocusKind::Shape, &model),
            GenotypeCounts::default()
        );
        assert_eq!(
            recessive_allele_frequency(&empty, LocusKind::Shape, &model),
            Err(EmptyPopulation)
        );
        assert_eq!(GenotypeCounts::default().heterozygosity(), Err(EmptyPopulation));
    }
}
