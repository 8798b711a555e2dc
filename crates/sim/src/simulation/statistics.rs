//! Phenotype statistics over a population.
//!
//! All percentages are in `[0, 100]`. Every function rejects an empty
//! population with [`EmptyPopulation`] instead of dividing by zero.

use crate::base::GeneticModel;
use crate::errors::EmptyPopulation;
use crate::genome::{is_green, is_wrinkled, Individual, Phenotype};
use crate::simulation::Population;

fn percentage_matching<F>(population: &Population, predicate: F) -> Result<f64, EmptyPopulation>
where
    F: Fn(&Individual) -> bool,
{
    if population.is_empty() {
        return Err(EmptyPopulation);
    }
    let matching = population.iter().filter(|&ind| predicate(ind)).count();
    Ok(matching as f64 / population.size() as f64 * 100.0)
}

/// Percentage of individuals showing the recessive color (green).
pub fn percentage_green(
    population: &Population,
    model: &GeneticModel,
) -> Result<f64, EmptyPopulation> {
    percentage_matching(population, |ind| is_green(ind, model))
}

/// Percentage of individuals showing the recessive shape (wrinkled).
pub fn percentage_wrinkled(
    population: &Population,
    model: &GeneticModel,
) -> Result<f64, EmptyPopulation> {
    percentage_matching(population, |ind| is_wrinkled(ind, model))
}

/// Percentage of individuals that are green *and* wrinkled.
///
/// Counts individuals satisfying both predicates; it is not the product of
/// the two marginal percentages.
pub fn percentage_green_and_wrinkled(
    population: &Population,
    model: &GeneticModel,
) -> Result<f64, EmptyPopulation> {
    percentage_matching(population, |ind| is_green(ind, model) && is_wrinkled(ind, model))
}

/// The three phenotype percentages of one population.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PhenotypeStats {
    pub green: f64,
    pub wrinkled: f64,
    pub both: f64,
}

impl PhenotypeStats {
    /// Compute all three percentages in a single pass.
    pub fn of(population: &Population, model: &GeneticModel) -> Result<Self, EmptyPopulation> {
        if population.is_empty() {
            return Err(EmptyPopulation);
        }

        let (mut green, mut wrinkled, mut both) = (0usize, 0usize, 0usize);
        for ind in population {
            let phenotype = Phenotype::classify(ind, model);
            green += usize::from(phenotype.green);
            wrinkled += usize::from(phenotype.wrinkled);
            both += usize::from(phenotype.is_double_recessive());
        }

        let size = population.size() as f64;
        Ok(Self {
            green: green as f64 / size * 100.0,
            wrinkled: wrinkled as f64 / size * 100.0,
            both: both as f64 / size * 100.0,
        })
    }
}
