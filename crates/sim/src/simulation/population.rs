//! Population management and reproduction.
//!
//! This module provides the population container, the founder population
//! and the generation advancer that produces each next generation by random
//! mating.

use crate::base::GeneticModel;
use crate::errors::EmptyPopulation;
use crate::evolution::mate;
use crate::genome::Individual;
use rand::Rng;
use std::sync::Arc;

/// Upper bound on the offspring buffer reserved up front by
/// [`Population::advance`]; larger generations grow the buffer as needed.
const MAX_PREALLOCATED_OFFSPRING: usize = 1 << 20;

fn offspring_capacity(trials: usize) -> usize {
    trials.min(MAX_PREALLOCATED_OFFSPRING)
}

/// A population of diploid individuals.
#[derive(Debug, Clone, PartialEq)]
pub struct Population {
    /// The individuals in this population
    individuals: Vec<Individual>,
    /// Generation counter
    generation: usize,
    /// Population ID
    id: Arc<str>,
}

impl Population {
    /// Create a new generation-0 population from individuals.
    pub fn new(id: impl Into<Arc<str>>, individuals: Vec<Individual>) -> Self {
        Self {
            individuals,
            generation: 0,
            id: id.into(),
        }
    }

    /// Build the founder population.
    ///
    /// The founders are the Cartesian product of the three non-recessive
    /// variants of the shape locus with the three of the color locus, shape
    /// major: `Rr/Aa, Rr/AA, Rr/aA, RR/Aa, ...` for the default alphabet.
    /// No founder expresses either recessive trait.
    pub fn founders(model: &GeneticModel) -> Self {
        let colors = model.color.founder_variants();
        let individuals = model
            .shape
            .founder_variants()
            .into_iter()
            .flat_map(|shape| colors.into_iter().map(move |color| Individual::new(shape, color)))
            .collect();

        Self::new("pop_0", individuals)
    }

    /// Get population ID.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the generation number.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Get the number of individuals in the population.
    pub fn size(&self) -> usize {
        self.individuals.len()
    }

    /// Check if population is empty.
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Get all individuals as a slice.
    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    /// Get a specific individual by index.
    pub fn get(&self, index: usize) -> Option<&Individual> {
        self.individuals.get(index)
    }

    /// Iterate over the individuals in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Individual> {
        self.individuals.iter()
    }

    /// Produce the next generation by random mating.
    ///
    /// Runs exactly `trials` trials. Each trial draws two indices uniformly
    /// and independently (with replacement). When both draws hit the same
    /// individual the trial is discarded and yields no offspring; otherwise the
    /// two individuals are mated and the child appended. The returned
    /// population therefore holds at most `trials` individuals.
    ///
    /// # Errors
    /// Returns [`EmptyPopulation`] if there is nobody to sample from.
    pub fn advance<R: Rng + ?Sized>(
        &self,
        trials: usize,
        rng: &mut R,
    ) -> Result<Population, EmptyPopulation> {
        if self.is_empty() {
            return Err(EmptyPopulation);
        }

        let size = self.size();
        let mut offspring = Vec::with_capacity(offspring_capacity(trials));
        for _ in 0..trials {
            let parent1 = rng.random_range(0..size);
            let parent2 = rng.random_range(0..size);
            if parent1 == parent2 {
                continue;
            }
            offspring.push(mate(
                &self.individuals[parent1],
                &self.individuals[parent2],
                rng,
            ));
        }

        log::debug!(
            "{}: {} of {} trials discarded as self-pairs",
            self.id,
            trials - offspring.len(),
            trials
        );

        let generation = self.generation + 1;
        Ok(Population {
            individuals: offspring,
            generation,
            id: format!("pop_{generation}").into(),
        })
    }
}

impl<'a> IntoIterator for &'a Population {
    type Item = &'a Individual;
    type IntoIter = std::slice::Iter<'a, Individual>;

    fn into_iter(self) -> Self::IntoIter {
        self.individuals.iter()
    }
}
