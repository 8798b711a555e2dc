//! Builder pattern for creating simulations.
//!
//! Provides a fluent API for configuring and creating simulations with
//! sensible defaults and validation.

use crate::base::{GeneticModel, Locus};
pub use crate::errors::BuilderError;
use crate::simulation::{Configuration, ExecutionConfig, Simulation};

/// Builder for constructing Simulation instances with a fluent API.
///
/// Every parameter has a default: 10 generations, 50 000 trials per
/// generation, a random seed, and the `R/r` shape and `A/a` color loci.
///
/// # Examples
///
/// ```
/// use punnett_sim::simulation::SimulationBuilder;
///
/// // Defaults
/// let sim = SimulationBuilder::new().build().unwrap();
///
/// // Small reproducible run with a custom color alphabet
/// let mut sim = SimulationBuilder::new()
///     .generations(4)
///     .trials_per_generation(1_000)
///     .color_alleles('Y', 'y')
///     .seed(42)
///     .build()
///     .unwrap();
/// let trends = sim.run().unwrap();
/// assert_eq!(trends.len(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct SimulationBuilder {
    generations: usize,
    trials_per_generation: usize,
    seed: Option<u64>, // Default: None (random)
    model: GeneticModel,
}

impl Default for SimulationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulationBuilder {
    /// Create a new simulation builder with default values.
    pub fn new() -> Self {
        Self::from_configuration(Configuration::default())
    }

    /// Start from an existing configuration (e.g. one loaded from a file).
    pub fn from_configuration(config: Configuration) -> Self {
        Self {
            generations: config.execution.generations,
            trials_per_generation: config.execution.trials_per_generation,
            seed: config.execution.seed,
            model: config.model,
        }
    }

    /// Set the number of generations to record.
    pub fn generations(mut self, generations: usize) -> Self {
        self.generations = generations;
        self
    }

    /// Set the number of mating trials per generation.
    pub fn trials_per_generation(mut self, trials: usize) -> Self {
        self.trials_per_generation = trials;
        self
    }

    /// Set random seed for reproducibility.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set or clear the random seed.
    pub fn maybe_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Replace the shape locus.
    pub fn shape_locus(mut self, locus: Locus) -> Self {
        self.model.shape = locus;
        self
    }

    /// Replace the color locus.
    pub fn color_locus(mut self, locus: Locus) -> Self {
        self.model.color = locus;
        self
    }

    /// Set the shape locus symbols, keeping its name.
    pub fn shape_alleles(mut self, dominant: char, recessive: char) -> Self {
        self.model.shape.dominant = dominant;
        self.model.shape.recessive = recessive;
        self
    }

    /// Set the color locus symbols, keeping its name.
    pub fn color_alleles(mut self, dominant: char, recessive: char) -> Self {
        self.model.color.dominant = dominant;
        self.model.color.recessive = recessive;
        self
    }

    /// The configuration this builder would produce, validated.
    pub fn configuration(&self) -> Result<Configuration, BuilderError> {
        let config = Configuration::new(
            ExecutionConfig::new(self.generations, self.trials_per_generation, self.seed),
            self.model.clone(),
        );
        config.validate()?;
        Ok(config)
    }

    /// Build the simulation.
    pub fn build(self) -> Result<Simulation, BuilderError> {
        let config = self.configuration()?;
        Ok(Simulation::from_validated(config))
    }
}
