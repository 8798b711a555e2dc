//! Simulation engine.
//!
//! This module provides the generation loop: build the founders, record each
//! generation's phenotype statistics, replace the population with its
//! offspring, and finally hand the recorded series to a [`TrendSink`].

use crate::errors::SimulationError;
use crate::simulation::{
    Configuration, GenerationRecord, PhenotypeStats, Population, TrendSeries, TrendSink,
};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

/// Where a simulation is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationState {
    /// Founders not built yet
    Initializing,
    /// The next `step` records this generation index
    Running(usize),
    /// All configured generations have been recorded
    Done,
}

/// Main simulation engine.
#[derive(Debug)]
pub struct Simulation {
    /// Current population
    population: Population,
    /// Run configuration
    config: Configuration,
    /// Lifecycle state
    state: SimulationState,
    /// Statistics recorded so far
    trends: TrendSeries,
    /// Random number generator shared by parent sampling and inheritance
    rng: Xoshiro256PlusPlus,
}

impl Simulation {
    /// Create a new simulation from configuration.
    ///
    /// The RNG is seeded from `config.execution.seed` when present and from
    /// OS entropy otherwise.
    pub fn new(config: Configuration) -> Result<Self, SimulationError> {
        config.validate()?;
        Ok(Self::from_validated(config))
    }

    /// Create a new simulation driven by an explicit generator.
    pub fn with_rng(
        config: Configuration,
        rng: Xoshiro256PlusPlus,
    ) -> Result<Self, SimulationError> {
        config.validate()?;
        Ok(Self::assemble(config, rng))
    }

    /// Construct from a configuration the caller has already validated.
    pub(crate) fn from_validated(config: Configuration) -> Self {
        let rng = if let Some(seed) = config.execution.seed {
            Xoshiro256PlusPlus::seed_from_u64(seed)
        } else {
            Xoshiro256PlusPlus::from_seed(rand::rng().random())
        };
        Self::assemble(config, rng)
    }

    fn assemble(config: Configuration, rng: Xoshiro256PlusPlus) -> Self {
        let trends = TrendSeries::with_capacity(config.execution.generations);
        Self {
            population: Population::new("pop_0", Vec::new()),
            config,
            state: SimulationState::Initializing,
            trends,
            rng,
        }
    }

    /// Build the founder population and enter the running state.
    ///
    /// Does nothing if the simulation is already initialized.
    pub fn initialize(&mut self) {
        if self.state != SimulationState::Initializing {
            return;
        }
        self.population = Population::founders(&self.config.model);
        self.state = if self.config.execution.generations == 0 {
            SimulationState::Done
        } else {
            SimulationState::Running(0)
        };
        log::info!(
            "Initialized {} founders; {} generations x {} trials",
            self.population.size(),
            self.config.execution.generations,
            self.config.execution.trials_per_generation
        );
    }

    /// Get the current population.
    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Get reference to the run configuration.
    pub fn configuration(&self) -> &Configuration {
        &self.config
    }

    /// Get the lifecycle state.
    pub fn state(&self) -> SimulationState {
        self.state
    }

    /// True once every configured generation has been recorded.
    pub fn is_done(&self) -> bool {
        self.state == SimulationState::Done
    }

    /// Statistics recorded so far.
    pub fn trends(&self) -> &TrendSeries {
        &self.trends
    }

    /// Consume the simulation and return its recorded statistics.
    pub fn into_trends(self) -> TrendSeries {
        self.trends
    }

    /// Record the current generation and advance the population by one
    /// generation.
    ///
    /// Builds the founders first if needed.
    ///
    /// # Errors
    /// - [`SimulationError::AlreadyFinished`] once all generations are recorded
    /// - [`SimulationError::EmptyPopulation`] if the current population is
    ///   empty (e.g. zero trials per generation)
    pub fn step(&mut self) -> Result<GenerationRecord, SimulationError> {
        self.initialize();

        let generation = match self.state {
            SimulationState::Running(generation) => generation,
            SimulationState::Initializing | SimulationState::Done => {
                return Err(SimulationError::AlreadyFinished {
                    generations: self.config.execution.generations,
                });
            }
        };

        let stats = PhenotypeStats::of(&self.population, &self.config.model)?;
        let record = GenerationRecord::new(generation, stats, self.population.size());
        self.trends.push(record);
        log::debug!(
            "generation {generation}: n={} green={:.3}% wrinkled={:.3}% both={:.3}%",
            record.population_size,
            record.green,
            record.wrinkled,
            record.both
        );

        self.population = self
            .population
            .advance(self.config.execution.trials_per_generation, &mut self.rng)?;

        self.state = if generation + 1 >= self.config.execution.generations {
            SimulationState::Done
        } else {
            SimulationState::Running(generation + 1)
        };

        Ok(record)
    }

    /// Run all remaining generations.
    pub fn run(&mut self) -> Result<&TrendSeries, SimulationError> {
        self.initialize();
        while !self.is_done() {
            self.step()?;
        }
        log::info!("Recorded {} generations", self.trends.len());
        Ok(&self.trends)
    }

    /// Hand the series recorded so far to `sink`.
    pub fn finish<S: TrendSink + ?Sized>(&self, sink: &mut S) -> Result<(), SimulationError> {
        sink.write_trends(&self.trends)?;
        Ok(())
    }

    /// Run all remaining generations and hand the series to `sink`.
    pub fn run_into<S: TrendSink + ?Sized>(&mut self, sink: &mut S) -> Result<(), SimulationError> {
        self.run()?;
        self.finish(sink)
    }
}
