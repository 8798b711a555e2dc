//! Simulation configuration.
//!
//! A [`Configuration`] fully describes a run and can be stored as JSON to
//! reproduce it.

use crate::base::GeneticModel;
use crate::errors::{BuilderError, ConfigError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default number of recorded generations.
pub const DEFAULT_GENERATIONS: usize = 10;

/// Default number of mating trials per generation.
pub const DEFAULT_TRIALS_PER_GENERATION: usize = 50_000;

/// The master configuration struct.
/// Can be deserialized from a file to fully reproduce a simulation setup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Configuration {
    #[serde(default)]
    pub execution: ExecutionConfig,
    #[serde(default)]
    pub model: GeneticModel,
}

/// High-level run parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionConfig {
    /// Number of generations to record (K)
    #[serde(default = "default_generations")]
    pub generations: usize,
    /// Mating trials per generation; self-pairs are discarded, so the next
    /// population holds at most this many individuals
    #[serde(default = "default_trials")]
    pub trials_per_generation: usize,
    /// Optional RNG seed for reproducibility
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_generations() -> usize {
    DEFAULT_GENERATIONS
}

fn default_trials() -> usize {
    DEFAULT_TRIALS_PER_GENERATION
}

impl ExecutionConfig {
    pub fn new(generations: usize, trials_per_generation: usize, seed: Option<u64>) -> Self {
        Self {
            generations,
            trials_per_generation,
            seed,
        }
    }
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self::new(DEFAULT_GENERATIONS, DEFAULT_TRIALS_PER_GENERATION, None)
    }
}

impl Configuration {
    pub fn new(execution: ExecutionConfig, model: GeneticModel) -> Self {
        Self { execution, model }
    }

    /// Check the genetic model. Any generation or trial count is accepted;
    /// zero trials simply empties the population after the first generation.
    pub fn validate(&self) -> Result<(), BuilderError> {
        self.model.validate()
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Write this configuration to `path`, replacing any existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }
}
