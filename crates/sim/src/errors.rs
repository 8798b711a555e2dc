use std::error;
use std::fmt;
use std::path::PathBuf;

/// Error returned when text or characters cannot form a valid allele pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidGenotype {
    /// The input did not contain exactly two allele characters.
    WrongLength { value: String, len: usize },

    /// A character is not one of the locus alphabet's two symbols.
    UnknownAllele { allele: char, locus: String },
}

impl fmt::Display for InvalidGenotype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength { value, len } => write!(
                f,
                "Invalid allele pair '{value}': expected 2 alleles, found {len}"
            ),
            Self::UnknownAllele { allele, locus } => {
                write!(f, "Allele '{allele}' is not valid for locus '{locus}'")
            }
        }
    }
}

impl error::Error for InvalidGenotype {}

/// Error returned when an operation needs at least one individual.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyPopulation;

impl fmt::Display for EmptyPopulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Population is empty")
    }
}

impl error::Error for EmptyPopulation {}

/// Errors that can occur during simulation building.
#[derive(Debug, Clone, PartialEq)]
pub enum BuilderError {
    /// A required parameter is missing
    MissingRequired(&'static str),
    /// An invalid parameter value was provided
    InvalidParameter(String),
}

impl fmt::Display for BuilderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingRequired(param) => {
                write!(f, "Missing required parameter: {param}")
            }
            Self::InvalidParameter(msg) => {
                write!(f, "Invalid parameter: {msg}")
            }
        }
    }
}

impl error::Error for BuilderError {}

/// Error returned when a trend artifact cannot be written.
#[derive(Debug)]
pub struct OutputError {
    /// File the operation targeted
    pub path: PathBuf,
    /// What went wrong
    pub message: String,
}

impl OutputError {
    pub fn new(path: impl Into<PathBuf>, message: impl fmt::Display) -> Self {
        Self {
            path: path.into(),
            message: message.to_string(),
        }
    }
}

impl fmt::Display for OutputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Failed to write '{}': {}", self.path.display(), self.message)
    }
}

impl error::Error for OutputError {}

/// Errors that terminate a simulation run.
#[derive(Debug)]
pub enum SimulationError {
    /// Malformed genotype input
    InvalidGenotype(InvalidGenotype),
    /// Statistics or reproduction attempted on zero individuals
    EmptyPopulation(EmptyPopulation),
    /// Invalid configuration
    Builder(BuilderError),
    /// The trend sink could not write its artifact
    Output(OutputError),
    /// `step` was called after the configured generation count was reached
    AlreadyFinished { generations: usize },
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGenotype(e) => write!(f, "{e}"),
            Self::EmptyPopulation(e) => write!(f, "{e}"),
            Self::Builder(e) => write!(f, "{e}"),
            Self::Output(e) => write!(f, "{e}"),
            Self::AlreadyFinished { generations } => {
                write!(f, "Simulation already finished after {generations} generations")
            }
        }
    }
}

impl error::Error for SimulationError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::InvalidGenotype(e) => Some(e),
            Self::EmptyPopulation(e) => Some(e),
            Self::Builder(e) => Some(e),
            Self::Output(e) => Some(e),
            Self::AlreadyFinished { .. } => None,
        }
    }
}

impl From<InvalidGenotype> for SimulationError {
    fn from(e: InvalidGenotype) -> Self {
        Self::InvalidGenotype(e)
    }
}

impl From<EmptyPopulation> for SimulationError {
    fn from(e: EmptyPopulation) -> Self {
        Self::EmptyPopulation(e)
    }
}

impl From<BuilderError> for SimulationError {
    fn from(e: BuilderError) -> Self {
        Self::Builder(e)
    }
}

impl From<OutputError> for SimulationError {
    fn from(e: OutputError) -> Self {
        Self::Output(e)
    }
}

/// Errors that can occur while loading or saving a configuration file.
#[derive(Debug)]
pub enum ConfigError {
    /// IO error
    Io(std::io::Error),
    /// Parse error
    Parse(String),
    /// Validation error
    Validation(BuilderError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {e}"),
            Self::Parse(msg) => write!(f, "Parse error: {msg}"),
            Self::Validation(e) => write!(f, "Validation error: {e}"),
        }
    }
}

impl error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(format!("JSON error: {e}"))
    }
}

impl From<BuilderError> for ConfigError {
    fn from(e: BuilderError) -> Self {
        Self::Validation(e)
    }
}
