use crate::{err::Error, Result};
use std::path::PathBuf;

/// Number of lines written when no count is given.
pub const DEFAULT_ITERATIONS: u64 = 1000;

/// Settings for a single generator run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Where to write the log. Empty paths are accepted here and rejected
    /// when the file is opened.
    pub output: PathBuf,
    pub iterations: u64,
    /// Fixed seed for reproducible output. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Config {
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
            iterations: DEFAULT_ITERATIONS,
            seed: None,
        }
    }

    pub fn with_iterations(self, iterations: u64) -> Self {
        Self { iterations, ..self }
    }

    pub fn with_seed(self, seed: Option<u64>) -> Self {
        Self { seed, ..self }
    }
}

/// Reads an iteration count, rejecting anything that is not an unsigned
/// integer.
pub fn parse_iterations(value: &str) -> Result<u64> {
    value.parse().map_err(|source| Error::InvalidIterations {
        value: value.to_owned(),
        source,
    })
}
