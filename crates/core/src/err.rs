//! Error types and utilities.

use std::{num::ParseIntError, path::PathBuf};

#[derive(thiserror::Error, Debug)]
/// Represents an error that can occur while generating a log file.
pub enum Error {
    /// The iteration count could not be read as an unsigned integer.
    #[error("invalid iteration count {value:?}: {source}")]
    InvalidIterations {
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// The output file could not be opened for writing.
    #[error("cannot open {path:?} for writing: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An I/O error occurred.
    #[error("i/o error {0}")]
    Io(#[from] std::io::Error),

    /// A timestamp could not be rendered.
    #[error("timestamp format error {0}")]
    Format(#[from] time::error::Format),

    /// The start instant is too close to the end of the representable range.
    #[error("start instant {0} cannot be offset without overflowing")]
    TimestampOverflow(time::OffsetDateTime),
}

/// A specialized [Result] type for this crate's operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;
