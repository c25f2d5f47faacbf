//! Error types for the simulator driver.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for driver operations
pub type Result<T> = std::result::Result<T, InputError>;

/// Errors raised while reading input or writing results.
#[derive(Error, Debug)]
pub enum InputError {
    /// Reading or writing a file failed
    #[error("I/O error on {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A token in a reference string is not an integer page number
    #[error("invalid page `{token}` on line {line}")]
    InvalidPage { line: usize, token: String },

    /// The reference string contained no pages
    #[error("reference string is empty")]
    EmptyReferenceString,

    /// Neither `--refs` nor `--input` was supplied
    #[error("no reference string given, pass --refs or --input")]
    MissingReferences,

    /// Random generation bounds are inverted
    #[error("invalid page range: min {min} is greater than max {max}")]
    InvalidRange { min: i64, max: i64 },

    /// CSV export failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl InputError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        InputError::Io {
            path: path.into(),
            source,
        }
    }
}
