//! Error types for snunzip CLI operations.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Warning conditions.
///
/// These never stop a run; the affected argument is still processed in a
/// degraded way.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Warning {
    /// The argument is not a valid wildcard pattern and is used literally
    #[error("Globbing error for {pattern}: {message}. Treating as literal file.")]
    InvalidPattern {
        /// The argument as given on the command line
        pattern: String,
        /// Description of the syntax problem
        message: String,
    },

    /// The argument is not valid UTF-8 and is used literally
    #[error("{pattern} is not valid UTF-8 and cannot be matched. Treating as literal file.")]
    UnmatchablePattern {
        /// Lossy rendering of the argument
        pattern: String,
    },
}

/// Main error type for snunzip CLI operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A valid pattern matched nothing
    #[error("No files found matching {pattern}.")]
    NoMatch {
        /// The pattern that matched nothing
        pattern: String,
    },

    /// Failed to open input file
    #[error("error opening file {}: {source}", path.display())]
    OpenInput {
        /// Path to the input file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Output file already exists
    #[error(
        "output file {} already exists. Skipping to prevent overwrite",
        path.display()
    )]
    OutputExists {
        /// Path to the existing file
        path: PathBuf,
    },

    /// Cannot determine output filename
    #[error("{}: Cannot determine output filename", path.display())]
    InvalidOutputFilename {
        /// Path to the input file
        path: PathBuf,
    },

    /// Failed to create output file
    #[error("error creating output file {}: {source}", path.display())]
    CreateOutput {
        /// Path to the output file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Decoding or copying the stream failed
    #[error("error during snappy decompression of {}: {source}", path.display())]
    Decompression {
        /// Path to the file being decompressed
        path: PathBuf,
        /// Error reported by the decoder or the output file
        #[source]
        source: io::Error,
    },
}

/// Specialized `Result` type for snunzip CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// This represents both "real" failures and warning conditions.
#[derive(Debug, Error)]
pub enum CliError {
    /// Warning condition.
    #[error(transparent)]
    Warning(#[from] Warning),

    /// Real failure condition.
    #[error(transparent)]
    Error(#[from] Error),
}

impl CliError {
    /// Returns a reference to the warning if this error represents a warning.
    pub fn as_warning(&self) -> Option<&Warning> {
        match self {
            CliError::Warning(w) => Some(w),
            CliError::Error(_) => None,
        }
    }

    /// Returns a reference to the underlying "real" error, if any.
    pub fn as_error(&self) -> Option<&Error> {
        match self {
            CliError::Warning(_) => None,
            CliError::Error(e) => Some(e),
        }
    }
}
