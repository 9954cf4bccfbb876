//! Error types for the command-line front end.

use std::path::PathBuf;

use ossql_core::ParseError;

/// Errors that can occur while reading, parsing or rendering SQL.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The input did not parse.
    #[error("{0}")]
    Parse(#[from] ParseError),

    /// Some statements of a batch failed to parse.
    #[error("{failed} of {total} statements failed to parse")]
    Batch {
        /// Statements that failed.
        failed: usize,
        /// Statements attempted.
        total: usize,
    },

    /// Reading an input file failed.
    #[error("Failed to read '{path}': {source}")]
    Read {
        /// The file that could not be read.
        path: PathBuf,
        /// The underlying error.
        source: std::io::Error,
    },

    /// IO error on standard input.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
