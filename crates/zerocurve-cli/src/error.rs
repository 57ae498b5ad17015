//! CLI error types.

use std::path::PathBuf;

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// A quote file could not be read.
    #[error("Failed to read {}: {reason}", path.display())]
    QuoteFile {
        /// File path.
        path: PathBuf,
        /// What went wrong.
        reason: String,
    },

    /// No quote source was given.
    #[error("No quotes provided. Use --swaps, --futures or --bonds.")]
    NoQuotes,

    /// Bond quotes cannot be mixed with swaps or futures.
    #[error("--bonds cannot be combined with --swaps or --futures")]
    MixedSources,

    /// Unknown bootstrap method.
    #[error("Unknown method: {0}. Expected one of: {1}")]
    UnknownMethod(String, String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Creates a quote file error.
    pub fn quote_file(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::QuoteFile {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
