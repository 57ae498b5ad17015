//! Error types for market data sources.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias for feed operations.
pub type FeedResult<T> = Result<T, FeedError>;

/// Failures while obtaining provider data.
#[derive(Debug, Error)]
pub enum FeedError {
    /// No data file for the requested key.
    #[error("not found: {}", path.display())]
    NotFound {
        /// Path that was looked up.
        path: PathBuf,
    },

    /// Reading a data file failed.
    #[error("IO error reading {}: {source}", path.display())]
    Io {
        /// File path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The payload could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),

    /// The provider answered with a failure envelope.
    #[error("source error: {0}")]
    Source(String),

    /// A successful envelope carried no data.
    #[error("empty response")]
    EmptyResponse,
}

impl FeedError {
    /// Creates a source error.
    #[must_use]
    pub fn source_error(message: impl Into<String>) -> Self {
        Self::Source(message.into())
    }
}

impl From<serde_json::Error> for FeedError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = FeedError::NotFound {
            path: PathBuf::from("data/swaps/usd.json"),
        };
        assert_eq!(err.to_string(), "not found: data/swaps/usd.json");
        assert_eq!(
            FeedError::source_error("rate limited").to_string(),
            "source error: rate limited"
        );
    }
}
