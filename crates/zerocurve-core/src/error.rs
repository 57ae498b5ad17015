//! Error types for core vocabulary parsing.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while parsing core vocabulary.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// A maturity label could not be parsed.
    #[error("Invalid tenor label: '{label}'")]
    InvalidTenor {
        /// The offending label.
        label: String,
    },

    /// A day count name is not recognized.
    #[error("Unknown day count convention: '{name}'")]
    UnknownDayCount {
        /// The offending name.
        name: String,
    },

    /// A frequency name is not recognized.
    #[error("Unknown frequency: '{name}'")]
    UnknownFrequency {
        /// The offending name.
        name: String,
    },
}

impl CoreError {
    /// Creates an invalid tenor error.
    #[must_use]
    pub fn invalid_tenor(label: impl Into<String>) -> Self {
        Self::InvalidTenor {
            label: label.into(),
        }
    }

    /// Creates an unknown day count error.
    #[must_use]
    pub fn unknown_day_count(name: impl Into<String>) -> Self {
        Self::UnknownDayCount { name: name.into() }
    }

    /// Creates an unknown frequency error.
    #[must_use]
    pub fn unknown_frequency(name: impl Into<String>) -> Self {
        Self::UnknownFrequency { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoreError::invalid_tenor("3Q");
        assert!(err.to_string().contains("3Q"));

        let err = CoreError::unknown_day_count("BUS/252");
        assert!(err.to_string().contains("BUS/252"));
    }
}
