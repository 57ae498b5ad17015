//! Error types for curve operations.

use thiserror::Error;
use zerocurve_math::MathError;

/// A specialized Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Error types for curve operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// Fewer observations than the operation needs.
    #[error("Insufficient data: need at least {required} points, got {got}")]
    InsufficientData {
        /// Minimum required points.
        required: usize,
        /// Actual number of points provided.
        got: usize,
    },

    /// Method identifier outside the supported set.
    #[error("Unknown bootstrap method: '{name}'")]
    UnknownMethod {
        /// The identifier that was requested.
        name: String,
    },

    /// A fit did not converge or produced non-finite values.
    #[error("Fit diverged after {iterations} iterations (residual: {residual:.2e}): {reason}")]
    FitDivergence {
        /// Iterations used before giving up.
        iterations: u32,
        /// Final residual sum of squares.
        residual: f64,
        /// What went wrong.
        reason: String,
    },

    /// An observation violates the tenor/rate contract.
    #[error("Invalid observation: {reason}")]
    InvalidObservation {
        /// Description of the violation.
        reason: String,
    },

    /// Error from the numerical layer.
    #[error("Math error: {0}")]
    Math(#[from] MathError),

    /// Export or re-import of a curve failed.
    #[error("Export error: {reason}")]
    Export {
        /// Description of the failure.
        reason: String,
    },
}

impl CurveError {
    /// Creates an insufficient data error.
    #[must_use]
    pub fn insufficient_data(required: usize, got: usize) -> Self {
        Self::InsufficientData { required, got }
    }

    /// Creates an unknown method error.
    #[must_use]
    pub fn unknown_method(name: impl Into<String>) -> Self {
        Self::UnknownMethod { name: name.into() }
    }

    /// Creates a fit divergence error.
    #[must_use]
    pub fn fit_divergence(iterations: u32, residual: f64, reason: impl Into<String>) -> Self {
        Self::FitDivergence {
            iterations,
            residual,
            reason: reason.into(),
        }
    }

    /// Creates an invalid observation error.
    #[must_use]
    pub fn invalid_observation(reason: impl Into<String>) -> Self {
        Self::InvalidObservation {
            reason: reason.into(),
        }
    }

    /// Creates an export error.
    #[must_use]
    pub fn export(reason: impl Into<String>) -> Self {
        Self::Export {
            reason: reason.into(),
        }
    }

    /// Returns true for data-dependent failures that another data set or
    /// method may avoid.
    ///
    /// Unknown methods and invalid observations are programming or
    /// configuration errors and are not recoverable.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::InsufficientData { .. } | Self::FitDivergence { .. }
        )
    }
}

impl From<csv::Error> for CurveError {
    fn from(err: csv::Error) -> Self {
        Self::export(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CurveError::insufficient_data(2, 1);
        assert_eq!(
            err.to_string(),
            "Insufficient data: need at least 2 points, got 1"
        );

        let err = CurveError::unknown_method("svensson");
        assert!(err.to_string().contains("svensson"));

        let err = CurveError::fit_divergence(200, 1e-3, "iteration budget exhausted");
        assert!(err.to_string().contains("200 iterations"));
    }

    #[test]
    fn test_recoverable() {
        assert!(CurveError::insufficient_data(2, 0).is_recoverable());
        assert!(CurveError::fit_divergence(1, 1.0, "x").is_recoverable());
        assert!(!CurveError::unknown_method("x").is_recoverable());
        assert!(!CurveError::invalid_observation("x").is_recoverable());
    }

    #[test]
    fn test_from_math_error() {
        let err: CurveError = MathError::insufficient_data(2, 1).into();
        assert!(matches!(err, CurveError::Math(_)));
    }
}
