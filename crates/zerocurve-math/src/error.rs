//! Error types for the numerical routines.

use thiserror::Error;

/// Result alias for numerical routines.
pub type MathResult<T> = Result<T, MathError>;

/// Failures reported by interpolators and solvers.
///
/// A solver that runs out of iterations is not an error; it reports
/// `converged = false` in its [`LeastSquaresFit`](crate::optimization::LeastSquaresFit).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// Query point outside the knot range of an interpolator that does not
    /// extrapolate.
    #[error("{x} is outside the knot range [{min}, {max}]")]
    OutOfRange {
        /// The query point.
        x: f64,
        /// First knot.
        min: f64,
        /// Last knot.
        max: f64,
    },

    /// Too few knots or observations.
    #[error("Insufficient data: need at least {required}, got {actual}")]
    InsufficientData {
        /// Minimum required points.
        required: usize,
        /// Points supplied.
        actual: usize,
    },

    /// Malformed knots, parameters or residuals.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// What was wrong.
        reason: String,
    },
}

impl MathError {
    /// Creates an out-of-range error.
    #[must_use]
    pub fn out_of_range(x: f64, min: f64, max: f64) -> Self {
        Self::OutOfRange { x, min, max }
    }

    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Creates an insufficient data error.
    #[must_use]
    pub fn insufficient_data(required: usize, actual: usize) -> Self {
        Self::InsufficientData { required, actual }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MathError::out_of_range(12.0, 0.25, 10.0);
        assert_eq!(err.to_string(), "12 is outside the knot range [0.25, 10]");

        let err = MathError::insufficient_data(2, 1);
        assert!(err.to_string().contains("at least 2"));
    }
}
