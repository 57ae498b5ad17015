//! Log-linear interpolation.

use crate::error::{MathError, MathResult};
use crate::interpolation::{Interpolator, Knots};

/// Linear interpolation of `ln(y)`.
///
/// Applied to discount factors this gives piecewise-constant continuously
/// compounded forward rates between knots. Requires strictly positive values.
#[derive(Debug, Clone)]
pub struct LogLinearInterpolator {
    /// Knots in log space.
    log_knots: Knots,
    allow_extrapolation: bool,
}

impl LogLinearInterpolator {
    /// Creates a new log-linear interpolator.
    ///
    /// # Errors
    ///
    /// Returns an error if there are fewer than 2 points, if lengths differ,
    /// if `xs` is not strictly increasing, or if any `y` is not positive.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Self> {
        if let Some(bad) = ys.iter().find(|y| y.is_nan() || **y <= 0.0) {
            return Err(MathError::invalid_input(format!(
                "log-linear interpolation requires positive values, got {bad}"
            )));
        }

        let log_ys = ys.iter().map(|y| y.ln()).collect();
        Ok(Self {
            log_knots: Knots::new(xs, log_ys)?,
            allow_extrapolation: false,
        })
    }

    /// Enables extrapolation of the end log-slopes beyond the data range.
    #[must_use]
    pub fn with_extrapolation(mut self) -> Self {
        self.allow_extrapolation = true;
        self
    }

    /// Interpolated `ln(y)` and its slope at `x`.
    fn log_value(&self, x: f64) -> (f64, f64) {
        let k = &self.log_knots;
        let i = k.segment(x);
        let slope = (k.ys[i + 1] - k.ys[i]) / (k.xs[i + 1] - k.xs[i]);
        (k.ys[i] + slope * (x - k.xs[i]), slope)
    }
}

impl Interpolator for LogLinearInterpolator {
    fn interpolate(&self, x: f64) -> MathResult<f64> {
        self.log_knots.check_range(x, self.allow_extrapolation)?;
        Ok(self.log_value(x).0.exp())
    }

    fn derivative(&self, x: f64) -> MathResult<f64> {
        self.log_knots.check_range(x, self.allow_extrapolation)?;
        let (log_y, slope) = self.log_value(x);
        Ok(log_y.exp() * slope)
    }

    fn allows_extrapolation(&self) -> bool {
        self.allow_extrapolation
    }

    fn min_x(&self) -> f64 {
        self.log_knots.first()
    }

    fn max_x(&self) -> f64 {
        self.log_knots.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_log_linear_is_geometric() {
        let interp = LogLinearInterpolator::new(vec![0.0, 2.0], vec![1.0, 0.81]).unwrap();

        // geometric midpoint
        assert_relative_eq!(interp.interpolate(1.0).unwrap(), 0.9, epsilon = 1e-12);
    }

    #[test]
    fn test_constant_forward_on_discount_factors() {
        let rate: f64 = 0.04;
        let xs = vec![0.5, 1.0, 2.0, 5.0];
        let ys: Vec<f64> = xs.iter().map(|t| (-rate * t).exp()).collect();
        let interp = LogLinearInterpolator::new(xs, ys).unwrap();

        for t in [0.75, 1.5, 3.3] {
            let df = interp.interpolate(t).unwrap();
            assert_relative_eq!(df, (-rate * t).exp(), epsilon = 1e-12);
            // instantaneous forward = -DF'/DF
            assert_relative_eq!(-interp.derivative(t).unwrap() / df, rate, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_rejects_non_positive_values() {
        assert!(LogLinearInterpolator::new(vec![1.0, 2.0], vec![1.0, 0.0]).is_err());
        assert!(LogLinearInterpolator::new(vec![1.0, 2.0], vec![-0.5, 1.0]).is_err());
        assert!(LogLinearInterpolator::new(vec![1.0, 2.0], vec![f64::NAN, 1.0]).is_err());
    }

    #[test]
    fn test_log_linear_extrapolation() {
        let interp = LogLinearInterpolator::new(vec![1.0, 2.0], vec![0.9, 0.81])
            .unwrap()
            .with_extrapolation();
        assert_relative_eq!(interp.interpolate(3.0).unwrap(), 0.729, epsilon = 1e-12);
    }
}
