//! Interpolation methods for curve construction.
//!
//! # Available Methods
//!
//! - [`LinearInterpolator`]: piecewise linear
//! - [`CubicSpline`]: natural cubic spline (C2)
//! - [`LogLinearInterpolator`]: linear in `ln(y)`, for strictly positive data
//!   such as discount factors
//! - [`NelsonSiegel`]: the parametric Nelson-Siegel zero-rate model
//!
//! | Method | Smoothness | Min points | Typical input |
//! |--------|------------|-----------:|---------------|
//! | Linear | C0 | 2 | Zero rates |
//! | Cubic Spline | C2 | 2 | Zero rates, `ln(DF)` |
//! | Log-Linear | C0 | 2 | Discount factors |
//! | Nelson-Siegel | C∞ | n/a | Fitted parameters |
//!
//! The piecewise interpolators reject queries outside their knot range unless
//! built with `with_extrapolation()`.

mod cubic_spline;
mod linear;
mod log_linear;
mod parametric;

pub use cubic_spline::CubicSpline;
pub use linear::LinearInterpolator;
pub use log_linear::LogLinearInterpolator;
pub use parametric::NelsonSiegel;

use std::fmt;

use crate::error::{MathError, MathResult};

/// Trait for interpolation methods.
///
/// All interpolation methods implement this trait, providing a unified
/// interface for curve construction.
pub trait Interpolator: Send + Sync + fmt::Debug {
    /// Returns the interpolated value at x.
    fn interpolate(&self, x: f64) -> MathResult<f64>;

    /// Returns the first derivative at x.
    fn derivative(&self, x: f64) -> MathResult<f64>;

    /// Returns true if extrapolation is allowed.
    fn allows_extrapolation(&self) -> bool {
        false
    }

    /// Returns the minimum x value in the data.
    fn min_x(&self) -> f64;

    /// Returns the maximum x value in the data.
    fn max_x(&self) -> f64;

    /// Checks if x is within the interpolation range.
    fn in_range(&self, x: f64) -> bool {
        x >= self.min_x() && x <= self.max_x()
    }
}

/// Validated knot data shared by the piecewise interpolators.
///
/// Invariants: at least two points, equal lengths, all values finite and
/// `xs` strictly increasing.
#[derive(Debug, Clone)]
pub(crate) struct Knots {
    pub(crate) xs: Vec<f64>,
    pub(crate) ys: Vec<f64>,
}

impl Knots {
    pub(crate) fn new(xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Self> {
        if xs.len() < 2 {
            return Err(MathError::insufficient_data(2, xs.len()));
        }
        if xs.len() != ys.len() {
            return Err(MathError::invalid_input(format!(
                "xs and ys must have same length: {} vs {}",
                xs.len(),
                ys.len()
            )));
        }
        if xs.iter().chain(ys.iter()).any(|v| !v.is_finite()) {
            return Err(MathError::invalid_input("knot values must be finite"));
        }
        if xs.windows(2).any(|w| w[1] <= w[0]) {
            return Err(MathError::invalid_input(
                "x values must be strictly increasing",
            ));
        }

        Ok(Self { xs, ys })
    }

    pub(crate) fn len(&self) -> usize {
        self.xs.len()
    }

    pub(crate) fn first(&self) -> f64 {
        self.xs[0]
    }

    pub(crate) fn last(&self) -> f64 {
        self.xs[self.xs.len() - 1]
    }

    /// Fails with `OutOfRange` when `x` lies outside the knots
    /// and `allow` is false.
    pub(crate) fn check_range(&self, x: f64, allow: bool) -> MathResult<()> {
        if !allow && (x < self.first() || x > self.last()) {
            return Err(MathError::out_of_range(x, self.first(), self.last()));
        }
        Ok(())
    }

    /// Index `i` of the segment `[xs[i], xs[i + 1]]` used for `x`.
    ///
    /// Points left of the knots map to the first segment and points right of
    /// them to the last.
    pub(crate) fn segment(&self, x: f64) -> usize {
        let upper = self.xs.partition_point(|&k| k <= x);
        upper.saturating_sub(1).min(self.len() - 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_knots_validation() {
        assert!(matches!(
            Knots::new(vec![1.0], vec![1.0]),
            Err(MathError::InsufficientData { required: 2, actual: 1 })
        ));
        assert!(Knots::new(vec![1.0, 2.0], vec![1.0]).is_err());
        assert!(Knots::new(vec![1.0, 1.0], vec![1.0, 2.0]).is_err());
        assert!(Knots::new(vec![1.0, f64::NAN], vec![1.0, 2.0]).is_err());
        assert!(Knots::new(vec![1.0, 2.0], vec![1.0, f64::INFINITY]).is_err());
    }

    #[test]
    fn test_segment_lookup() {
        let knots = Knots::new(vec![1.0, 2.0, 5.0, 10.0], vec![0.0; 4]).unwrap();
        assert_eq!(knots.segment(0.5), 0);
        assert_eq!(knots.segment(1.0), 0);
        assert_eq!(knots.segment(1.5), 0);
        assert_eq!(knots.segment(2.0), 1);
        assert_eq!(knots.segment(7.0), 2);
        assert_eq!(knots.segment(10.0), 2);
        assert_eq!(knots.segment(30.0), 2);
    }

    #[test]
    fn test_interpolators_agree_on_knots() {
        let xs = vec![0.5, 1.0, 2.0, 5.0];
        let ys = vec![0.03, 0.035, 0.04, 0.042];

        let interpolators: Vec<Box<dyn Interpolator>> = vec![
            Box::new(LinearInterpolator::new(xs.clone(), ys.clone()).unwrap()),
            Box::new(CubicSpline::new(xs.clone(), ys.clone()).unwrap()),
            Box::new(LogLinearInterpolator::new(xs.clone(), ys.clone()).unwrap()),
        ];

        for interp in &interpolators {
            for (x, y) in xs.iter().zip(ys.iter()) {
                let value = interp.interpolate(*x).unwrap();
                assert!((value - y).abs() < 1e-12, "{interp:?} at {x}");
            }
        }
    }
}
