//! Linear interpolation.

use crate::error::MathResult;
use crate::interpolation::{Interpolator, Knots};

/// Linear interpolation between data points.
///
/// # Example
///
/// ```rust
/// use zerocurve_math::interpolation::{Interpolator, LinearInterpolator};
///
/// let interp = LinearInterpolator::new(vec![1.0, 2.0], vec![0.04, 0.05]).unwrap();
/// let y = interp.interpolate(1.5).unwrap();
/// assert!((y - 0.045).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct LinearInterpolator {
    knots: Knots,
    allow_extrapolation: bool,
}

impl LinearInterpolator {
    /// Creates a new linear interpolator.
    ///
    /// # Errors
    ///
    /// Returns an error if there are fewer than 2 points, if lengths differ,
    /// or if `xs` is not strictly increasing.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Self> {
        Ok(Self {
            knots: Knots::new(xs, ys)?,
            allow_extrapolation: false,
        })
    }

    /// Enables linear extrapolation beyond the data range.
    #[must_use]
    pub fn with_extrapolation(mut self) -> Self {
        self.allow_extrapolation = true;
        self
    }

    fn slope(&self, i: usize) -> f64 {
        let k = &self.knots;
        (k.ys[i + 1] - k.ys[i]) / (k.xs[i + 1] - k.xs[i])
    }
}

impl Interpolator for LinearInterpolator {
    fn interpolate(&self, x: f64) -> MathResult<f64> {
        self.knots.check_range(x, self.allow_extrapolation)?;
        let i = self.knots.segment(x);
        Ok(self.knots.ys[i] + self.slope(i) * (x - self.knots.xs[i]))
    }

    fn derivative(&self, x: f64) -> MathResult<f64> {
        self.knots.check_range(x, self.allow_extrapolation)?;
        Ok(self.slope(self.knots.segment(x)))
    }

    fn allows_extrapolation(&self) -> bool {
        self.allow_extrapolation
    }

    fn min_x(&self) -> f64 {
        self.knots.first()
    }

    fn max_x(&self) -> f64 {
        self.knots.last()
    }
}
