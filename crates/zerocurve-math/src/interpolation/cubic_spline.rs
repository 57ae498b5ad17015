//! Natural cubic spline interpolation.

use crate::error::MathResult;
use crate::interpolation::{Interpolator, Knots};

/// Natural cubic spline interpolator.
///
/// Piecewise cubic with continuous first and second derivatives and zero
/// curvature at both end knots. With exactly two knots the spline reduces to
/// the straight line through them.
///
/// # Example
///
/// ```rust
/// use zerocurve_math::interpolation::{CubicSpline, Interpolator};
///
/// let spline = CubicSpline::new(vec![1.0, 2.0, 5.0], vec![0.03, 0.035, 0.04]).unwrap();
/// let y = spline.interpolate(3.0).unwrap();
/// assert!(y > 0.035 && y < 0.04);
/// ```
#[derive(Debug, Clone)]
pub struct CubicSpline {
    knots: Knots,
    /// Second derivative at each knot.
    curvature: Vec<f64>,
    allow_extrapolation: bool,
}

impl CubicSpline {
    /// Creates a natural cubic spline.
    ///
    /// # Errors
    ///
    /// Returns an error if there are fewer than 2 points, if lengths differ,
    /// or if `xs` is not strictly increasing.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Self> {
        let knots = Knots::new(xs, ys)?;
        let curvature = natural_curvature(&knots.xs, &knots.ys);

        Ok(Self {
            knots,
            curvature,
            allow_extrapolation: false,
        })
    }

    /// Enables evaluation of the end cubics beyond the data range.
    #[must_use]
    pub fn with_extrapolation(mut self) -> Self {
        self.allow_extrapolation = true;
        self
    }

    /// Second derivatives at the knots.
    pub fn curvature(&self) -> &[f64] {
        &self.curvature
    }

    /// Segment index plus the local weights `(h, a, b)` for `x`.
    fn locate(&self, x: f64) -> (usize, f64, f64, f64) {
        let i = self.knots.segment(x);
        let x_lo = self.knots.xs[i];
        let x_hi = self.knots.xs[i + 1];
        let h = x_hi - x_lo;
        (i, h, (x_hi - x) / h, (x - x_lo) / h)
    }
}

impl Interpolator for CubicSpline {
    fn interpolate(&self, x: f64) -> MathResult<f64> {
        self.knots.check_range(x, self.allow_extrapolation)?;

        let (i, h, a, b) = self.locate(x);
        let (y_lo, y_hi) = (self.knots.ys[i], self.knots.ys[i + 1]);
        let (m_lo, m_hi) = (self.curvature[i], self.curvature[i + 1]);

        Ok(a * y_lo + b * y_hi + ((a * a * a - a) * m_lo + (b * b * b - b) * m_hi) * h * h / 6.0)
    }

    fn derivative(&self, x: f64) -> MathResult<f64> {
        self.knots.check_range(x, self.allow_extrapolation)?;

        let (i, h, a, b) = self.locate(x);
        let (y_lo, y_hi) = (self.knots.ys[i], self.knots.ys[i + 1]);
        let (m_lo, m_hi) = (self.curvature[i], self.curvature[i + 1]);

        Ok((y_hi - y_lo) / h - (3.0 * a * a - 1.0) * h * m_lo / 6.0
            + (3.0 * b * b - 1.0) * h * m_hi / 6.0)
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

/// Solves the tridiagonal system for the interior second derivatives of a
/// natural spline (Thomas algorithm). End curvatures are zero.
fn natural_curvature(xs: &[f64], ys: &[f64]) -> Vec<f64> {
    let n = xs.len();
    let mut curvature = vec![0.0; n];
    if n < 3 {
        return curvature;
    }

    let h: Vec<f64> = xs.windows(2).map(|w| w[1] - w[0]).collect();
    let interior = n - 2;

    let mut upper = vec![0.0; interior];
    let mut rhs = vec![0.0; interior];

    for j in 0..interior {
        let diag = 2.0 * (h[j] + h[j + 1]);
        let d = 6.0 * ((ys[j + 2] - ys[j + 1]) / h[j + 1] - (ys[j + 1] - ys[j]) / h[j]);

        if j == 0 {
            upper[j] = h[j + 1] / diag;
            rhs[j] = d / diag;
        } else {
            let w = diag - h[j] * upper[j - 1];
            upper[j] = h[j + 1] / w;
            rhs[j] = (d - h[j] * rhs[j - 1]) / w;
        }
    }

    curvature[interior] = rhs[interior - 1];
    for j in (0..interior - 1).rev() {
        curvature[j + 1] = rhs[j] - upper[j] * curvature[j + 2];
    }

    curvature
}
