//! Parametric zero-rate models.

use crate::error::{MathError, MathResult};
use crate::interpolation::Interpolator;

/// Nelson-Siegel zero-rate model.
///
/// ```text
/// z(t) = β₀ + β₁ · (1 - e^(-t/τ)) / (t/τ)
///           + β₂ · ((1 - e^(-t/τ)) / (t/τ) - e^(-t/τ))
/// ```
///
/// - β₀: long-term level
/// - β₀ + β₁: short-rate limit as t → 0
/// - β₂: medium-term hump (β₂ < 0 gives a trough)
/// - τ: decay scale in years
///
/// # Example
///
/// ```rust
/// use zerocurve_math::interpolation::{Interpolator, NelsonSiegel};
///
/// let ns = NelsonSiegel::new(0.045, -0.02, 0.01, 2.0).unwrap();
/// assert!(ns.interpolate(0.25).unwrap() < ns.interpolate(30.0).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NelsonSiegel {
    beta0: f64,
    beta1: f64,
    beta2: f64,
    tau: f64,
}

impl NelsonSiegel {
    /// Creates a new Nelson-Siegel curve.
    ///
    /// # Errors
    ///
    /// Returns an error if `tau` is not positive or any parameter is not finite.
    pub fn new(beta0: f64, beta1: f64, beta2: f64, tau: f64) -> MathResult<Self> {
        if [beta0, beta1, beta2, tau].iter().any(|p| !p.is_finite()) {
            return Err(MathError::invalid_input(
                "Nelson-Siegel parameters must be finite",
            ));
        }
        if tau <= 0.0 {
            return Err(MathError::invalid_input(format!(
                "tau must be positive, got {tau}"
            )));
        }

        Ok(Self {
            beta0,
            beta1,
            beta2,
            tau,
        })
    }

    /// Returns the model parameters as (β₀, β₁, β₂, τ).
    pub fn parameters(&self) -> (f64, f64, f64, f64) {
        (self.beta0, self.beta1, self.beta2, self.tau)
    }

    /// Instantaneous forward rate `β₀ + β₁·e^(-x) + β₂·x·e^(-x)` with `x = t/τ`.
    pub fn forward_rate(&self, t: f64) -> f64 {
        let x = t.max(0.0) / self.tau;
        let decay = (-x).exp();
        self.beta0 + self.beta1 * decay + self.beta2 * x * decay
    }

    /// The slope and curvature loadings `(L1, L2)` at `t`.
    ///
    /// `L1 → 1` and `L2 → 0` as `t → 0`.
    pub fn loadings(t: f64, tau: f64) -> (f64, f64) {
        let x = t / tau;
        if x.abs() < 1e-8 {
            let l1 = 1.0 - x / 2.0 + x * x / 6.0;
            return (l1, x / 2.0 - x * x / 3.0);
        }
        let decay = (-x).exp();
        let l1 = (1.0 - decay) / x;
        (l1, l1 - decay)
    }
}

impl Interpolator for NelsonSiegel {
    fn interpolate(&self, t: f64) -> MathResult<f64> {
        let (l1, l2) = Self::loadings(t.max(0.0), self.tau);
        Ok(self.beta0 + self.beta1 * l1 + self.beta2 * l2)
    }

    fn derivative(&self, t: f64) -> MathResult<f64> {
        if t <= 0.0 {
            return Ok(0.0);
        }
        // z(t) = (1/t)∫f, so z'(t) = (f(t) - z(t)) / t
        let z = self.interpolate(t)?;
        Ok((self.forward_rate(t) - z) / t)
    }

    fn allows_extrapolation(&self) -> bool {
        true
    }

    fn min_x(&self) -> f64 {
        0.0
    }

    fn max_x(&self) -> f64 {
        f64::INFINITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_limits() {
        let ns = NelsonSiegel::new(0.05, -0.02, 0.01, 1.5).unwrap();

        assert_relative_eq!(ns.interpolate(0.0).unwrap(), 0.03, epsilon = 1e-12);
        assert_relative_eq!(ns.interpolate(1e-10).unwrap(), 0.03, epsilon = 1e-9);
        assert_relative_eq!(ns.interpolate(1000.0).unwrap(), 0.05, epsilon = 1e-4);
        assert_relative_eq!(ns.forward_rate(0.0), 0.03, epsilon = 1e-12);
    }

    #[test]
    fn test_flat_curve() {
        let ns = NelsonSiegel::new(0.04, 0.0, 0.0, 2.0).unwrap();
        for t in [0.5, 2.0, 10.0, 30.0] {
            assert_relative_eq!(ns.interpolate(t).unwrap(), 0.04, epsilon = 1e-14);
            assert_relative_eq!(ns.derivative(t).unwrap(), 0.0, epsilon = 1e-14);
        }
    }

    #[test]
    fn test_derivative_matches_finite_difference() {
        let ns = NelsonSiegel::new(0.045, -0.015, 0.02, 2.5).unwrap();
        let h = 1e-6;
        for t in [0.5, 2.0, 7.0] {
            let fd = (ns.interpolate(t + h).unwrap() - ns.interpolate(t - h).unwrap()) / (2.0 * h);
            assert_relative_eq!(ns.derivative(t).unwrap(), fd, epsilon = 1e-8);
        }
    }

    #[test]
    fn test_loadings_continuous_near_zero() {
        let (a1, a2) = NelsonSiegel::loadings(1e-9, 1.0);
        let (b1, b2) = NelsonSiegel::loadings(1e-7, 1.0);
        assert_relative_eq!(a1, b1, epsilon = 1e-6);
        assert_relative_eq!(a2, b2, epsilon = 1e-6);
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(NelsonSiegel::new(0.04, 0.0, 0.0, 0.0).is_err());
        assert!(NelsonSiegel::new(0.04, 0.0, 0.0, -1.0).is_err());
        assert!(NelsonSiegel::new(f64::NAN, 0.0, 0.0, 1.0).is_err());
    }
}
