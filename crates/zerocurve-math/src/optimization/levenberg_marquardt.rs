//! Levenberg-Marquardt nonlinear least squares.

use log::{debug, trace};
use nalgebra::{DMatrix, DVector};

use crate::error::{MathError, MathResult};
use crate::optimization::{LeastSquaresFit, SolverConfig};

/// Levenberg-Marquardt minimizer of `Σ rᵢ(p)²`.
///
/// Each iteration solves the damped normal equations
///
/// ```text
/// (JᵀJ + λ·diag(JᵀJ)) δ = -Jᵀr
/// ```
///
/// with a central-difference Jacobian. A step that lowers the residual sum
/// is accepted and λ shrinks; otherwise λ grows and the step is retried.
///
/// The run converges when the residual sum or the gradient falls below
/// `config.tolerance`, when an accepted step improves the residual sum by
/// less than the stall tolerance, or when no damped step improves on the
/// current point.
/// Exhausting `max_iterations` first returns `converged = false`.
#[derive(Debug, Clone, Copy)]
pub struct LevenbergMarquardt {
    config: SolverConfig,
    initial_lambda: f64,
    lambda_factor: f64,
    max_lambda: f64,
    stall_tolerance: f64,
}

impl Default for LevenbergMarquardt {
    fn default() -> Self {
        Self::new(SolverConfig::default())
    }
}

impl LevenbergMarquardt {
    /// Creates a solver with the given configuration.
    #[must_use]
    pub fn new(config: SolverConfig) -> Self {
        Self {
            config,
            initial_lambda: 1e-3,
            lambda_factor: 10.0,
            max_lambda: 1e12,
            stall_tolerance: 1e-10,
        }
    }

    /// Minimizes the sum of squared `residuals` starting from `initial`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `initial` is empty or the residuals at the
    /// starting point are empty or not finite.
    pub fn minimize<F>(&self, initial: &[f64], residuals: F) -> MathResult<LeastSquaresFit>
    where
        F: Fn(&[f64]) -> Vec<f64>,
    {
        if initial.is_empty() {
            return Err(MathError::invalid_input("no parameters to optimize"));
        }

        let mut params = DVector::from_column_slice(initial);
        let mut r = DVector::from_vec(residuals(params.as_slice()));
        if r.is_empty() || r.iter().any(|v| !v.is_finite()) {
            return Err(MathError::invalid_input(
                "residuals at the initial point are empty or not finite",
            ));
        }

        let mut ssr = r.norm_squared();
        let mut lambda = self.initial_lambda;
        let tol = self.config.tolerance;

        let done = |params: &DVector<f64>, ssr: f64, iterations: u32, converged: bool| {
            debug!(
                "levenberg-marquardt finished: ssr={ssr:.3e}, iterations={iterations}, converged={converged}"
            );
            LeastSquaresFit {
                parameters: params.as_slice().to_vec(),
                ssr,
                iterations,
                converged,
            }
        };

        for iteration in 0..self.config.max_iterations {
            if ssr <= tol {
                return Ok(done(&params, ssr, iteration, true));
            }

            let jac = self.jacobian(&residuals, &params, r.len());
            let jtj = jac.transpose() * &jac;
            let gradient = jac.transpose() * &r;

            if gradient.amax() <= tol {
                return Ok(done(&params, ssr, iteration, true));
            }

            loop {
                let mut damped = jtj.clone();
                for i in 0..damped.nrows() {
                    damped[(i, i)] += lambda * jtj[(i, i)].max(1e-12);
                }

                let step = damped.lu().solve(&(-&gradient));
                let candidate = step.as_ref().map(|delta| &params + delta);
                let trial = candidate
                    .as_ref()
                    .filter(|p| p.iter().all(|v| v.is_finite()))
                    .map(|p| DVector::from_vec(residuals(p.as_slice())))
                    .filter(|r_new| r_new.len() == r.len());
                let trial_ssr = trial
                    .as_ref()
                    .map_or(f64::INFINITY, |v| v.norm_squared());

                if let (Some(new_params), Some(new_r)) = (candidate, trial) {
                    if trial_ssr.is_finite() && trial_ssr < ssr {
                        let improvement = (ssr - trial_ssr) / ssr.max(f64::MIN_POSITIVE);
                        let step_size =
                            (&new_params - &params).norm() / (params.norm() + f64::EPSILON);

                        trace!(
                            "iteration {iteration}: ssr {ssr:.3e} -> {trial_ssr:.3e}, lambda={lambda:.1e}"
                        );

                        params = new_params;
                        r = new_r;
                        ssr = trial_ssr;
                        lambda = (lambda / self.lambda_factor).max(1e-15);

                        if improvement < self.stall_tolerance || step_size < self.stall_tolerance {
                            return Ok(done(&params, ssr, iteration + 1, true));
                        }
                        break;
                    }
                }

                lambda *= self.lambda_factor;
                if lambda > self.max_lambda {
                    // no descent direction left at this point
                    return Ok(done(&params, ssr, iteration + 1, true));
                }
            }
        }

        Ok(done(&params, ssr, self.config.max_iterations, false))
    }

    fn jacobian<F>(&self, residuals: &F, params: &DVector<f64>, m: usize) -> DMatrix<f64>
    where
        F: Fn(&[f64]) -> Vec<f64>,
    {
        let n = params.len();
        let mut jac = DMatrix::zeros(m, n);

        for j in 0..n {
            let h = self.config.step_size * params[j].abs().max(1.0);
            let mut up = params.clone();
            let mut down = params.clone();
            up[j] += h;
            down[j] -= h;

            let r_up = residuals(up.as_slice());
            let r_down = residuals(down.as_slice());
            for i in 0..m.min(r_up.len()).min(r_down.len()) {
                let d = (r_up[i] - r_down[i]) / (2.0 * h);
                jac[(i, j)] = if d.is_finite() { d } else { 0.0 };
            }
        }

        jac
    }
}
