//! Nonlinear least squares for parametric curve fits.

mod levenberg_marquardt;

pub use levenberg_marquardt::LevenbergMarquardt;

/// Stopping rules of a least-squares solver.
#[derive(Debug, Clone, Copy)]
pub struct SolverConfig {
    /// A sum of squared residuals (or gradient component) at or below this
    /// ends the run as converged.
    pub tolerance: f64,
    /// Iteration budget.
    pub max_iterations: u32,
    /// Relative bump for central-difference Jacobians.
    pub step_size: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-12,
            max_iterations: 200,
            step_size: 1e-7,
        }
    }
}

impl SolverConfig {
    /// Replaces the iteration budget.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Replaces the convergence tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }
}

/// Outcome of a least-squares run.
#[derive(Debug, Clone)]
pub struct LeastSquaresFit {
    /// Best parameters found.
    pub parameters: Vec<f64>,
    /// Sum of squared residuals at `parameters`.
    pub ssr: f64,
    /// Iterations used.
    pub iterations: u32,
    /// False when the iteration budget ran out first.
    pub converged: bool,
}
