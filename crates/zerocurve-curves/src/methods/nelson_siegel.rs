//! Nelson-Siegel least-squares fit.
//!
//! Parameters are `[β₀, β₁, β₂, ln τ]`; optimizing `ln τ` keeps the decay
//! factor positive without constraints.

use log::debug;
use zerocurve_config::NelsonSiegelSettings;
use zerocurve_core::Compounding;
use zerocurve_math::interpolation::NelsonSiegel;
use zerocurve_math::optimization::{LevenbergMarquardt, SolverConfig};

use crate::curve::{CurveShape, FittedCurve};
use crate::error::{CurveError, CurveResult};
use crate::observation::CurveInput;

pub(super) fn fit_nelson_siegel(
    input: &CurveInput,
    compounding: Compounding,
    settings: &NelsonSiegelSettings,
) -> CurveResult<FittedCurve> {
    let tenors = input.tenors();
    let rates = input.rates();
    let initial = initial_guess(&tenors, &rates, settings.min_initial_tau);

    let solver = LevenbergMarquardt::new(
        SolverConfig::default()
            .with_max_iterations(settings.max_iterations)
            .with_tolerance(settings.tolerance),
    );
    let result = solver.minimize(&initial, |p| residuals(p, &tenors, &rates))?;

    if !result.converged {
        return Err(CurveError::fit_divergence(
            result.iterations,
            result.ssr,
            "iteration budget exhausted",
        ));
    }

    let p = &result.parameters;
    let model = NelsonSiegel::new(p[0], p[1], p[2], p[3].exp()).map_err(|e| {
        CurveError::fit_divergence(result.iterations, result.ssr, e.to_string())
    })?;

    debug!(
        "nelson-siegel fit: {:?} after {} iterations (ssr {:.3e})",
        model.parameters(),
        result.iterations,
        result.ssr
    );

    let (min, max) = (tenors[0], tenors[tenors.len() - 1]);
    Ok(FittedCurve::new(
        CurveShape::Parametric(model),
        compounding,
        min,
        max,
    ))
}

/// `[longest rate, shortest - longest, 0, ln(max(median tenor, min_tau))]`.
fn initial_guess(tenors: &[f64], rates: &[f64], min_tau: f64) -> [f64; 4] {
    let n = tenors.len();
    let median = if n % 2 == 1 {
        tenors[n / 2]
    } else {
        0.5 * (tenors[n / 2 - 1] + tenors[n / 2])
    };
    let (short, long) = (rates[0], rates[n - 1]);

    [long, short - long, 0.0, median.max(min_tau).ln()]
}

fn residuals(p: &[f64], tenors: &[f64], rates: &[f64]) -> Vec<f64> {
    let tau = p[3].exp();
    tenors
        .iter()
        .zip(rates)
        .map(|(&t, &r)| {
            let (l1, l2) = NelsonSiegel::loadings(t, tau);
            p[0] + p[1] * l1 + p[2] * l2 - r
        })
        .collect()
}
