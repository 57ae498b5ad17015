//! Discount-factor methods: seed a DF per observation, then interpolate in
//! log space.

use zerocurve_core::Compounding;
use zerocurve_math::interpolation::{CubicSpline, LogLinearInterpolator};

use crate::curve::{CurveShape, FittedCurve};
use crate::error::CurveResult;
use crate::observation::CurveInput;

/// Seeds with the quote's own annual compounding, `DF = (1 + r)^-t`.
pub(super) fn fit_bloomberg(input: &CurveInput, compounding: Compounding) -> CurveResult<FittedCurve> {
    log_linear(input, Compounding::Annual, compounding)
}

pub(super) fn fit_ql_log_linear(
    input: &CurveInput,
    compounding: Compounding,
) -> CurveResult<FittedCurve> {
    log_linear(input, compounding, compounding)
}

/// Natural spline on `ln DF`; may overshoot between knots.
pub(super) fn fit_ql_log_cubic(
    input: &CurveInput,
    compounding: Compounding,
) -> CurveResult<FittedCurve> {
    let log_dfs = seed_discount_factors(input, compounding)
        .into_iter()
        .map(f64::ln)
        .collect();
    let spline = CubicSpline::new(input.tenors(), log_dfs)?;
    Ok(curve(input, CurveShape::LogDiscount(spline), compounding))
}

fn log_linear(
    input: &CurveInput,
    seeding: Compounding,
    compounding: Compounding,
) -> CurveResult<FittedCurve> {
    let interp = LogLinearInterpolator::new(input.tenors(), seed_discount_factors(input, seeding))?;
    Ok(curve(input, CurveShape::Discount(interp), compounding))
}

pub(crate) fn seed_discount_factors(input: &CurveInput, seeding: Compounding) -> Vec<f64> {
    input
        .points()
        .iter()
        .map(|obs| seeding.discount_factor(obs.rate(), obs.tenor_years()))
        .collect()
}

fn curve(input: &CurveInput, shape: CurveShape, compounding: Compounding) -> FittedCurve {
    let (min, max) = (input.min_tenor().unwrap_or(0.0), input.max_tenor().unwrap_or(0.0));
    FittedCurve::new(shape, compounding, min, max)
}
