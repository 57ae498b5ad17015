//! Rate-domain methods: observed rates are interpolated as zero rates.

use zerocurve_core::Compounding;
use zerocurve_math::interpolation::{CubicSpline, Interpolator, LinearInterpolator};

use crate::curve::{CurveShape, FittedCurve};
use crate::error::CurveResult;
use crate::observation::CurveInput;

pub(super) fn fit_linear(input: &CurveInput, compounding: Compounding) -> CurveResult<FittedCurve> {
    let interp = LinearInterpolator::new(input.tenors(), input.rates())?;
    Ok(zero_rate_curve(input, compounding, Box::new(interp)))
}

/// With two points the natural spline degenerates to the straight line.
pub(super) fn fit_cubic_spline(
    input: &CurveInput,
    compounding: Compounding,
) -> CurveResult<FittedCurve> {
    let spline = CubicSpline::new(input.tenors(), input.rates())?;
    Ok(zero_rate_curve(input, compounding, Box::new(spline)))
}

fn zero_rate_curve(
    input: &CurveInput,
    compounding: Compounding,
    interp: Box<dyn Interpolator>,
) -> FittedCurve {
    let (min, max) = (input.min_tenor().unwrap_or(0.0), input.max_tenor().unwrap_or(0.0));
    FittedCurve::new(CurveShape::ZeroRate(interp), compounding, min, max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observation::{InstrumentSource, RateObservation};
    use approx::assert_relative_eq;

    fn input(points: &[(f64, f64)]) -> CurveInput {
        CurveInput::from_sorted(
            points
                .iter()
                .map(|(t, r)| RateObservation::new(*t, *r, InstrumentSource::Swap).unwrap())
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_linear_reprices_inputs() {
        let curve = fit_linear(&input(&[(1.0, 0.04), (3.0, 0.05)]), Compounding::Annual).unwrap();

        assert_relative_eq!(curve.discount_factor(1.0).unwrap(), 1.0 / 1.04, epsilon = 1e-14);
        assert_relative_eq!(curve.zero_rate(2.0).unwrap(), 0.045, epsilon = 1e-14);
        assert_relative_eq!(
            curve.discount_factor(2.0).unwrap(),
            1.045_f64.powf(-2.0),
            epsilon = 1e-14
        );
    }

    #[test]
    fn test_flat_extrapolation() {
        let curve = fit_linear(
            &input(&[(1.0, 0.04), (3.0, 0.05)]),
            Compounding::SemiAnnual,
        )
        .unwrap();

        assert_relative_eq!(curve.zero_rate(10.0).unwrap(), 0.05, epsilon = 1e-14);
        assert_relative_eq!(
            curve.discount_factor(10.0).unwrap(),
            Compounding::SemiAnnual.discount_factor(0.05, 10.0),
            epsilon = 1e-14
        );
        assert_relative_eq!(
            curve.discount_factor(0.5).unwrap(),
            Compounding::SemiAnnual.discount_factor(0.04, 0.5),
            epsilon = 1e-14
        );
        assert_eq!(curve.discount_factor(0.0).unwrap(), 1.0);
    }

    #[test]
    fn test_cubic_spline_two_points() {
        let curve =
            fit_cubic_spline(&input(&[(1.0, 0.04), (3.0, 0.05)]), Compounding::Annual).unwrap();
        assert_relative_eq!(curve.zero_rate(2.0).unwrap(), 0.045, epsilon = 1e-14);
    }

    #[test]
    fn test_cubic_spline_smooth_between_knots() {
        let curve = fit_cubic_spline(
            &input(&[(0.5, 0.030), (2.0, 0.035), (5.0, 0.040), (10.0, 0.042)]),
            Compounding::Annual,
        )
        .unwrap();

        let z = curve.zero_rate(3.5).unwrap();
        assert!(z > 0.035 && z < 0.041);
        assert_relative_eq!(curve.zero_rate(5.0).unwrap(), 0.040, epsilon = 1e-14);
    }
}
