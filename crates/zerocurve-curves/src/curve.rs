//! Fitted curve shapes and bootstrapped results.

use serde::{Deserialize, Serialize};
use zerocurve_core::Compounding;
use zerocurve_math::interpolation::{CubicSpline, Interpolator, LogLinearInterpolator, NelsonSiegel};

use crate::conventions::BasisConvention;
use crate::error::CurveResult;
use crate::methods::BootstrapMethod;

/// Continuous representation a method produces.
#[derive(Debug)]
pub(crate) enum CurveShape {
    /// Zero rates (decimal, curve compounding) by tenor.
    ZeroRate(Box<dyn Interpolator>),
    /// Nelson-Siegel zero rates.
    Parametric(NelsonSiegel),
    /// Discount factors, log-linear in tenor.
    Discount(LogLinearInterpolator),
    /// Natural cubic spline on `ln DF`.
    LogDiscount(CubicSpline),
}

/// A tenor -> discount factor function fitted to a [`CurveInput`](crate::CurveInput).
///
/// Inside `[min_tenor, max_tenor]` the method's interpolant applies. Outside
/// it the zero rate is held flat at the nearest edge. `DF(t <= 0) = 1`.
#[derive(Debug)]
pub struct FittedCurve {
    shape: CurveShape,
    compounding: Compounding,
    min_tenor: f64,
    max_tenor: f64,
}

impl FittedCurve {
    pub(crate) fn new(
        shape: CurveShape,
        compounding: Compounding,
        min_tenor: f64,
        max_tenor: f64,
    ) -> Self {
        Self {
            shape,
            compounding,
            min_tenor,
            max_tenor,
        }
    }

    /// Shortest fitted tenor.
    pub fn min_tenor(&self) -> f64 {
        self.min_tenor
    }

    /// Longest fitted tenor.
    pub fn max_tenor(&self) -> f64 {
        self.max_tenor
    }

    /// Compounding in which zero rates are expressed.
    pub fn compounding(&self) -> Compounding {
        self.compounding
    }

    /// Fitted Nelson-Siegel parameters (β₀, β₁, β₂, τ), if this is a
    /// Nelson-Siegel curve.
    pub fn nelson_siegel_parameters(&self) -> Option<(f64, f64, f64, f64)> {
        match &self.shape {
            CurveShape::Parametric(ns) => Some(ns.parameters()),
            _ => None,
        }
    }

    /// Discount factor at `t` years.
    pub fn discount_factor(&self, t: f64) -> CurveResult<f64> {
        if t <= 0.0 {
            return Ok(1.0);
        }
        if t < self.min_tenor || t > self.max_tenor {
            let edge = t.clamp(self.min_tenor, self.max_tenor);
            let rate = self.zero_rate_inside(edge)?;
            return Ok(self.compounding.discount_factor(rate, t));
        }

        match &self.shape {
            CurveShape::ZeroRate(_) | CurveShape::Parametric(_) => {
                let rate = self.zero_rate_inside(t)?;
                Ok(self.compounding.discount_factor(rate, t))
            }
            CurveShape::Discount(interp) => Ok(interp.interpolate(t)?),
            CurveShape::LogDiscount(spline) => Ok(spline.interpolate(t)?.exp()),
        }
    }

    /// Zero rate (decimal, in [`compounding`](Self::compounding)) at `t` years.
    ///
    /// For `t <= 0` this is the short-end rate.
    pub fn zero_rate(&self, t: f64) -> CurveResult<f64> {
        self.zero_rate_inside(t.clamp(self.min_tenor, self.max_tenor))
    }

    fn zero_rate_inside(&self, t: f64) -> CurveResult<f64> {
        match &self.shape {
            CurveShape::ZeroRate(interp) => Ok(interp.interpolate(t)?),
            CurveShape::Parametric(ns) => Ok(ns.interpolate(t)?),
            CurveShape::Discount(_) | CurveShape::LogDiscount(_) => {
                let df = self.discount_factor(t)?;
                Ok(self.compounding.zero_rate(df, t))
            }
        }
    }
}

/// One sampled point of a bootstrapped curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountPoint {
    /// Tenor in years.
    pub tenor: f64,
    /// Discount factor.
    pub discount_factor: f64,
    /// Zero rate in percent, in the currency convention's compounding.
    pub zero_rate: f64,
}

/// The discrete output of one bootstrap call.
///
/// Points are sorted strictly ascending by tenor.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BootstrappedCurve {
    currency: String,
    method: BootstrapMethod,
    convention: BasisConvention,
    input_points: usize,
    discount_factors: Vec<DiscountPoint>,
}

impl BootstrappedCurve {
    pub(crate) fn new(
        currency: String,
        method: BootstrapMethod,
        convention: BasisConvention,
        input_points: usize,
        discount_factors: Vec<DiscountPoint>,
    ) -> Self {
        Self {
            currency,
            method,
            convention,
            input_points,
            discount_factors,
        }
    }

    /// Upper-case currency code.
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Method that produced the curve.
    pub fn method(&self) -> BootstrapMethod {
        self.method
    }

    /// Convention used for compounding and reported with the curve.
    pub fn convention(&self) -> BasisConvention {
        self.convention
    }

    /// Number of assembled observations the curve was fitted to.
    pub fn input_points(&self) -> usize {
        self.input_points
    }

    /// Sampled points, ascending by tenor.
    pub fn discount_factors(&self) -> &[DiscountPoint] {
        &self.discount_factors
    }

    /// Longest sampled tenor.
    pub fn max_tenor(&self) -> Option<f64> {
        self.discount_factors.last().map(|p| p.tenor)
    }

    /// The sampled point at `tenor`, if present (within 1e-9).
    pub fn point_at(&self, tenor: f64) -> Option<&DiscountPoint> {
        self.discount_factors
            .iter()
            .find(|p| (p.tenor - tenor).abs() < 1e-9)
    }

    /// Headline point: the 10Y point, else the middle point.
    pub fn headline_point(&self) -> Option<&DiscountPoint> {
        self.point_at(10.0)
            .or_else(|| self.discount_factors.get(self.discount_factors.len() / 2))
    }

    /// Zero rate (percent) of the [`headline_point`](Self::headline_point).
    pub fn headline_zero_rate(&self) -> Option<f64> {
        self.headline_point().map(|p| p.zero_rate)
    }
}
