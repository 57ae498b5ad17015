//! Bootstrapping methods.
//!
//! Six strategies turn a [`CurveInput`] into a [`FittedCurve`]:
//!
//! | Method | Id | Interpolated quantity | Seeding |
//! |--------|----|-----------------------|---------|
//! | Linear | `linear` | zero rate | rates as convention zero rates |
//! | Cubic spline | `cubic_spline` | zero rate | rates as convention zero rates |
//! | Nelson-Siegel | `nelson_siegel` | fitted zero rate | least squares over all points |
//! | Bloomberg | `bloomberg` | DF, log-linear | `DF = (1 + r)^-t` |
//! | QL log-linear | `quantlib_log_linear` | DF, log-linear | convention compounding |
//! | QL log-cubic | `quantlib_log_cubic` | `ln DF`, natural spline | convention compounding |

mod log_discount;
mod nelson_siegel;
mod rate_space;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use zerocurve_config::NelsonSiegelSettings;
use zerocurve_core::Compounding;

use crate::assemble::MIN_CURVE_POINTS;
use crate::curve::FittedCurve;
use crate::error::{CurveError, CurveResult};
use crate::observation::CurveInput;

/// Curve construction methodology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BootstrapMethod {
    /// Linear interpolation of zero rates.
    #[default]
    #[serde(rename = "linear")]
    Linear,
    /// Natural cubic spline through zero rates.
    #[serde(rename = "cubic_spline")]
    CubicSpline,
    /// Nelson-Siegel least-squares fit.
    #[serde(rename = "nelson_siegel")]
    NelsonSiegel,
    /// Log-linear discount factors seeded with annual compounding.
    #[serde(rename = "bloomberg")]
    Bloomberg,
    /// Log-linear discount factors seeded with the convention compounding.
    #[serde(rename = "quantlib_log_linear")]
    QlLogLinear,
    /// Natural cubic spline on log discount factors.
    #[serde(rename = "quantlib_log_cubic")]
    QlLogCubic,
}

impl BootstrapMethod {
    /// Every method, in presentation order.
    pub const ALL: [BootstrapMethod; 6] = [
        BootstrapMethod::Linear,
        BootstrapMethod::CubicSpline,
        BootstrapMethod::NelsonSiegel,
        BootstrapMethod::Bloomberg,
        BootstrapMethod::QlLogLinear,
        BootstrapMethod::QlLogCubic,
    ];

    /// Stable identifier, as accepted by [`FromStr`].
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            BootstrapMethod::Linear => "linear",
            BootstrapMethod::CubicSpline => "cubic_spline",
            BootstrapMethod::NelsonSiegel => "nelson_siegel",
            BootstrapMethod::Bloomberg => "bloomberg",
            BootstrapMethod::QlLogLinear => "quantlib_log_linear",
            BootstrapMethod::QlLogCubic => "quantlib_log_cubic",
        }
    }

    /// Display name.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            BootstrapMethod::Linear => "Simple/Linear",
            BootstrapMethod::CubicSpline => "Cubic Spline",
            BootstrapMethod::NelsonSiegel => "Nelson-Siegel",
            BootstrapMethod::Bloomberg => "Bloomberg",
            BootstrapMethod::QlLogLinear => "QL Log-Linear",
            BootstrapMethod::QlLogCubic => "QL Log-Cubic",
        }
    }

    /// One-line description.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            BootstrapMethod::Linear => "Linear interpolation",
            BootstrapMethod::CubicSpline => "Natural cubic splines",
            BootstrapMethod::NelsonSiegel => "Parametric model",
            BootstrapMethod::Bloomberg => "Log-DF interpolation",
            BootstrapMethod::QlLogLinear => "Linear log(DF)",
            BootstrapMethod::QlLogCubic => "Cubic log(DF)",
        }
    }

    /// True for the one method whose interpolant may overshoot into
    /// negative zero rates between positive inputs (cubic spline on `ln DF`).
    ///
    /// Every other method must keep discount factors at or below 1.
    #[must_use]
    pub fn allows_overshoot(self) -> bool {
        matches!(self, BootstrapMethod::QlLogCubic)
    }

    /// Fits `input` with this method.
    ///
    /// `compounding` is the currency convention's; it is used for seeding
    /// (except [`Bloomberg`](Self::Bloomberg)) and for flat extrapolation.
    ///
    /// # Errors
    ///
    /// `InsufficientData` for fewer than two points, `FitDivergence` when the
    /// Nelson-Siegel fit fails, `Math` if an interpolator rejects the data.
    pub fn fit(
        self,
        input: &CurveInput,
        compounding: Compounding,
        nelson_siegel: &NelsonSiegelSettings,
    ) -> CurveResult<FittedCurve> {
        if input.len() < MIN_CURVE_POINTS {
            return Err(CurveError::insufficient_data(MIN_CURVE_POINTS, input.len()));
        }

        match self {
            BootstrapMethod::Linear => rate_space::fit_linear(input, compounding),
            BootstrapMethod::CubicSpline => rate_space::fit_cubic_spline(input, compounding),
            BootstrapMethod::NelsonSiegel => {
                nelson_siegel::fit_nelson_siegel(input, compounding, nelson_siegel)
            }
            BootstrapMethod::Bloomberg => log_discount::fit_bloomberg(input, compounding),
            BootstrapMethod::QlLogLinear => log_discount::fit_ql_log_linear(input, compounding),
            BootstrapMethod::QlLogCubic => log_discount::fit_ql_log_cubic(input, compounding),
        }
    }
}

impl fmt::Display for BootstrapMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for BootstrapMethod {
    type Err = CurveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim().to_ascii_lowercase();
        BootstrapMethod::ALL
            .into_iter()
            .find(|m| m.id() == id)
            .ok_or_else(|| CurveError::unknown_method(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_roundtrip() {
        for method in BootstrapMethod::ALL {
            assert_eq!(method.id().parse::<BootstrapMethod>().unwrap(), method);
            assert_eq!(method.to_string(), method.id());
        }
        assert_eq!(
            " Bloomberg ".parse::<BootstrapMethod>().unwrap(),
            BootstrapMethod::Bloomberg
        );
    }

    #[test]
    fn test_unknown_method() {
        assert_eq!(
            "svensson".parse::<BootstrapMethod>(),
            Err(CurveError::unknown_method("svensson"))
        );
        assert!("ql_log_linear".parse::<BootstrapMethod>().is_err());
    }

    #[test]
    fn test_serde_uses_ids() {
        let json = serde_json::to_string(&BootstrapMethod::QlLogCubic).unwrap();
        assert_eq!(json, "\"quantlib_log_cubic\"");
        let back: BootstrapMethod = serde_json::from_str("\"cubic_spline\"").unwrap();
        assert_eq!(back, BootstrapMethod::CubicSpline);
    }

    #[test]
    fn test_only_log_cubic_allows_overshoot() {
        let allowed: Vec<BootstrapMethod> = BootstrapMethod::ALL
            .into_iter()
            .filter(|m| m.allows_overshoot())
            .collect();
        assert_eq!(allowed, [BootstrapMethod::QlLogCubic]);
    }

    #[test]
    fn test_labels() {
        assert_eq!(BootstrapMethod::QlLogLinear.label(), "QL Log-Linear");
        assert_eq!(BootstrapMethod::NelsonSiegel.description(), "Parametric model");
    }
}
