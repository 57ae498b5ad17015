//! Day count conventions.
//!
//! Curve tenors in Zerocurve are already year fractions, so day counts are
//! carried as convention metadata: they label how a currency's money-market
//! and swap rates are quoted and are reported alongside every curve.
//!
//! | Convention | Year basis | Typical use |
//! |------------|-----------:|-------------|
//! | ACT/360 | 360 | USD, EUR, CHF money markets |
//! | ACT/365 | 365 | GBP, JPY, CAD, SGD |
//! | ACT/ACT | 365.25 | Government bonds |
//! | 30/360 | 360 | Legacy fixed legs |

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Enumeration of the supported day count conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DayCountConvention {
    /// Actual/360 - money market convention
    #[default]
    Act360,
    /// Actual/365 Fixed
    Act365Fixed,
    /// Actual/Actual ISDA
    ActActIsda,
    /// 30/360 bond basis
    Thirty360,
}

impl DayCountConvention {
    /// Returns the market name of the convention (e.g. `"ACT/360"`).
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            DayCountConvention::Act360 => "ACT/360",
            DayCountConvention::Act365Fixed => "ACT/365",
            DayCountConvention::ActActIsda => "ACT/ACT",
            DayCountConvention::Thirty360 => "30/360",
        }
    }

    /// Returns the nominal number of days in a year under this convention.
    #[must_use]
    pub fn year_basis(&self) -> f64 {
        match self {
            DayCountConvention::Act360 | DayCountConvention::Thirty360 => 360.0,
            DayCountConvention::Act365Fixed => 365.0,
            DayCountConvention::ActActIsda => 365.25,
        }
    }

    /// Year fraction of `days` calendar days under this convention's basis.
    #[must_use]
    pub fn year_fraction_from_days(&self, days: i64) -> f64 {
        days as f64 / self.year_basis()
    }
}

impl fmt::Display for DayCountConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for DayCountConvention {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_uppercase();

        match normalized.as_str() {
            "ACT360" | "A360" => Ok(DayCountConvention::Act360),
            "ACT365" | "ACT365F" | "ACT365FIXED" | "A365" => Ok(DayCountConvention::Act365Fixed),
            "ACTACT" | "ACTACTISDA" => Ok(DayCountConvention::ActActIsda),
            "30360" | "THIRTY360" => Ok(DayCountConvention::Thirty360),
            _ => Err(CoreError::unknown_day_count(s)),
        }
    }
}
