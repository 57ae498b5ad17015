//! Frequency and compounding types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Compounding frequency of a market convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Frequency {
    /// Annual (1 per year)
    #[default]
    Annual,
    /// Semi-annual (2 per year)
    SemiAnnual,
    /// Quarterly (4 per year)
    Quarterly,
    /// Monthly (12 per year)
    Monthly,
}

impl Frequency {
    /// Returns the number of periods per year.
    #[must_use]
    pub fn periods_per_year(&self) -> u32 {
        match self {
            Frequency::Annual => 1,
            Frequency::SemiAnnual => 2,
            Frequency::Quarterly => 4,
            Frequency::Monthly => 12,
        }
    }

    /// Returns the compounding rule implied by this frequency.
    #[must_use]
    pub fn compounding(&self) -> Compounding {
        Compounding::from(*self)
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Frequency::Annual => "Annual",
            Frequency::SemiAnnual => "Semi-Annual",
            Frequency::Quarterly => "Quarterly",
            Frequency::Monthly => "Monthly",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Frequency {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "annual" | "a" | "1" => Ok(Frequency::Annual),
            "semiannual" | "s" | "2" => Ok(Frequency::SemiAnnual),
            "quarterly" | "q" | "4" => Ok(Frequency::Quarterly),
            "monthly" | "m" | "12" => Ok(Frequency::Monthly),
            _ => Err(CoreError::unknown_frequency(s)),
        }
    }
}

/// Periodic compounding of a zero rate.
///
/// Converts between a zero rate (decimal, e.g. `0.04`) and a discount
/// factor at time `t` (in years): `DF = (1 + r/m)^(-m·t)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Compounding {
    /// Once a year
    #[default]
    Annual,
    /// Twice a year
    SemiAnnual,
    /// Four times a year
    Quarterly,
    /// Twelve times a year
    Monthly,
}

impl Compounding {
    /// Compounding periods per year (`m`).
    #[must_use]
    pub fn periods_per_year(&self) -> u32 {
        match self {
            Compounding::Annual => 1,
            Compounding::SemiAnnual => 2,
            Compounding::Quarterly => 4,
            Compounding::Monthly => 12,
        }
    }

    /// Discount factor for `rate` over `t` years.
    ///
    /// Returns exactly `1.0` for `t <= 0`.
    #[must_use]
    pub fn discount_factor(&self, rate: f64, t: f64) -> f64 {
        if t <= 0.0 {
            return 1.0;
        }
        let m = f64::from(self.periods_per_year());
        (1.0 + rate / m).powf(-m * t)
    }

    /// Zero rate implied by discount factor `df` at `t` years,
    /// `m·(DF^(−1/(m·t)) − 1)`.
    ///
    /// Returns `0.0` for `t <= 0`, where the rate is undefined.
    #[must_use]
    pub fn zero_rate(&self, df: f64, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        let m = f64::from(self.periods_per_year());
        m * (df.powf(-1.0 / (m * t)) - 1.0)
    }
}

impl fmt::Display for Compounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Compounding::Annual => "Annual",
            Compounding::SemiAnnual => "Semi-Annual",
            Compounding::Quarterly => "Quarterly",
            Compounding::Monthly => "Monthly",
        };
        write!(f, "{name}")
    }
}

impl From<Frequency> for Compounding {
    fn from(freq: Frequency) -> Self {
        match freq {
            Frequency::Annual => Compounding::Annual,
            Frequency::SemiAnnual => Compounding::SemiAnnual,
            Frequency::Quarterly => Compounding::Quarterly,
            Frequency::Monthly => Compounding::Monthly,
        }
    }
}
