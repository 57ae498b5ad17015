//! Maturity labels.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Days per year used for day and week labels.
const DAYS_PER_YEAR: f64 = 365.0;

/// Unit of a tenor label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TenorUnit {
    /// Calendar days
    Days,
    /// Weeks
    Weeks,
    /// Months
    Months,
    /// Years
    Years,
}

impl TenorUnit {
    fn suffix(self) -> char {
        match self {
            TenorUnit::Days => 'D',
            TenorUnit::Weeks => 'W',
            TenorUnit::Months => 'M',
            TenorUnit::Years => 'Y',
        }
    }
}

/// A parsed maturity label such as `3M`, `10Y`, `1.5Y` or `O/N`.
///
/// # Example
///
/// ```rust
/// use zerocurve_core::Tenor;
///
/// let tenor: Tenor = "18m".parse().unwrap();
/// assert_eq!(tenor.to_years(), 1.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tenor {
    amount: f64,
    unit: TenorUnit,
}

impl Tenor {
    /// Creates a tenor. Returns `None` for non-finite or non-positive amounts.
    #[must_use]
    pub fn new(amount: f64, unit: TenorUnit) -> Option<Self> {
        (amount.is_finite() && amount > 0.0).then_some(Self { amount, unit })
    }

    /// Returns the numeric part of the label.
    #[must_use]
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Returns the unit of the label.
    #[must_use]
    pub fn unit(&self) -> TenorUnit {
        self.unit
    }

    /// Converts to a year fraction.
    ///
    /// Days and weeks use a 365-day year, months are twelfths of a year.
    #[must_use]
    pub fn to_years(&self) -> f64 {
        match self.unit {
            TenorUnit::Days => self.amount / DAYS_PER_YEAR,
            TenorUnit::Weeks => self.amount * 7.0 / DAYS_PER_YEAR,
            TenorUnit::Months => self.amount / 12.0,
            TenorUnit::Years => self.amount,
        }
    }
}

impl fmt::Display for Tenor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.unit.suffix())
    }
}

impl FromStr for Tenor {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label: String = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_ascii_uppercase();

        match label.as_str() {
            "ON" | "O/N" => return Ok(Self { amount: 1.0, unit: TenorUnit::Days }),
            "TN" | "T/N" => return Ok(Self { amount: 2.0, unit: TenorUnit::Days }),
            _ => {}
        }

        let unit = match label.chars().last() {
            Some('D') => TenorUnit::Days,
            Some('W') => TenorUnit::Weeks,
            Some('M') => TenorUnit::Months,
            Some('Y') => TenorUnit::Years,
            _ => return Err(CoreError::invalid_tenor(s)),
        };

        let amount: f64 = label[..label.len() - 1]
            .parse()
            .map_err(|_| CoreError::invalid_tenor(s))?;

        Self::new(amount, unit).ok_or_else(|| CoreError::invalid_tenor(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_standard_labels() {
        assert_eq!("3M".parse::<Tenor>().unwrap().to_years(), 0.25);
        assert_eq!("6M".parse::<Tenor>().unwrap().to_years(), 0.5);
        assert_eq!("1Y".parse::<Tenor>().unwrap().to_years(), 1.0);
        assert_eq!("10Y".parse::<Tenor>().unwrap().to_years(), 10.0);
    }

    #[test]
    fn test_case_and_whitespace() {
        assert_eq!(" 3 m ".parse::<Tenor>().unwrap().to_years(), 0.25);
        assert_eq!("2y".parse::<Tenor>().unwrap().to_years(), 2.0);
    }

    #[test]
    fn test_fractional_amount() {
        assert_eq!("1.5Y".parse::<Tenor>().unwrap().to_years(), 1.5);
    }

    #[test]
    fn test_days_and_weeks() {
        assert_relative_eq!("1W".parse::<Tenor>().unwrap().to_years(), 7.0 / 365.0);
        assert_relative_eq!("30D".parse::<Tenor>().unwrap().to_years(), 30.0 / 365.0);
        assert_relative_eq!("O/N".parse::<Tenor>().unwrap().to_years(), 1.0 / 365.0);
        assert_relative_eq!("TN".parse::<Tenor>().unwrap().to_years(), 2.0 / 365.0);
    }

    #[test]
    fn test_invalid_labels() {
        for label in ["", "M", "3Q", "abc", "0M", "-1Y", "Mar 2026", "NaNY"] {
            assert!(label.parse::<Tenor>().is_err(), "{label} should not parse");
        }
    }

    #[test]
    fn test_display() {
        let tenor: Tenor = "3M".parse().unwrap();
        assert_eq!(tenor.to_string(), "3M");
    }
}
