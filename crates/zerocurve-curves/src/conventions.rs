//! Currency basis conventions.
//!
//! Each currency maps to a day count label and a compounding frequency. The
//! frequency drives the rate <-> discount factor conversions; the day count
//! is reported with the curve.
//!
//! | Currency | Day count | Frequency |
//! |----------|-----------|-----------|
//! | EUR | ACT/360 | Annual |
//! | USD | ACT/360 | Semi-Annual |
//! | GBP | ACT/365 | Semi-Annual |
//! | CHF | ACT/360 | Annual |
//! | JPY | ACT/365 | Semi-Annual |
//! | CAD | ACT/365 | Semi-Annual |
//! | SGD | ACT/365 | Semi-Annual |
//! | other | ACT/360 | Annual |

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use zerocurve_config::CurveSettings;
use zerocurve_core::{Compounding, DayCountConvention, Frequency};

/// Day count and compounding frequency of a currency's curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BasisConvention {
    /// Day count label.
    pub day_count: DayCountConvention,
    /// Compounding frequency.
    pub frequency: Frequency,
}

impl BasisConvention {
    /// Convention used for currencies without an entry.
    pub const FALLBACK: BasisConvention =
        BasisConvention::new(DayCountConvention::Act360, Frequency::Annual);

    /// Creates a convention.
    #[must_use]
    pub const fn new(day_count: DayCountConvention, frequency: Frequency) -> Self {
        Self {
            day_count,
            frequency,
        }
    }

    /// Compounding rule implied by the frequency.
    #[must_use]
    pub fn compounding(&self) -> Compounding {
        self.frequency.compounding()
    }
}

impl Default for BasisConvention {
    fn default() -> Self {
        Self::FALLBACK
    }
}

impl fmt::Display for BasisConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.day_count, self.frequency)
    }
}

const STANDARD_CONVENTIONS: [(&str, BasisConvention); 7] = [
    (
        "EUR",
        BasisConvention::new(DayCountConvention::Act360, Frequency::Annual),
    ),
    (
        "USD",
        BasisConvention::new(DayCountConvention::Act360, Frequency::SemiAnnual),
    ),
    (
        "GBP",
        BasisConvention::new(DayCountConvention::Act365Fixed, Frequency::SemiAnnual),
    ),
    (
        "CHF",
        BasisConvention::new(DayCountConvention::Act360, Frequency::Annual),
    ),
    (
        "JPY",
        BasisConvention::new(DayCountConvention::Act365Fixed, Frequency::SemiAnnual),
    ),
    (
        "CAD",
        BasisConvention::new(DayCountConvention::Act365Fixed, Frequency::SemiAnnual),
    ),
    (
        "SGD",
        BasisConvention::new(DayCountConvention::Act365Fixed, Frequency::SemiAnnual),
    ),
];

/// Standard convention of `currency` (case-insensitive ISO code).
///
/// Unknown currencies resolve to [`BasisConvention::FALLBACK`].
///
/// ```rust
/// use zerocurve_curves::conventions::basis_convention;
/// use zerocurve_core::Frequency;
///
/// assert_eq!(basis_convention("usd").frequency, Frequency::SemiAnnual);
/// assert_eq!(basis_convention("XYZ").frequency, Frequency::Annual);
/// ```
pub fn basis_convention(currency: &str) -> BasisConvention {
    let code = currency.trim();
    STANDARD_CONVENTIONS
        .iter()
        .find(|(ccy, _)| ccy.eq_ignore_ascii_case(code))
        .map_or(BasisConvention::FALLBACK, |(_, convention)| *convention)
}

/// Currencies with a standard convention entry, in table order.
pub fn standard_currencies() -> impl Iterator<Item = &'static str> {
    STANDARD_CONVENTIONS.iter().map(|(ccy, _)| *ccy)
}

/// Standard conventions plus per-currency overrides.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConventionTable {
    overrides: BTreeMap<String, BasisConvention>,
}

impl ConventionTable {
    /// Table with the standard conventions only.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Table with the overrides configured in `settings`.
    #[must_use]
    pub fn from_settings(settings: &CurveSettings) -> Self {
        let overrides = settings
            .conventions
            .iter()
            .map(|(ccy, o)| {
                (
                    ccy.to_ascii_uppercase(),
                    BasisConvention::new(o.day_count, o.frequency),
                )
            })
            .collect();
        Self { overrides }
    }

    /// Adds or replaces the convention of one currency.
    #[must_use]
    pub fn with_override(mut self, currency: &str, convention: BasisConvention) -> Self {
        self.overrides
            .insert(currency.trim().to_ascii_uppercase(), convention);
        self
    }

    /// Resolves the convention of `currency`, preferring overrides.
    pub fn resolve(&self, currency: &str) -> BasisConvention {
        self.overrides
            .get(&currency.trim().to_ascii_uppercase())
            .copied()
            .unwrap_or_else(|| basis_convention(currency))
    }

    /// True when `currency` has an override.
    pub fn is_overridden(&self, currency: &str) -> bool {
        self.overrides
            .contains_key(&currency.trim().to_ascii_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table() {
        let usd = basis_convention("USD");
        assert_eq!(usd.day_count, DayCountConvention::Act360);
        assert_eq!(usd.frequency, Frequency::SemiAnnual);
        assert_eq!(usd.compounding(), Compounding::SemiAnnual);

        let gbp = basis_convention("gbp");
        assert_eq!(gbp.day_count, DayCountConvention::Act365Fixed);

        let eur = basis_convention(" Eur ");
        assert_eq!(eur.frequency, Frequency::Annual);
        assert_eq!(eur.to_string(), "ACT/360 Annual");
    }

    #[test]
    fn test_fallback() {
        assert_eq!(basis_convention("AUD"), BasisConvention::FALLBACK);
        assert_eq!(basis_convention(""), BasisConvention::FALLBACK);
        assert_eq!(BasisConvention::default().compounding(), Compounding::Annual);
    }

    #[test]
    fn test_standard_currencies() {
        let codes: Vec<&str> = standard_currencies().collect();
        assert_eq!(codes.len(), 7);
        assert!(codes.contains(&"SGD"));
    }

    #[test]
    fn test_overrides() {
        let quarterly = BasisConvention::new(DayCountConvention::Act365Fixed, Frequency::Quarterly);
        let table = ConventionTable::new().with_override("aud", quarterly);

        assert_eq!(table.resolve("AUD"), quarterly);
        assert!(table.is_overridden("Aud"));
        assert_eq!(table.resolve("USD"), basis_convention("USD"));
    }

    #[test]
    fn test_from_settings() {
        let settings = CurveSettings::default().with_convention(
            "USD",
            DayCountConvention::Act360,
            Frequency::Annual,
        );
        let table = ConventionTable::from_settings(&settings);
        assert_eq!(table.resolve("usd").frequency, Frequency::Annual);
        assert_eq!(table.resolve("GBP"), basis_convention("GBP"));
    }
}
