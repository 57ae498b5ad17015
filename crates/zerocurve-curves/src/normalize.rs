//! Instrument normalization.
//!
//! Turns raw provider quotes (futures display prices, swap par rates, bond
//! yields) into [`RateObservation`]s. Quotes that fail the plausibility
//! filters are dropped and logged at `debug` level; nothing here returns an
//! error.
//!
//! | Source | Input | Rate |
//! |--------|-------|------|
//! | Futures | display price + maturity label | `(100 - price) / 100` |
//! | Swap | tenor (years) + percent | `percent / 100` |
//! | Bond | maturity (years) + optional percent yield | `percent / 100` |

use log::debug;
use zerocurve_core::Tenor;

use crate::observation::{InstrumentSource, RateObservation, MAX_PLAUSIBLE_RATE, MAX_TENOR_YEARS};

/// True when `rate` is a finite decimal in `(0, 0.5)`.
///
/// Zero, negative and implausibly high rates are treated as bad quotes.
pub fn is_plausible_rate(rate: f64) -> bool {
    rate.is_finite() && rate > 0.0 && rate < MAX_PLAUSIBLE_RATE
}

/// True when `tenor_years` lies in `(0, 100]`.
pub fn is_plausible_tenor(tenor_years: f64) -> bool {
    tenor_years.is_finite() && tenor_years > 0.0 && tenor_years <= MAX_TENOR_YEARS
}

/// Converts a maturity label (`3M`, `10Y`, `2W`, `1.5Y`, `O/N`, ...) to years.
///
/// Returns `None` for labels that cannot be parsed or are not positive.
///
/// ```rust
/// use zerocurve_curves::normalize::maturity_to_years;
///
/// assert_eq!(maturity_to_years("3M"), Some(0.25));
/// assert_eq!(maturity_to_years("10Y"), Some(10.0));
/// assert_eq!(maturity_to_years("soon"), None);
/// ```
pub fn maturity_to_years(label: &str) -> Option<f64> {
    label.parse::<Tenor>().ok().map(|t| t.to_years())
}

/// IMM futures price to decimal rate: `(100 - price) / 100`.
pub fn price_to_rate(price: f64) -> f64 {
    (100.0 - price) / 100.0
}

/// Normalizes a futures quote.
///
/// Every character other than digits, `.` and `-` is stripped from the
/// display price before parsing, so `"94.705s"` reads as `94.705`.
pub fn normalize_futures(raw_price: &str, maturity_label: &str) -> Option<RateObservation> {
    let cleaned: String = raw_price
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    let Ok(price) = cleaned.parse::<f64>() else {
        debug!("dropping futures quote: unparsable price '{raw_price}'");
        return None;
    };

    let Some(tenor) = maturity_to_years(maturity_label) else {
        debug!("dropping futures quote: unparsable maturity '{maturity_label}'");
        return None;
    };

    observation(tenor, price_to_rate(price), InstrumentSource::Futures)
}

/// Normalizes a swap par rate quoted in percent.
pub fn normalize_swap(tenor_years: f64, par_rate_percent: f64) -> Option<RateObservation> {
    observation(tenor_years, par_rate_percent / 100.0, InstrumentSource::Swap)
}

/// Normalizes a government bond yield quoted in percent.
///
/// Missing yields are dropped.
pub fn normalize_bond(maturity_years: f64, yield_percent: Option<f64>) -> Option<RateObservation> {
    let Some(yield_percent) = yield_percent else {
        debug!("dropping bond quote at {maturity_years}y: no yield");
        return None;
    };
    observation(maturity_years, yield_percent / 100.0, InstrumentSource::Bond)
}

fn observation(tenor: f64, rate: f64, source: InstrumentSource) -> Option<RateObservation> {
    if !is_plausible_tenor(tenor) {
        debug!("dropping {source} quote: tenor {tenor} outside (0, {MAX_TENOR_YEARS}]");
        return None;
    }
    if !is_plausible_rate(rate) {
        debug!("dropping {source} quote at {tenor}y: rate {rate} outside (0, {MAX_PLAUSIBLE_RATE})");
        return None;
    }
    RateObservation::new(tenor, rate, source).ok()
}
