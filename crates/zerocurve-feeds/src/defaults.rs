//! Default data sources per currency and benchmark-country selection.

use std::collections::{BTreeMap, BTreeSet};

use crate::records::CountryBondData;

/// Currencies whose curves are built from swaps and futures; every other
/// currency uses government bonds.
pub const IRS_FUTURES_CURRENCIES: [&str; 5] = ["USD", "EUR", "GBP", "CHF", "JPY"];

/// Default futures index and swap curve of a currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyDefaults {
    /// Currency code.
    pub currency: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Futures index key.
    pub futures_index: &'static str,
    /// Swap curve key (lower-case currency, possibly a proxy).
    pub swap_currency: &'static str,
}

impl CurrencyDefaults {
    const fn new(
        currency: &'static str,
        name: &'static str,
        futures_index: &'static str,
        swap_currency: &'static str,
    ) -> Self {
        Self {
            currency,
            name,
            futures_index,
            swap_currency,
        }
    }
}

/// Known currency defaults. CAD and SGD borrow the USD swap curve.
pub const CURRENCY_DEFAULTS: [CurrencyDefaults; 7] = [
    CurrencyDefaults::new("EUR", "Euro", "estr3m", "eur"),
    CurrencyDefaults::new("USD", "US Dollar", "sofr", "usd"),
    CurrencyDefaults::new("GBP", "British Pound", "sonia", "gbp"),
    CurrencyDefaults::new("CHF", "Swiss Franc", "saron3m", "chf"),
    CurrencyDefaults::new("JPY", "Japanese Yen", "tona3m", "jpy"),
    CurrencyDefaults::new("CAD", "Canadian Dollar", "corra3m", "usd"),
    CurrencyDefaults::new("SGD", "Singapore Dollar", "sora3m", "usd"),
];

/// Defaults of `currency`, falling back to the EUR sources.
pub fn currency_defaults(currency: &str) -> CurrencyDefaults {
    let currency = currency.trim();
    CURRENCY_DEFAULTS
        .iter()
        .find(|d| d.currency.eq_ignore_ascii_case(currency))
        .copied()
        .unwrap_or(CURRENCY_DEFAULTS[0])
}

/// True when `currency` is built from swaps and futures.
pub fn is_irs_futures_currency(currency: &str) -> bool {
    IRS_FUTURES_CURRENCIES
        .iter()
        .any(|c| c.eq_ignore_ascii_case(currency.trim()))
}

/// Distinct currencies of `countries` without swap/futures coverage, sorted.
pub fn bond_currencies(countries: &[CountryBondData]) -> Vec<String> {
    countries
        .iter()
        .map(|c| c.currency.as_str())
        .filter(|c| !is_irs_futures_currency(c))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Benchmark country per bond currency.
///
/// Rated countries come before unrated ones; among rated countries the
/// lexicographically smallest rating string wins; remaining ties keep list
/// order.
pub fn best_country_by_currency(countries: &[CountryBondData]) -> BTreeMap<String, &CountryBondData> {
    bond_currencies(countries)
        .into_iter()
        .filter_map(|currency| {
            let best = countries
                .iter()
                .filter(|c| c.currency == currency)
                .min_by(|a, b| rating_key(a).cmp(&rating_key(b)))?;
            Some((currency, best))
        })
        .collect()
}

/// `(unrated, rating)`; empty ratings count as unrated.
fn rating_key(country: &CountryBondData) -> (bool, &str) {
    match country.rating.as_deref().filter(|r| !r.is_empty()) {
        Some(rating) => (false, rating),
        None => (true, ""),
    }
}
