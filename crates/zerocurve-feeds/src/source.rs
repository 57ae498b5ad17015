//! Market data source traits.
//!
//! These traits define interfaces for the three provider families:
//! - [`FuturesSource`]: short-rate futures strips by index
//! - [`SwapSource`]: swap par rates by currency
//! - [`BondSource`]: the sovereign overview and per-country yield curves
//!
//! Failures are reported in the envelope, never as panics.

use async_trait::async_trait;

use crate::records::{BondYield, CountryBondData, FuturesQuote, SourceResponse, SwapQuote};

/// Provider of futures strips, keyed by index (e.g. `sofr`, `estr3m`).
#[async_trait]
pub trait FuturesSource: Send + Sync {
    /// Fetch the futures strip of `index`.
    async fn fetch_futures(&self, index: &str) -> SourceResponse<Vec<FuturesQuote>>;
}

/// Provider of swap par rates, keyed by lower-case currency.
#[async_trait]
pub trait SwapSource: Send + Sync {
    /// Fetch the swap curve of `currency`.
    async fn fetch_swaps(&self, currency: &str) -> SourceResponse<Vec<SwapQuote>>;
}

/// Provider of government bond data.
#[async_trait]
pub trait BondSource: Send + Sync {
    /// Fetch the sovereign overview.
    async fn fetch_countries(&self) -> SourceResponse<Vec<CountryBondData>>;

    /// Fetch the yield curve of the country with `country_slug`.
    async fn fetch_country_yields(&self, country_slug: &str) -> SourceResponse<Vec<BondYield>>;
}

/// A provider of all three families.
pub trait MarketDataSource: FuturesSource + SwapSource + BondSource {}

impl<T: FuturesSource + SwapSource + BondSource> MarketDataSource for T {}
