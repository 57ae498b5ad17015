//! # Zerocurve Feeds
//!
//! Market data plumbing around the curve engine.
//!
//! This crate provides:
//! - Provider records and the [`SourceResponse`] envelope
//! - Async source traits for futures, swaps and government bonds
//! - [`JsonDirSource`], a file-backed source for EOD data and tests
//! - [`StalenessCache`] and [`CachedFeed`] with an explicit staleness window
//! - Currency data-source defaults and benchmark-country selection
//! - Conversion of provider records into curve observations and dashboard
//!   requests
//!
//! Scraping and HTTP transport are out of scope; implement the source traits
//! for a live provider.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod cache;
mod convert;
mod defaults;
mod error;
mod file;
mod records;
mod source;

pub use cache::{CachedFeed, StalenessCache};
pub use convert::{bond_observations, dashboard_requests, futures_observations, swap_observations};
pub use defaults::{
    best_country_by_currency, bond_currencies, currency_defaults, is_irs_futures_currency,
    CurrencyDefaults, CURRENCY_DEFAULTS, IRS_FUTURES_CURRENCIES,
};
pub use error::{FeedError, FeedResult};
pub use file::JsonDirSource;
pub use records::{BondYield, CountryBondData, FuturesQuote, SourceResponse, SwapQuote};
pub use source::{BondSource, FuturesSource, MarketDataSource, SwapSource};
