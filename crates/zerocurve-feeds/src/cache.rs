//! In-memory caches for provider responses.

use std::future::Future;
use std::time::{Duration, Instant};

use dashmap::DashMap;
use tracing::debug;
use zerocurve_config::CacheSettings;

use crate::records::{BondYield, CountryBondData, FuturesQuote, SourceResponse, SwapQuote};
use crate::source::MarketDataSource;

const COUNTRIES_KEY: &str = "countries";

/// Response cache with staleness tracking.
///
/// Only usable (successful, non-empty) responses are stored. An entry is
/// fresh while its age is below the staleness window.
pub struct StalenessCache<T> {
    entries: DashMap<String, CachedResponse<T>>,
    staleness: Duration,
}

struct CachedResponse<T> {
    response: SourceResponse<T>,
    fetched_at: Instant,
}

impl<T: Clone> StalenessCache<T> {
    /// Create a cache with the given staleness window.
    pub fn new(staleness: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            staleness,
        }
    }

    /// Staleness window.
    pub fn staleness(&self) -> Duration {
        self.staleness
    }

    /// The fresh cached response for `key`, if any.
    pub fn get(&self, key: &str) -> Option<SourceResponse<T>> {
        self.entries
            .get(key)
            .filter(|c| c.fetched_at.elapsed() < self.staleness)
            .map(|c| c.response.clone())
    }

    /// Returns the fresh cached response for `key`, else calls `fetch`.
    ///
    /// `force_refresh` skips the lookup; the fetched response is still
    /// stored if usable.
    pub async fn get_or_fetch<F, Fut>(
        &self,
        key: &str,
        force_refresh: bool,
        fetch: F,
    ) -> SourceResponse<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = SourceResponse<T>>,
    {
        if !force_refresh {
            if let Some(cached) = self.get(key) {
                debug!(key, "cache hit");
                return cached;
            }
        }

        debug!(key, force_refresh, "cache miss, fetching");
        let response = fetch().await;
        if response.is_usable() {
            self.entries.insert(
                key.to_string(),
                CachedResponse {
                    response: response.clone(),
                    fetched_at: Instant::now(),
                },
            );
        }
        response
    }

    /// Drop the entry for `key`.
    pub fn invalidate(&self, key: &str) {
        self.entries.remove(key);
    }

    /// Drop all entries.
    pub fn clear(&self) {
        self.entries.clear();
    }

    /// Number of stored entries, fresh or stale.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: Clone> Default for StalenessCache<T> {
    fn default() -> Self {
        Self::new(CacheSettings::default().staleness())
    }
}

/// A market data source behind per-family caches.
pub struct CachedFeed<S> {
    source: S,
    futures: StalenessCache<Vec<FuturesQuote>>,
    swaps: StalenessCache<Vec<SwapQuote>>,
    countries: StalenessCache<Vec<CountryBondData>>,
    bonds: StalenessCache<Vec<BondYield>>,
}

impl<S: MarketDataSource> CachedFeed<S> {
    /// Wrap `source` with the given staleness window.
    pub fn new(source: S, staleness: Duration) -> Self {
        Self {
            source,
            futures: StalenessCache::new(staleness),
            swaps: StalenessCache::new(staleness),
            countries: StalenessCache::new(staleness),
            bonds: StalenessCache::new(staleness),
        }
    }

    /// Wrap `source` with the configured staleness window.
    pub fn from_settings(source: S, settings: &CacheSettings) -> Self {
        Self::new(source, settings.staleness())
    }

    /// Underlying source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Futures strip of `index`.
    pub async fn futures(&self, index: &str, force_refresh: bool) -> SourceResponse<Vec<FuturesQuote>> {
        let key = index.to_ascii_lowercase();
        self.futures
            .get_or_fetch(&key, force_refresh, || self.source.fetch_futures(&key))
            .await
    }

    /// Swap curve of `currency`.
    pub async fn swaps(&self, currency: &str, force_refresh: bool) -> SourceResponse<Vec<SwapQuote>> {
        let key = currency.to_ascii_lowercase();
        self.swaps
            .get_or_fetch(&key, force_refresh, || self.source.fetch_swaps(&key))
            .await
    }

    /// Sovereign overview.
    pub async fn countries(&self, force_refresh: bool) -> SourceResponse<Vec<CountryBondData>> {
        self.countries
            .get_or_fetch(COUNTRIES_KEY, force_refresh, || self.source.fetch_countries())
            .await
    }

    /// Yield curve of `country_slug`.
    pub async fn country_yields(
        &self,
        country_slug: &str,
        force_refresh: bool,
    ) -> SourceResponse<Vec<BondYield>> {
        self.bonds
            .get_or_fetch(country_slug, force_refresh, || {
                self.source.fetch_country_yields(country_slug)
            })
            .await
    }

    /// Drop every cached response.
    pub fn clear(&self) {
        self.futures.clear();
        self.swaps.clear();
        self.countries.clear();
        self.bonds.clear();
    }
}
