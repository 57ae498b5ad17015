//! Provider records to curve observations, and dashboard request assembly.

use futures::future::join_all;
use tracing::{info, warn};
use zerocurve_curves::batch::CurveRequest;
use zerocurve_curves::normalize::{normalize_bond, normalize_futures, normalize_swap};
use zerocurve_curves::RateObservation;

use crate::cache::CachedFeed;
use crate::defaults::{best_country_by_currency, currency_defaults, IRS_FUTURES_CURRENCIES};
use crate::records::{BondYield, CountryBondData, FuturesQuote, SourceResponse, SwapQuote};
use crate::source::MarketDataSource;

/// Normalizes a futures strip; unusable quotes are dropped.
pub fn futures_observations(quotes: &[FuturesQuote]) -> Vec<RateObservation> {
    quotes
        .iter()
        .filter_map(|q| normalize_futures(&q.latest, &q.maturity))
        .collect()
}

/// Normalizes swap par rates; unusable quotes are dropped.
pub fn swap_observations(quotes: &[SwapQuote]) -> Vec<RateObservation> {
    quotes
        .iter()
        .filter_map(|q| normalize_swap(q.tenor, q.rate_value))
        .collect()
}

/// Normalizes bond yields; missing yields and non-positive maturities are
/// dropped.
pub fn bond_observations(yields: &[BondYield]) -> Vec<RateObservation> {
    yields
        .iter()
        .filter_map(|y| normalize_bond(y.maturity_years, y.yield_pct))
        .collect()
}

fn payload<T: Default>(what: &str, response: SourceResponse<T>) -> T {
    match response.into_result() {
        Ok(data) => data,
        Err(err) => {
            warn!(source = what, error = %err, "no data");
            T::default()
        }
    }
}

/// Requests for the all-currencies dashboard.
///
/// The five swap/futures currencies come first, in fixed order, followed by
/// one government bond request per remaining currency of `countries`, sorted
/// by currency. All fetches run concurrently; a failed fetch contributes an
/// empty point set.
pub async fn dashboard_requests<S: MarketDataSource>(
    feed: &CachedFeed<S>,
    countries: &[CountryBondData],
    force_refresh: bool,
) -> Vec<CurveRequest> {
    let major = join_all(
        IRS_FUTURES_CURRENCIES
            .into_iter()
            .map(|currency| swaps_and_futures_request(feed, currency, force_refresh)),
    );
    let bonds = join_all(
        best_country_by_currency(countries)
            .into_iter()
            .map(|(currency, country)| bond_request(feed, currency, country, force_refresh)),
    );

    let (major, bonds) = tokio::join!(major, bonds);
    let mut requests = major;
    requests.extend(bonds);

    info!(requests = requests.len(), "dashboard requests assembled");
    requests
}

async fn swaps_and_futures_request<S: MarketDataSource>(
    feed: &CachedFeed<S>,
    currency: &str,
    force_refresh: bool,
) -> CurveRequest {
    let defaults = currency_defaults(currency);
    let (futures, swaps) = tokio::join!(
        feed.futures(defaults.futures_index, force_refresh),
        feed.swaps(defaults.swap_currency, force_refresh),
    );

    let futures = futures_observations(&payload(defaults.futures_index, futures));
    let swaps = swap_observations(&payload(defaults.swap_currency, swaps));
    CurveRequest::swaps_and_futures(currency, swaps, futures)
}

async fn bond_request<S: MarketDataSource>(
    feed: &CachedFeed<S>,
    currency: String,
    country: &CountryBondData,
    force_refresh: bool,
) -> CurveRequest {
    let yields = feed
        .country_yields(&country.country_slug, force_refresh)
        .await;
    let bonds = bond_observations(&payload(&country.country_slug, yields));
    CurveRequest::bonds(currency, &country.country, bonds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use async_trait::async_trait;
    use tokio::sync::Barrier;

    use crate::source::{BondSource, FuturesSource, SwapSource};

    /// Every fetch waits until all expected fetches of its family are in
    /// flight, so a sequential caller never completes.
    struct RendezvousSource {
        swaps: Barrier,
        yields: Barrier,
    }

    #[async_trait]
    impl FuturesSource for RendezvousSource {
        async fn fetch_futures(&self, _index: &str) -> SourceResponse<Vec<FuturesQuote>> {
            SourceResponse::failure("no futures")
        }
    }

    #[async_trait]
    impl SwapSource for RendezvousSource {
        async fn fetch_swaps(&self, _currency: &str) -> SourceResponse<Vec<SwapQuote>> {
            self.swaps.wait().await;
            SourceResponse::ok(vec![SwapQuote { tenor: 2.0, rate_value: 3.0, label: None }])
        }
    }

    #[async_trait]
    impl BondSource for RendezvousSource {
        async fn fetch_countries(&self) -> SourceResponse<Vec<CountryBondData>> {
            SourceResponse::failure("unused")
        }

        async fn fetch_country_yields(&self, _slug: &str) -> SourceResponse<Vec<BondYield>> {
            self.yields.wait().await;
            SourceResponse::ok(Vec::new())
        }
    }

    fn country(name: &str, currency: &str) -> CountryBondData {
        CountryBondData {
            country: name.to_string(),
            country_slug: name.to_ascii_lowercase(),
            currency: currency.to_string(),
            rating: None,
            yield_10y: None,
        }
    }

    #[tokio::test]
    async fn test_dashboard_fetches_run_concurrently() {
        let source = RendezvousSource {
            swaps: Barrier::new(IRS_FUTURES_CURRENCIES.len()),
            yields: Barrier::new(2),
        };
        let feed = CachedFeed::new(source, Duration::from_secs(60));
        let countries = [country("Norway", "NOK"), country("Australia", "AUD")];

        let requests = tokio::time::timeout(
            Duration::from_secs(5),
            dashboard_requests(&feed, &countries, false),
        )
        .await
        .expect("fetches were issued one at a time");

        let currencies: Vec<&str> = requests.iter().map(|r| r.currency.as_str()).collect();
        assert_eq!(currencies, ["USD", "EUR", "GBP", "CHF", "JPY", "AUD", "NOK"]);
        assert_eq!(requests[0].point_count(), 1);
    }

    #[test]
    fn test_futures_observations() {
        let quotes = vec![
            FuturesQuote {
                maturity: "3M".to_string(),
                latest: "94.70".to_string(),
                contract: None,
            },
            FuturesQuote {
                maturity: "6M".to_string(),
                latest: "94.805s".to_string(),
                contract: Some("SR3H7".to_string()),
            },
            FuturesQuote {
                maturity: "9M".to_string(),
                latest: "-".to_string(),
                contract: None,
            },
        ];

        let obs = futures_observations(&quotes);
        assert_eq!(obs.len(), 2);
        assert!((obs[0].rate() - 0.053).abs() < 1e-12);
        assert!((obs[1].rate() - 0.05195).abs() < 1e-12);
        assert_eq!(obs[1].tenor_years(), 0.5);
    }

    #[test]
    fn test_swap_and_bond_filters() {
        let swaps = vec![
            SwapQuote { tenor: 2.0, rate_value: 4.1, label: None },
            SwapQuote { tenor: 5.0, rate_value: 0.0, label: None },
            SwapQuote { tenor: 10.0, rate_value: 60.0, label: None },
        ];
        assert_eq!(swap_observations(&swaps).len(), 1);

        let bonds = vec![
            BondYield { maturity: "1Y".into(), maturity_years: 1.0, yield_pct: Some(3.1), last_update: None },
            BondYield { maturity: "2Y".into(), maturity_years: 2.0, yield_pct: None, last_update: None },
            BondYield { maturity: "?".into(), maturity_years: 0.0, yield_pct: Some(3.0), last_update: None },
        ];
        let obs = bond_observations(&bonds);
        assert_eq!(obs.len(), 1);
        assert!((obs[0].rate() - 0.031).abs() < 1e-12);
    }
}
