//! Provider records and the response envelope.
//!
//! Field names follow the providers' camelCase JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{FeedError, FeedResult};

// =============================================================================
// ENVELOPE
// =============================================================================

/// Provider response: success flag, payload or error message, scrape time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", bound(deserialize = "T: Deserialize<'de>"))]
pub struct SourceResponse<T> {
    /// Whether the provider call succeeded.
    pub success: bool,
    /// Payload, present on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error message, present on failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// When the provider collected the data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scraped_at: Option<DateTime<Utc>>,
}

impl<T> SourceResponse<T> {
    /// Successful response scraped now.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            scraped_at: Some(Utc::now()),
        }
    }

    /// Failed response.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
            scraped_at: None,
        }
    }

    /// True for a successful response with data; only these are cached.
    pub fn is_usable(&self) -> bool {
        self.success && self.data.is_some()
    }

    /// The payload, or why there is none.
    pub fn into_result(self) -> FeedResult<T> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            (true, None) => Err(FeedError::EmptyResponse),
            (false, _) => Err(FeedError::Source(
                self.error.unwrap_or_else(|| "unknown error".to_string()),
            )),
        }
    }
}

// =============================================================================
// RECORDS
// =============================================================================

/// One short-rate futures contract quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuturesQuote {
    /// Maturity label, e.g. `3M`.
    pub maturity: String,
    /// Display price, possibly decorated (`"94.705s"`).
    pub latest: String,
    /// Contract name, if the provider reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract: Option<String>,
}

/// One swap par rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapQuote {
    /// Tenor in years.
    pub tenor: f64,
    /// Par rate in percent.
    pub rate_value: f64,
    /// Tenor label as displayed, e.g. `10Y`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// One government bond yield.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BondYield {
    /// Maturity label.
    pub maturity: String,
    /// Maturity in years.
    pub maturity_years: f64,
    /// Yield in percent; `null` when not quoted.
    #[serde(rename = "yield")]
    pub yield_pct: Option<f64>,
    /// Provider's last update stamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_update: Option<String>,
}

/// A country in the bond overview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryBondData {
    /// Country name.
    pub country: String,
    /// Provider slug used to fetch the country's yields.
    pub country_slug: String,
    /// Currency code.
    pub currency: String,
    /// Sovereign rating, e.g. `AA+`.
    #[serde(default)]
    pub rating: Option<String>,
    /// 10Y yield in percent.
    #[serde(default, rename = "yield10Y")]
    pub yield_10y: Option<f64>,
}
