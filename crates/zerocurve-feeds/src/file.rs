//! File-based market data source.
//!
//! Layout under the root directory:
//!
//! ```text
//! futures/<index>.json
//! swaps/<currency>.json
//! bonds/countries.json
//! bonds/<country-slug>.json
//! ```
//!
//! Each file holds either a provider envelope or a bare array of records.
//! Index and currency keys are lower-cased.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use crate::error::{FeedError, FeedResult};
use crate::records::{BondYield, CountryBondData, FuturesQuote, SourceResponse, SwapQuote};
use crate::source::{BondSource, FuturesSource, SwapSource};

#[derive(Deserialize)]
#[serde(untagged)]
enum FileBody<T> {
    Envelope(SourceResponse<T>),
    Data(T),
}

/// JSON directory source for EOD loads and tests.
#[derive(Debug, Clone)]
pub struct JsonDirSource {
    root: PathBuf,
}

impl JsonDirSource {
    /// Creates a source rooted at `root`. The directory is read lazily.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path(&self, family: &str, key: &str) -> PathBuf {
        self.root.join(family).join(format!("{key}.json"))
    }

    async fn load<T: DeserializeOwned>(&self, path: PathBuf) -> SourceResponse<T> {
        match read_body(&path).await {
            Ok(response) => response,
            Err(err) => {
                debug!(path = %path.display(), error = %err, "file source failure");
                SourceResponse::failure(err.to_string())
            }
        }
    }
}

async fn read_body<T: DeserializeOwned>(path: &Path) -> FeedResult<SourceResponse<T>> {
    let content = tokio::fs::read_to_string(path).await.map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            FeedError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            FeedError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    Ok(match serde_json::from_str::<FileBody<T>>(&content)? {
        FileBody::Envelope(response) => response,
        FileBody::Data(data) => SourceResponse {
            success: true,
            data: Some(data),
            error: None,
            scraped_at: None,
        },
    })
}

#[async_trait]
impl FuturesSource for JsonDirSource {
    async fn fetch_futures(&self, index: &str) -> SourceResponse<Vec<FuturesQuote>> {
        self.load(self.path("futures", &index.to_ascii_lowercase())).await
    }
}

#[async_trait]
impl SwapSource for JsonDirSource {
    async fn fetch_swaps(&self, currency: &str) -> SourceResponse<Vec<SwapQuote>> {
        self.load(self.path("swaps", &currency.to_ascii_lowercase())).await
    }
}

#[async_trait]
impl BondSource for JsonDirSource {
    async fn fetch_countries(&self) -> SourceResponse<Vec<CountryBondData>> {
        self.load(self.path("bonds", "countries")).await
    }

    async fn fetch_country_yields(&self, country_slug: &str) -> SourceResponse<Vec<BondYield>> {
        self.load(self.path("bonds", country_slug)).await
    }
}
