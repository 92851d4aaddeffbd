//! HTTP client for the TVmaze catalog API
//!
//! Wraps the two read-only endpoints the browser needs. Every call is a
//! fresh upstream request: no caching and no retries.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::error::{Result, TvmazeError};
use crate::types::SearchHit;
use crate::url::{BASE_URL, build_episodes_url, build_search_url};

const USER_AGENT: &str = concat!("tvmaze-browser/", env!("CARGO_PKG_VERSION"));

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API root (default: "https://api.tvmaze.com")
    pub base_url: String,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            timeout_secs: 30,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    /// Default configuration pointed at a different API root
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

/// HTTP client wrapper for the catalog endpoints
///
/// Returns raw upstream records; normalization happens in the caller.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent)
            .build()
            .map_err(TvmazeError::HttpError)?;

        Ok(Self {
            client,
            base_url: config.base_url,
        })
    }

    /// Search shows matching a free-text term
    ///
    /// Each hit wraps a raw show record. The term is sent as-is; an empty
    /// term is not special-cased.
    ///
    /// # Errors
    /// - `HttpError` - transport failure
    /// - `Status` - non-2xx response
    /// - `DecodeError` - body is not a JSON array of hits
    pub async fn search_shows(&self, term: &str) -> Result<Vec<SearchHit>> {
        let url = build_search_url(&self.base_url, term);
        self.get_json(&url).await
    }

    /// List episodes of a show, specials included
    ///
    /// # Errors
    /// Same as [`CatalogClient::search_shows`].
    pub async fn list_episodes(&self, show_id: i64) -> Result<Vec<Value>> {
        let url = build_episodes_url(&self.base_url, show_id);
        self.get_json(&url).await
    }

    /// Perform a single GET and decode the JSON body
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!(url, "GET");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(TvmazeError::HttpError)?;

        let status = response.status();
        if !status.is_success() {
            return Err(TvmazeError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await.map_err(TvmazeError::HttpError)?;
        Ok(serde_json::from_slice(&body)?)
    }
}
