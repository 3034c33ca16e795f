//! HTTP client for the PokeAPI catalog.
//!
//! Every request goes through the response cache first: a cached body is
//! returned without touching the network, and fresh bodies are cached under
//! their full URL. Only successful responses are cached.

use std::time::Duration;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::cache::TtlCache;
use crate::config::Config;
use crate::error::{PokedexError, Result};
use crate::models::{LocationArea, LocationAreaPage, Pokemon};

/// Timeout used when no configuration is supplied.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

// == PokeAPI Client ==
/// Cache-first client for the catalog API.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    /// Root URL of the API, without a trailing slash
    base_url: String,

    /// HTTP connection pool
    http: reqwest::Client,

    /// Response bodies keyed by URL
    cache: TtlCache,
}

impl PokeApiClient {
    // == Constructors ==
    /// Create a client from configuration, reusing `cache` for responses.
    pub fn new(config: &Config, cache: TtlCache) -> Result<Self> {
        Self::build(config.base_url.clone(), config.request_timeout(), cache)
    }

    /// Create a client against a custom base URL (useful for testing).
    pub fn with_base_url(base_url: impl Into<String>, cache: TtlCache) -> Result<Self> {
        Self::build(base_url.into(), DEFAULT_TIMEOUT, cache)
    }

    fn build(base_url: String, timeout: Duration, cache: TtlCache) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
            cache,
        })
    }

    // == Accessors ==
    /// The response cache this client reads through.
    pub fn cache(&self) -> &TtlCache {
        &self.cache
    }

    /// Build a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// URL of the first page of the location-area listing.
    pub fn first_page_url(&self) -> String {
        self.build_url("location-area/")
    }

    // == Fetch ==
    /// Fetch the raw body at `url`, serving it from the cache when possible.
    pub async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        if let Some(body) = self.cache.get(url) {
            debug!(url, "cache hit");
            return Ok(body);
        }

        debug!(url, "cache miss, requesting");
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(PokedexError::NotFound(url.to_string()));
        }
        if !status.is_success() {
            warn!(url, status = status.as_u16(), "API returned an error status");
            return Err(PokedexError::Api {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?.to_vec();
        self.cache.add(url, body.clone());
        debug!(url, bytes = body.len(), entries = self.cache.len(), "cached response");

        Ok(body)
    }

    /// Fetch `url` and decode it as JSON.
    async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let body = self.fetch(url).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    // == Endpoints ==
    /// Fetch one page of location areas; `url` comes from a previous page's links.
    pub async fn location_areas(&self, url: &str) -> Result<LocationAreaPage> {
        self.fetch_json(url).await
    }

    /// Fetch a single location area by name or id.
    pub async fn location_area(&self, name: &str) -> Result<LocationArea> {
        let url = self.build_url(&format!("location-area/{}", name));
        self.fetch_json(&url).await
    }

    /// Fetch a creature by name or id.
    pub async fn pokemon(&self, name: &str) -> Result<Pokemon> {
        let url = self.build_url(&format!("pokemon/{}", name));
        self.fetch_json(&url).await
    }
}
