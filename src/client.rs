//! High-level client — `CoinCapClient` with nested sub-client accessors.
//!
//! Each domain that owns endpoints has its own sub-client in
//! `domain/<name>/client.rs`. This module keeps the builder and accessors.

use crate::clock::{Clock, SystemClock};
use crate::domain::asset::client::Assets;
use crate::domain::exchange::client::Exchanges;
use crate::error::{HttpError, SdkError};
use crate::http::CoinCapHttp;

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use std::sync::Arc;

// Re-export sub-client types for convenience.
pub use crate::domain::asset::client::Assets as AssetsClient;
pub use crate::domain::exchange::client::Exchanges as ExchangesClient;

/// The primary entry point for the CoinCap SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.assets()`, `client.exchanges()`. The raw, untyped endpoints are
/// available through [`CoinCapClient::http`].
#[derive(Clone, Debug)]
pub struct CoinCapClient {
    pub(crate) http: CoinCapHttp,
}

impl CoinCapClient {
    /// Client with the default base URL and the system clock.
    pub fn new() -> Result<Self, SdkError> {
        Self::builder().build()
    }

    pub fn builder() -> CoinCapClientBuilder {
        CoinCapClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn assets(&self) -> Assets<'_> {
        Assets { client: self }
    }

    pub fn exchanges(&self) -> Exchanges<'_> {
        Exchanges { client: self }
    }

    /// Untyped endpoint access: each call returns the envelope's `data` as `T`.
    pub fn http(&self) -> &CoinCapHttp {
        &self.http
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct CoinCapClientBuilder {
    base_url: String,
    clock: Arc<dyn Clock>,
    user_agent: Option<String>,
}

impl Default for CoinCapClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            clock: Arc::new(SystemClock),
            user_agent: None,
        }
    }
}

impl CoinCapClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Time source for the history window. Defaults to the wall clock.
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    pub fn user_agent(mut self, agent: &str) -> Self {
        self.user_agent = Some(agent.to_string());
        self
    }

    pub fn build(self) -> Result<CoinCapClient, SdkError> {
        let mut headers = HeaderMap::new();
        if let Some(agent) = &self.user_agent {
            let value = HeaderValue::from_str(agent)
                .map_err(|e| SdkError::Other(format!("Invalid user agent '{}': {}", agent, e)))?;
            headers.insert(USER_AGENT, value);
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(HttpError::from)?;

        Ok(CoinCapClient {
            http: CoinCapHttp::from_parts(&self.base_url, client, self.clock),
        })
    }
}
