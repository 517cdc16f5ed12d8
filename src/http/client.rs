//! Low-level HTTP client — `CoinCapHttp`.
//!
//! One method per API endpoint. Every method performs a single GET, parses the
//! body as a JSON envelope and hands back its `data` payload. The payload type
//! is chosen by the caller: `serde_json::Value` keeps it opaque, a wire struct
//! from `domain::*::wire` gives it shape. Layer 4 wraps this with conversions.

use crate::clock::{Clock, SystemClock};
use crate::error::HttpError;
use crate::network::{ASSET_LIST_LIMIT, MARKETS_LIMIT};
use crate::shared::{Envelope, HistoryWindow, Interval};

use reqwest::Client;
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Low-level HTTP client for the CoinCap REST API.
pub struct CoinCapHttp {
    base_url: String,
    client: Client,
    clock: Arc<dyn Clock>,
}

impl CoinCapHttp {
    /// Client against `base_url`, reading "now" from the wall clock.
    pub fn new(base_url: &str) -> Result<Self, HttpError> {
        Self::with_clock(base_url, Arc::new(SystemClock))
    }

    pub fn with_clock(base_url: &str, clock: Arc<dyn Clock>) -> Result<Self, HttpError> {
        Ok(Self::from_parts(base_url, Client::builder().build()?, clock))
    }

    pub(crate) fn from_parts(base_url: &str, client: Client, clock: Arc<dyn Clock>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            clock,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── Assets ───────────────────────────────────────────────────────────

    /// Top assets by rank. The limit is fixed; there is no paging.
    pub async fn list_assets<T: DeserializeOwned>(&self) -> Result<T, HttpError> {
        let url = format!("{}/assets?limit={}", self.base_url, ASSET_LIST_LIMIT);
        self.get(&url).await
    }

    pub async fn get_asset<T: DeserializeOwned>(&self, coin: &str) -> Result<T, HttpError> {
        let url = format!("{}/assets/{}", self.base_url, urlencoding::encode(coin));
        self.get(&url).await
    }

    /// Hourly points for the 24 hours ending at the clock's current instant.
    pub async fn get_asset_history<T: DeserializeOwned>(
        &self,
        coin: &str,
    ) -> Result<T, HttpError> {
        let url = self.asset_history_url(coin, HistoryWindow::last_24h(self.clock.now_ms()));
        self.get(&url).await
    }

    pub async fn get_markets<T: DeserializeOwned>(&self, coin: &str) -> Result<T, HttpError> {
        let url = format!(
            "{}/assets/{}/markets?limit={}",
            self.base_url,
            urlencoding::encode(coin),
            MARKETS_LIMIT
        );
        self.get(&url).await
    }

    // ── Exchanges ────────────────────────────────────────────────────────

    pub async fn get_exchange<T: DeserializeOwned>(&self, id: &str) -> Result<T, HttpError> {
        let url = format!("{}/exchanges/{}", self.base_url, urlencoding::encode(id));
        self.get(&url).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    fn asset_history_url(&self, coin: &str, window: HistoryWindow) -> String {
        format!(
            "{}/assets/{}/history?interval={}&start={}&end={}",
            self.base_url,
            urlencoding::encode(coin),
            Interval::Hour1.as_str(),
            window.start,
            window.end
        )
    }

    /// Send, then decode the envelope. The status is never inspected: error
    /// responses go through the same decode step as successful ones.
    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        tracing::debug!(url, "GET");
        let resp = self.client.get(url).send().await?;
        let status = resp.status().as_u16();
        let body = resp.text().await?;
        tracing::trace!(url, status, bytes = body.len(), "response received");

        serde_json::from_str::<Envelope<T>>(&body)
            .map(Envelope::into_data)
            .map_err(|source| HttpError::Decode {
                status,
                body,
                source,
            })
    }
}

impl Clone for CoinCapHttp {
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            client: self.client.clone(),
            clock: self.clock.clone(),
        }
    }
}

impl std::fmt::Debug for CoinCapHttp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoinCapHttp")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let http = CoinCapHttp::new("https://api.coincap.io/v2/").unwrap();
        assert_eq!(http.base_url(), "https://api.coincap.io/v2");
    }

    #[test]
    fn test_asset_history_url() {
        let clock = Arc::new(FixedClock::from_millis(1_704_067_200_000));
        let http = CoinCapHttp::with_clock("https://api.coincap.io/v2", clock).unwrap();
        let url = http.asset_history_url("bitcoin", HistoryWindow::last_24h(1_704_067_200_000));
        assert_eq!(
            url,
            "https://api.coincap.io/v2/assets/bitcoin/history?interval=h1&start=1703980800000&end=1704067200000"
        );
    }

    #[test]
    fn test_path_segment_is_encoded() {
        let http = CoinCapHttp::new("http://localhost").unwrap();
        let url = http.asset_history_url("a b", HistoryWindow::last_24h(86_400_000));
        assert!(url.starts_with("http://localhost/assets/a%20b/history?"));
    }
}
