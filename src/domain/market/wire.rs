//! Wire types for per-asset market listings (REST).

use serde::{Deserialize, Serialize};

/// One venue listing from `/assets/{id}/markets`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketResponse {
    pub exchange_id: String,
    pub base_id: String,
    pub quote_id: String,
    pub base_symbol: String,
    pub quote_symbol: String,
    #[serde(default, rename = "volumeUsd24Hr")]
    pub volume_usd_24h: Option<String>,
    #[serde(default)]
    pub price_usd: Option<String>,
    #[serde(default)]
    pub volume_percent: Option<String>,
}
