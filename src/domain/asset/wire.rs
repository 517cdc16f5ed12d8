//! Wire types for asset responses (REST).

use serde::{Deserialize, Serialize};

/// Raw asset as returned by `/assets` and `/assets/{id}`.
///
/// Upstream encodes every number as a string and sends `null` freely.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AssetResponse {
    pub id: String,
    pub rank: String,
    pub symbol: String,
    pub name: String,
    pub supply: Option<String>,
    #[serde(default)]
    pub max_supply: Option<String>,
    #[serde(default)]
    pub market_cap_usd: Option<String>,
    #[serde(default, rename = "volumeUsd24Hr")]
    pub volume_usd_24h: Option<String>,
    pub price_usd: Option<String>,
    #[serde(default, rename = "changePercent24Hr")]
    pub change_percent_24h: Option<String>,
    #[serde(default, rename = "vwap24Hr")]
    pub vwap_24h: Option<String>,
    #[serde(default)]
    pub explorer: Option<String>,
}
