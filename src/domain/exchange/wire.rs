//! Wire types for exchange responses (REST).

use serde::{Deserialize, Serialize};

/// Raw exchange record from `/exchanges/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeResponse {
    pub exchange_id: String,
    pub name: String,
    pub rank: String,
    #[serde(default)]
    pub percent_total_volume: Option<String>,
    #[serde(default)]
    pub volume_usd: Option<String>,
    pub trading_pairs: String,
    #[serde(default)]
    pub socket: Option<bool>,
    #[serde(default)]
    pub exchange_url: Option<String>,
    /// Last update, Unix milliseconds.
    #[serde(default)]
    pub updated: Option<i64>,
}
