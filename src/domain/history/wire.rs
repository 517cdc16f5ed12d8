//! Wire types for asset history (REST).

use serde::{Deserialize, Serialize};

/// A single history point from `/assets/{id}/history`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryPointResponse {
    pub price_usd: String,
    /// Unix timestamp in milliseconds.
    pub time: i64,
    /// ISO 8601 rendering of `time`; redundant, kept for round-tripping.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}
