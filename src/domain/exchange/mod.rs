//! Exchange domain — trading venues.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use convert::ExchangeValidationError;

/// A validated exchange record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exchange {
    pub id: String,
    pub name: String,
    pub rank: u32,
    pub percent_total_volume: Option<Decimal>,
    pub volume_usd: Option<Decimal>,
    pub trading_pairs: u32,
    /// Whether the venue offers a websocket feed.
    pub socket: Option<bool>,
    pub exchange_url: Option<String>,
    pub updated: Option<DateTime<Utc>>,
}
