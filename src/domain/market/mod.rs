//! Market domain — where an asset trades.

mod convert;
pub mod wire;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use convert::MarketValidationError;

/// A trading pair for an asset on one exchange.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetMarket {
    pub exchange_id: String,
    pub base_id: String,
    pub quote_id: String,
    pub base_symbol: String,
    pub quote_symbol: String,
    pub volume_usd_24h: Option<Decimal>,
    pub price_usd: Option<Decimal>,
    pub volume_percent: Option<Decimal>,
}

impl AssetMarket {
    /// Pair label, e.g. `BTC/USDT`.
    pub fn pair(&self) -> String {
        format!("{}/{}", self.base_symbol, self.quote_symbol)
    }
}
