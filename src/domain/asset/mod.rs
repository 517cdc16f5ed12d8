//! Asset domain — ranked cryptocurrency assets.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

// ─── Asset ───────────────────────────────────────────────────────────────────

/// A validated asset with parsed numeric fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub id: String,
    pub rank: u32,
    pub symbol: String,
    pub name: String,
    pub supply: Decimal,
    pub max_supply: Option<Decimal>,
    pub market_cap_usd: Option<Decimal>,
    pub volume_usd_24h: Option<Decimal>,
    pub price_usd: Decimal,
    pub change_percent_24h: Option<Decimal>,
    pub vwap_24h: Option<Decimal>,
    pub explorer: Option<String>,
}

impl Asset {
    pub fn market_cap_or_zero(&self) -> Decimal {
        self.market_cap_usd.unwrap_or(Decimal::ZERO)
    }

    /// `true` when the 24h change is strictly positive.
    pub fn is_up_24h(&self) -> bool {
        self.change_percent_24h
            .map(|c| c.is_sign_positive() && !c.is_zero())
            .unwrap_or(false)
    }
}

// ─── Validation ──────────────────────────────────────────────────────────────

#[derive(Debug)]
pub enum ValidationError {
    Multiple(String, Vec<ValidationError>),
    InvalidRank(String),
    MissingSupply,
    MissingPrice,
    InvalidDecimal { field: &'static str, value: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Multiple(id, errors) => {
                writeln!(f, "Asset validation errors ({id}):")?;
                for err in errors {
                    writeln!(f, "  - {}", err)?;
                }
                Ok(())
            }
            ValidationError::InvalidRank(v) => write!(f, "Invalid rank: {v}"),
            ValidationError::MissingSupply => write!(f, "Missing supply"),
            ValidationError::MissingPrice => write!(f, "Missing price"),
            ValidationError::InvalidDecimal { field, value } => {
                write!(f, "Invalid decimal in {field}: {value}")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
