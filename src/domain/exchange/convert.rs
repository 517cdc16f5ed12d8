//! Conversion: ExchangeResponse → Exchange.

use super::wire::ExchangeResponse;
use super::Exchange;
use crate::shared::parse_optional_decimal;
use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ExchangeValidationError {
    #[error("Invalid rank: {0}")]
    InvalidRank(String),

    #[error("Invalid trading pair count: {0}")]
    InvalidTradingPairs(String),

    #[error("Invalid decimal in {field}: {value}")]
    InvalidDecimal { field: &'static str, value: String },

    #[error("Timestamp out of range: {0}")]
    InvalidUpdated(i64),
}

fn decimal(
    field: &'static str,
    value: Option<String>,
) -> Result<Option<rust_decimal::Decimal>, ExchangeValidationError> {
    parse_optional_decimal(value.as_deref()).map_err(|_| ExchangeValidationError::InvalidDecimal {
        field,
        value: value.unwrap_or_default(),
    })
}

impl TryFrom<ExchangeResponse> for Exchange {
    type Error = ExchangeValidationError;

    fn try_from(e: ExchangeResponse) -> Result<Self, Self::Error> {
        let rank = e
            .rank
            .trim()
            .parse::<u32>()
            .map_err(|_| ExchangeValidationError::InvalidRank(e.rank.clone()))?;
        let trading_pairs = e
            .trading_pairs
            .trim()
            .parse::<u32>()
            .map_err(|_| ExchangeValidationError::InvalidTradingPairs(e.trading_pairs.clone()))?;
        let updated = e
            .updated
            .map(|ms| {
                DateTime::<Utc>::from_timestamp_millis(ms)
                    .ok_or(ExchangeValidationError::InvalidUpdated(ms))
            })
            .transpose()?;

        Ok(Self {
            id: e.exchange_id,
            name: e.name,
            rank,
            percent_total_volume: decimal("percentTotalVolume", e.percent_total_volume)?,
            volume_usd: decimal("volumeUsd", e.volume_usd)?,
            trading_pairs,
            socket: e.socket,
            exchange_url: e.exchange_url,
            updated,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn binance() -> ExchangeResponse {
        serde_json::from_str(
            r#"{
                "exchangeId": "binance",
                "name": "Binance",
                "rank": "1",
                "percentTotalVolume": "31.25",
                "volumeUsd": "12000000000.5",
                "tradingPairs": "650",
                "socket": true,
                "exchangeUrl": "https://www.binance.com/",
                "updated": 1704067200000
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_exchange_converts() {
        let exchange = Exchange::try_from(binance()).unwrap();
        assert_eq!(exchange.id, "binance");
        assert_eq!(exchange.rank, 1);
        assert_eq!(exchange.trading_pairs, 650);
        assert_eq!(exchange.percent_total_volume, Some(Decimal::new(3125, 2)));
        assert_eq!(exchange.socket, Some(true));
        assert_eq!(
            exchange.updated.unwrap().to_rfc3339(),
            "2024-01-01T00:00:00+00:00"
        );
    }

    #[test]
    fn test_exchange_null_volume() {
        let mut resp = binance();
        resp.volume_usd = None;
        resp.percent_total_volume = None;
        let exchange = Exchange::try_from(resp).unwrap();
        assert!(exchange.volume_usd.is_none());
    }

    #[test]
    fn test_exchange_bad_trading_pairs() {
        let mut resp = binance();
        resp.trading_pairs = "many".to_string();
        assert_eq!(
            Exchange::try_from(resp).unwrap_err(),
            ExchangeValidationError::InvalidTradingPairs("many".to_string())
        );
    }
}
