//! Conversion: MarketResponse → AssetMarket.

use super::wire::MarketResponse;
use super::AssetMarket;
use crate::shared::parse_optional_decimal;
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
#[error("Invalid decimal in {field} for {exchange_id}: {value}")]
pub struct MarketValidationError {
    pub exchange_id: String,
    pub field: &'static str,
    pub value: String,
}

impl TryFrom<MarketResponse> for AssetMarket {
    type Error = MarketValidationError;

    fn try_from(m: MarketResponse) -> Result<Self, Self::Error> {
        let parse = |field: &'static str, value: &Option<String>| -> Result<Option<Decimal>, MarketValidationError> {
            parse_optional_decimal(value.as_deref()).map_err(|_| MarketValidationError {
                exchange_id: m.exchange_id.clone(),
                field,
                value: value.clone().unwrap_or_default(),
            })
        };

        let volume_usd_24h = parse("volumeUsd24Hr", &m.volume_usd_24h)?;
        let price_usd = parse("priceUsd", &m.price_usd)?;
        let volume_percent = parse("volumePercent", &m.volume_percent)?;

        Ok(Self {
            exchange_id: m.exchange_id,
            base_id: m.base_id,
            quote_id: m.quote_id,
            base_symbol: m.base_symbol,
            quote_symbol: m.quote_symbol,
            volume_usd_24h,
            price_usd,
            volume_percent,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn binance_btc_usdt() -> MarketResponse {
        serde_json::from_str(
            r#"{
                "exchangeId": "binance",
                "baseId": "bitcoin",
                "quoteId": "tether",
                "baseSymbol": "BTC",
                "quoteSymbol": "USDT",
                "volumeUsd24Hr": "1500000000.25",
                "priceUsd": "42310.55",
                "volumePercent": "18.5"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_market_converts() {
        let market = AssetMarket::try_from(binance_btc_usdt()).unwrap();
        assert_eq!(market.pair(), "BTC/USDT");
        assert_eq!(market.price_usd, Some(Decimal::new(4231055, 2)));
        assert_eq!(market.volume_percent, Some(Decimal::new(185, 1)));
    }

    #[test]
    fn test_market_bad_volume() {
        let mut resp = binance_btc_usdt();
        resp.volume_percent = Some("lots".to_string());
        let err = AssetMarket::try_from(resp).unwrap_err();
        assert_eq!(err.field, "volumePercent");
        assert_eq!(err.exchange_id, "binance");
    }
}
