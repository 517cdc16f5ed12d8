//! Conversion: AssetResponse → Asset (TryFrom + validation).

use super::wire::AssetResponse;
use super::{Asset, ValidationError};
use crate::shared::{parse_decimal, parse_optional_decimal};
use rust_decimal::Decimal;

/// Parses an optional field, recording a failure instead of returning early.
fn optional(
    field: &'static str,
    value: Option<&str>,
    errors: &mut Vec<ValidationError>,
) -> Option<Decimal> {
    parse_optional_decimal(value).unwrap_or_else(|_| {
        errors.push(ValidationError::InvalidDecimal {
            field,
            value: value.unwrap_or_default().to_string(),
        });
        None
    })
}

/// Parses a required field; `missing` is recorded when the field is absent.
fn required(
    field: &'static str,
    value: Option<&str>,
    missing: ValidationError,
    errors: &mut Vec<ValidationError>,
) -> Decimal {
    match value {
        None => {
            errors.push(missing);
            Decimal::ZERO
        }
        Some(v) => parse_decimal(v).unwrap_or_else(|_| {
            errors.push(ValidationError::InvalidDecimal {
                field,
                value: v.to_string(),
            });
            Decimal::ZERO
        }),
    }
}

impl TryFrom<AssetResponse> for Asset {
    type Error = ValidationError;

    fn try_from(source: AssetResponse) -> Result<Self, Self::Error> {
        let mut errors: Vec<ValidationError> = Vec::new();

        let rank = source.rank.trim().parse::<u32>().unwrap_or_else(|_| {
            errors.push(ValidationError::InvalidRank(source.rank.clone()));
            0
        });
        let supply = required(
            "supply",
            source.supply.as_deref(),
            ValidationError::MissingSupply,
            &mut errors,
        );
        let price_usd = required(
            "priceUsd",
            source.price_usd.as_deref(),
            ValidationError::MissingPrice,
            &mut errors,
        );
        let max_supply = optional("maxSupply", source.max_supply.as_deref(), &mut errors);
        let market_cap_usd = optional("marketCapUsd", source.market_cap_usd.as_deref(), &mut errors);
        let volume_usd_24h = optional("volumeUsd24Hr", source.volume_usd_24h.as_deref(), &mut errors);
        let change_percent_24h = optional(
            "changePercent24Hr",
            source.change_percent_24h.as_deref(),
            &mut errors,
        );
        let vwap_24h = optional("vwap24Hr", source.vwap_24h.as_deref(), &mut errors);

        if !errors.is_empty() {
            return Err(ValidationError::Multiple(source.id, errors));
        }

        Ok(Asset {
            id: source.id,
            rank,
            symbol: source.symbol,
            name: source.name,
            supply,
            max_supply,
            market_cap_usd,
            volume_usd_24h,
            price_usd,
            change_percent_24h,
            vwap_24h,
            explorer: source.explorer,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bitcoin_response() -> AssetResponse {
        serde_json::from_str(
            r#"{
                "id": "bitcoin",
                "rank": "1",
                "symbol": "BTC",
                "name": "Bitcoin",
                "supply": "19600000.0000000000000000",
                "maxSupply": "21000000.0000000000000000",
                "marketCapUsd": "830000000000.1234567890",
                "volumeUsd24Hr": "9500000000.5",
                "priceUsd": "42350.1234",
                "changePercent24Hr": "-1.2345",
                "vwap24Hr": "42400.5",
                "explorer": "https://blockchain.info/"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_asset_converts() {
        let asset = Asset::try_from(bitcoin_response()).unwrap();
        assert_eq!(asset.id, "bitcoin");
        assert_eq!(asset.rank, 1);
        assert_eq!(asset.symbol, "BTC");
        assert_eq!(asset.price_usd, Decimal::new(423501234, 4));
        assert_eq!(asset.max_supply, Some(Decimal::new(21_000_000, 0)));
        assert!(!asset.is_up_24h());
    }

    #[test]
    fn test_asset_null_optionals() {
        let mut resp = bitcoin_response();
        resp.max_supply = None;
        resp.vwap_24h = None;
        resp.explorer = None;
        let asset = Asset::try_from(resp).unwrap();
        assert!(asset.max_supply.is_none());
        assert!(asset.vwap_24h.is_none());
    }

    #[test]
    fn test_asset_missing_price_fails() {
        let mut resp = bitcoin_response();
        resp.price_usd = None;
        let err = Asset::try_from(resp).unwrap_err();
        assert!(format!("{err}").contains("Missing price"));
    }

    #[test]
    fn test_asset_collects_all_errors() {
        let mut resp = bitcoin_response();
        resp.rank = "first".to_string();
        resp.vwap_24h = Some("n/a".to_string());
        match Asset::try_from(resp).unwrap_err() {
            ValidationError::Multiple(id, errors) => {
                assert_eq!(id, "bitcoin");
                assert_eq!(errors.len(), 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_market_cap_or_zero() {
        let mut resp = bitcoin_response();
        resp.market_cap_usd = None;
        let asset = Asset::try_from(resp).unwrap();
        assert_eq!(asset.market_cap_or_zero(), Decimal::ZERO);
    }
}
