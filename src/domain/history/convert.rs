//! Conversion: HistoryPointResponse → HistoryPoint.

use super::wire::HistoryPointResponse;
use super::HistoryPoint;
use crate::shared::parse_decimal;
use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum HistoryValidationError {
    #[error("Invalid price at {time}: {value}")]
    InvalidPrice { time: i64, value: String },

    #[error("Timestamp out of range: {0}")]
    InvalidTime(i64),
}

impl TryFrom<HistoryPointResponse> for HistoryPoint {
    type Error = HistoryValidationError;

    fn try_from(p: HistoryPointResponse) -> Result<Self, Self::Error> {
        let time = DateTime::<Utc>::from_timestamp_millis(p.time)
            .ok_or(HistoryValidationError::InvalidTime(p.time))?;
        let price_usd =
            parse_decimal(&p.price_usd).map_err(|_| HistoryValidationError::InvalidPrice {
                time: p.time,
                value: p.price_usd.clone(),
            })?;
        Ok(Self { price_usd, time })
    }
}
