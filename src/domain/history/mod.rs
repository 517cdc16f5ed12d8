//! Asset history domain — chart points over a bounded window.

mod convert;
pub mod wire;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use convert::HistoryValidationError;

/// One price sample of an asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    pub price_usd: Decimal,
    pub time: DateTime<Utc>,
}

impl From<HistoryPoint> for (DateTime<Utc>, Decimal) {
    fn from(p: HistoryPoint) -> Self {
        (p.time, p.price_usd)
    }
}

/// Lowest and highest price in `points`, for sizing a chart axis.
pub fn price_range(points: &[HistoryPoint]) -> Option<(Decimal, Decimal)> {
    let mut iter = points.iter().map(|p| p.price_usd);
    let first = iter.next()?;
    Some(iter.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p))))
}
