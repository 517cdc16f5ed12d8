//! Shared types and utilities used across all domain modules.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

// ─── Envelope ────────────────────────────────────────────────────────────────

/// Top-level response object. Every endpoint wraps its payload in `data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
    /// Server time in Unix milliseconds. Accepted and ignored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
}

impl<T> Envelope<T> {
    pub fn into_data(self) -> T {
        self.data
    }
}

// ─── Interval ────────────────────────────────────────────────────────────────

/// Point spacing for asset history queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Interval {
    #[serde(rename = "m1")]
    Minute1,
    #[serde(rename = "m5")]
    Minute5,
    #[serde(rename = "m15")]
    Minute15,
    #[serde(rename = "m30")]
    Minute30,
    #[default]
    #[serde(rename = "h1")]
    Hour1,
    #[serde(rename = "h2")]
    Hour2,
    #[serde(rename = "h6")]
    Hour6,
    #[serde(rename = "h12")]
    Hour12,
    #[serde(rename = "d1")]
    Day1,
}

impl Interval {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Minute1 => "m1",
            Self::Minute5 => "m5",
            Self::Minute15 => "m15",
            Self::Minute30 => "m30",
            Self::Hour1 => "h1",
            Self::Hour2 => "h2",
            Self::Hour6 => "h6",
            Self::Hour12 => "h12",
            Self::Day1 => "d1",
        }
    }

    /// Spacing between two points in milliseconds.
    pub fn millis(&self) -> i64 {
        const MINUTE: i64 = 60_000;
        match self {
            Self::Minute1 => MINUTE,
            Self::Minute5 => 5 * MINUTE,
            Self::Minute15 => 15 * MINUTE,
            Self::Minute30 => 30 * MINUTE,
            Self::Hour1 => 60 * MINUTE,
            Self::Hour2 => 120 * MINUTE,
            Self::Hour6 => 360 * MINUTE,
            Self::Hour12 => 720 * MINUTE,
            Self::Day1 => 1440 * MINUTE,
        }
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ─── HistoryWindow ───────────────────────────────────────────────────────────

/// One day in milliseconds.
pub const DAY_MS: i64 = 86_400_000;

/// A `[start, end]` range of Unix-millisecond timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryWindow {
    pub start: i64,
    pub end: i64,
}

impl HistoryWindow {
    /// The 24 hours ending at `now_ms`. Fixed-width, so month and year
    /// rollovers never change the span.
    pub fn last_24h(now_ms: i64) -> Self {
        Self {
            start: now_ms - DAY_MS,
            end: now_ms,
        }
    }

    pub fn span_ms(&self) -> i64 {
        self.end - self.start
    }
}

// ─── Decimal parsing ─────────────────────────────────────────────────────────

/// Parse an upstream decimal string (plain or scientific notation).
pub fn parse_decimal(s: &str) -> Result<Decimal, rust_decimal::Error> {
    let s = s.trim();
    Decimal::from_str(s).or_else(|e| Decimal::from_scientific(s).map_err(|_| e))
}

/// Parse an optional decimal string, treating `None` and `""` as absent.
pub fn parse_optional_decimal(s: Option<&str>) -> Result<Option<Decimal>, rust_decimal::Error> {
    match s {
        Some(v) if !v.trim().is_empty() => parse_decimal(v).map(Some),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    #[test]
    fn test_interval_default_is_hourly() {
        assert_eq!(Interval::default(), Interval::Hour1);
        assert_eq!(Interval::default().as_str(), "h1");
    }

    #[test]
    fn test_interval_serde_matches_as_str() {
        for interval in [Interval::Minute15, Interval::Hour12, Interval::Day1] {
            let json = serde_json::to_string(&interval).unwrap();
            assert_eq!(json, format!("\"{}\"", interval.as_str()));
        }
    }

    #[test]
    fn test_window_spans_one_day() {
        let window = HistoryWindow::last_24h(1_700_000_000_123);
        assert_eq!(window.end, 1_700_000_000_123);
        assert_eq!(window.span_ms(), 86_400_000);
    }

    #[test]
    fn test_window_across_year_boundary() {
        let now: DateTime<Utc> = "2024-01-01T00:00:00Z".parse().unwrap();
        let window = HistoryWindow::last_24h(now.timestamp_millis());
        let start = DateTime::<Utc>::from_timestamp_millis(window.start).unwrap();
        assert_eq!(start.to_rfc3339(), "2023-12-31T00:00:00+00:00");
    }

    #[test]
    fn test_window_across_leap_day() {
        let now: DateTime<Utc> = "2024-03-01T12:30:00Z".parse().unwrap();
        let window = HistoryWindow::last_24h(now.timestamp_millis());
        let start = DateTime::<Utc>::from_timestamp_millis(window.start).unwrap();
        assert_eq!(start.to_rfc3339(), "2024-02-29T12:30:00+00:00");
    }

    #[test]
    fn test_envelope_ignores_timestamp() {
        let env: Envelope<Vec<u8>> =
            serde_json::from_str(r#"{"data":[1,2,3],"timestamp":1704067200000}"#).unwrap();
        assert_eq!(env.timestamp, Some(1_704_067_200_000));
        assert_eq!(env.into_data(), vec![1, 2, 3]);
    }

    #[test]
    fn test_parse_decimal_variants() {
        assert_eq!(parse_decimal("42.50").unwrap(), Decimal::new(4250, 2));
        assert_eq!(parse_decimal("1e-2").unwrap(), Decimal::new(1, 2));
        assert!(parse_decimal("abc").is_err());
    }

    #[test]
    fn test_parse_optional_decimal() {
        assert_eq!(parse_optional_decimal(None).unwrap(), None);
        assert_eq!(parse_optional_decimal(Some("")).unwrap(), None);
        assert_eq!(
            parse_optional_decimal(Some("0.5")).unwrap(),
            Some(Decimal::new(5, 1))
        );
        assert!(parse_optional_decimal(Some("x")).is_err());
    }
}
