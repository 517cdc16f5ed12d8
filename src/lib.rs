//! # CoinCap SDK
//!
//! A Rust client for the CoinCap market data REST API supporting both native
//! and WASM targets.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Envelope, intervals, history window, clock, errors (always available)
//! 2. **Domain** — Wire types, validated domain types, conversions
//! 3. **HTTP API** — `CoinCapHttp`, one GET per endpoint, returns the unwrapped `data`
//! 4. **High-Level Client** — `CoinCapClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use coincap_sdk::prelude::*;
//!
//! let client = CoinCapClient::builder()
//!     .base_url("https://api.coincap.io/v2")
//!     .build()?;
//!
//! let top = client.assets().list().await?;
//! let history = client.assets().history("bitcoin").await?;
//!
//! // Untyped: whatever the API put under `data`.
//! let raw: serde_json::Value = client.http().get_exchange("binance").await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared types: envelope, interval, history window, decimal parsing.
pub mod shared;

/// Time sources.
pub mod clock;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: Domain ──────────────────────────────────────────────────────────

/// Domain modules (vertical slices): types, wire types, conversions.
pub mod domain;

// ── Layer 3: HTTP API ────────────────────────────────────────────────────────

/// HTTP client, one method per endpoint.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `CoinCapClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared types
    pub use crate::shared::{Envelope, HistoryWindow, Interval};

    // Clock
    pub use crate::clock::{Clock, FixedClock, SystemClock};

    // Domain types
    pub use crate::domain::asset::Asset;
    pub use crate::domain::exchange::Exchange;
    pub use crate::domain::history::{price_range, HistoryPoint};
    pub use crate::domain::market::AssetMarket;

    // Errors
    pub use crate::error::{HttpError, SdkError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{AssetsClient, CoinCapClient, CoinCapClientBuilder, ExchangesClient};
    #[cfg(feature = "http")]
    pub use crate::http::CoinCapHttp;
}
