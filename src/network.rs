//! Network URL constants for the CoinCap SDK.

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "https://api.coincap.io/v2";

/// Number of assets requested by the asset listing.
pub const ASSET_LIST_LIMIT: u32 = 20;

/// Number of markets requested per asset.
pub const MARKETS_LIMIT: u32 = 5;
