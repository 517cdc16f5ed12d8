//! Assets sub-client — listing, detail, history and markets.

use crate::client::CoinCapClient;
use crate::domain::asset::wire::AssetResponse;
use crate::domain::asset::{Asset, ValidationError};
use crate::domain::history::wire::HistoryPointResponse;
use crate::domain::history::HistoryPoint;
use crate::domain::market::wire::MarketResponse;
use crate::domain::market::AssetMarket;
use crate::error::SdkError;

/// Sub-client for asset operations. Every call re-fetches; nothing is cached.
pub struct Assets<'a> {
    pub(crate) client: &'a CoinCapClient,
}

impl<'a> Assets<'a> {
    /// Top 20 assets by rank.
    pub async fn list(&self) -> Result<Vec<Asset>, SdkError> {
        let resp: Vec<AssetResponse> = self.client.http.list_assets().await?;
        convert_all(resp)
    }

    pub async fn get(&self, coin: &str) -> Result<Asset, SdkError> {
        let resp: AssetResponse = self.client.http.get_asset(coin).await?;
        resp.try_into()
            .map_err(|e: ValidationError| SdkError::Validation(e.to_string()))
    }

    /// Hourly prices over the last 24 hours.
    pub async fn history(&self, coin: &str) -> Result<Vec<HistoryPoint>, SdkError> {
        let resp: Vec<HistoryPointResponse> = self.client.http.get_asset_history(coin).await?;
        convert_all(resp)
    }

    /// Top 5 markets trading this asset.
    pub async fn markets(&self, coin: &str) -> Result<Vec<AssetMarket>, SdkError> {
        let resp: Vec<MarketResponse> = self.client.http.get_markets(coin).await?;
        convert_all(resp)
    }
}

fn convert_all<W, D>(items: Vec<W>) -> Result<Vec<D>, SdkError>
where
    D: TryFrom<W>,
    D::Error: std::fmt::Display,
{
    items
        .into_iter()
        .map(|w| D::try_from(w).map_err(|e| SdkError::Validation(e.to_string())))
        .collect()
}
