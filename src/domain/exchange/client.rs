//! Exchanges sub-client.

use crate::client::CoinCapClient;
use crate::domain::exchange::wire::ExchangeResponse;
use crate::domain::exchange::{Exchange, ExchangeValidationError};
use crate::error::SdkError;

/// Sub-client for exchange operations.
pub struct Exchanges<'a> {
    pub(crate) client: &'a CoinCapClient,
}

impl<'a> Exchanges<'a> {
    pub async fn get(&self, id: &str) -> Result<Exchange, SdkError> {
        let resp: ExchangeResponse = self.client.http.get_exchange(id).await?;
        resp.try_into()
            .map_err(|e: ExchangeValidationError| SdkError::Validation(e.to_string()))
    }
}
