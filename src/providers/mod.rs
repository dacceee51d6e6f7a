//! Spot price feed implementations

pub mod failover;
pub mod goldprice;
pub mod metals_live;

pub use failover::FailoverProvider;
pub use goldprice::GoldPriceProvider;
pub use metals_live::MetalsLiveProvider;

use crate::{constants::USER_AGENT, error::ProviderError};
use reqwest::Client;
use std::time::Duration;

/// Builds an HTTP client whose requests give up after `timeout`
pub(crate) fn build_client(timeout: Duration) -> Result<Client, ProviderError> {
    Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
        .map_err(ProviderError::NetworkError)
}

/// GETs `url` and returns the body of a successful response
pub(crate) async fn get_body(client: &Client, url: &str) -> Result<String, ProviderError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(ProviderError::NetworkError)?;

    let status = response.status();
    if !status.is_success() {
        return Err(ProviderError::HttpStatus {
            status: status.as_u16(),
            body: response.text().await.unwrap_or_default(),
        });
    }

    response.text().await.map_err(ProviderError::NetworkError)
}

/// A usable price is finite and strictly positive
pub(crate) fn is_valid_price(price: f64) -> bool {
    price.is_finite() && price > 0.0
}
