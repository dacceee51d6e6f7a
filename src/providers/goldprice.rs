//! goldprice.org spot price provider
//!
//! Primary feed. Only carries gold and silver, so platinum, palladium,
//! copper and nickel are always the static constants on a successful fetch.

use crate::{
    constants::{GOLDPRICE_API_URL, REQUEST_TIMEOUT_SECS},
    error::ProviderError,
    provider::SpotPriceProvider,
    providers::{build_client, get_body, is_valid_price},
    types::SpotPrices,
};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

const PROVIDER_NAME: &str = "goldprice.org";

/// goldprice.org rates response
#[derive(Debug, Deserialize)]
struct GoldPriceResponse {
    #[serde(default)]
    items: Vec<GoldPriceItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GoldPriceItem {
    #[serde(default)]
    xau_price: Option<f64>,
    #[serde(default)]
    xag_price: Option<f64>,
}

/// goldprice.org price provider
pub struct GoldPriceProvider {
    client: Client,
    url: String,
}

impl GoldPriceProvider {
    /// Creates a provider for the public goldprice.org endpoint
    pub fn new() -> Result<Self, ProviderError> {
        Self::with_url(GOLDPRICE_API_URL, Duration::from_secs(REQUEST_TIMEOUT_SECS))
    }

    /// Creates a provider for a custom endpoint and request timeout
    pub fn with_url(url: impl Into<String>, timeout: Duration) -> Result<Self, ProviderError> {
        Ok(Self {
            client: build_client(timeout)?,
            url: url.into(),
        })
    }

    /// Parses a rates payload; the first item carries the USD rates
    pub(crate) fn parse_response(body: &str) -> Result<SpotPrices, ProviderError> {
        let response: GoldPriceResponse = serde_json::from_str(body).map_err(|e| {
            ProviderError::invalid_response(format!(
                "Failed to parse goldprice.org response: {}",
                e
            ))
        })?;

        let item = response.items.first().ok_or_else(|| {
            ProviderError::invalid_response("No items in goldprice.org response")
        })?;

        let gold = item
            .xau_price
            .filter(|p| is_valid_price(*p))
            .ok_or_else(|| ProviderError::missing_price("gold"))?;
        let silver = item
            .xag_price
            .filter(|p| is_valid_price(*p))
            .ok_or_else(|| ProviderError::missing_price("silver"))?;

        Ok(SpotPrices::with_gold_silver(gold, silver, PROVIDER_NAME))
    }
}

#[async_trait]
impl SpotPriceProvider for GoldPriceProvider {
    async fn fetch_spot_prices(&self) -> Result<SpotPrices, ProviderError> {
        tracing::debug!(url = %self.url, "Fetching spot prices from goldprice.org");

        let body = get_body(&self.client, &self.url).await?;
        let prices = Self::parse_response(&body)?;

        tracing::debug!(
            gold = prices.gold,
            silver = prices.silver,
            "Fetched spot prices from goldprice.org"
        );

        Ok(prices)
    }

    fn provider_name(&self) -> &'static str {
        PROVIDER_NAME
    }
}
