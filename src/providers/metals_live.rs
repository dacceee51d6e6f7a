//! metals.live spot price provider
//!
//! Secondary feed returning `[{"metal": "gold", "price": 2650.1}, ...]`.

use crate::{
    constants::{METALS_LIVE_API_URL, REQUEST_TIMEOUT_SECS},
    error::ProviderError,
    provider::SpotPriceProvider,
    providers::{build_client, get_body, is_valid_price},
    types::SpotPrices,
};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

const PROVIDER_NAME: &str = "metals.live";

/// One record of the spot array; a null or absent price is treated as missing
#[derive(Debug, Deserialize)]
struct MetalsLiveRecord {
    #[serde(default)]
    metal: String,
    #[serde(default)]
    price: Option<f64>,
}

/// metals.live price provider
pub struct MetalsLiveProvider {
    client: Client,
    url: String,
}

impl MetalsLiveProvider {
    /// Creates a provider for the public metals.live endpoint
    pub fn new() -> Result<Self, ProviderError> {
        Self::with_url(METALS_LIVE_API_URL, Duration::from_secs(REQUEST_TIMEOUT_SECS))
    }

    /// Creates a provider for a custom endpoint and request timeout
    pub fn with_url(url: impl Into<String>, timeout: Duration) -> Result<Self, ProviderError> {
        Ok(Self {
            client: build_client(timeout)?,
            url: url.into(),
        })
    }

    /// Parses the record array.
    ///
    /// Gold and silver are required. Any other metal that is absent or not
    /// positive keeps its static constant.
    pub(crate) fn parse_response(body: &str) -> Result<SpotPrices, ProviderError> {
        let records: Vec<MetalsLiveRecord> = serde_json::from_str(body).map_err(|e| {
            ProviderError::invalid_response(format!("Failed to parse metals.live response: {}", e))
        })?;

        let mut prices = SpotPrices::fallback();
        prices.source = PROVIDER_NAME.to_string();
        let (mut gold, mut silver) = (None, None);

        for record in &records {
            let Some(price) = record.price.filter(|p| is_valid_price(*p)) else {
                continue;
            };
            match record.metal.as_str() {
                "gold" => gold = Some(price),
                "silver" => silver = Some(price),
                "platinum" => prices.platinum = price,
                "palladium" => prices.palladium = price,
                "copper" => prices.copper = price,
                "nickel" => prices.nickel = price,
                other => tracing::trace!(metal = other, "Ignoring unknown metal from metals.live"),
            }
        }

        prices.gold = gold.ok_or_else(|| ProviderError::missing_price("gold"))?;
        prices.silver = silver.ok_or_else(|| ProviderError::missing_price("silver"))?;

        Ok(prices)
    }
}

#[async_trait]
impl SpotPriceProvider for MetalsLiveProvider {
    async fn fetch_spot_prices(&self) -> Result<SpotPrices, ProviderError> {
        tracing::debug!(url = %self.url, "Fetching spot prices from metals.live");

        let body = get_body(&self.client, &self.url).await?;
        let prices = Self::parse_response(&body)?;

        tracing::debug!(
            gold = prices.gold,
            silver = prices.silver,
            platinum = prices.platinum,
            "Fetched spot prices from metals.live"
        );

        Ok(prices)
    }

    fn provider_name(&self) -> &'static str {
        PROVIDER_NAME
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{
        FALLBACK_NICKEL_PER_LB, FALLBACK_PALLADIUM_PER_OZ, FALLBACK_PLATINUM_PER_OZ,
    };

    #[test]
    fn test_parse_all_six_metals() {
        let body = r#"[
            {"metal": "gold", "price": 2701.5},
            {"metal": "silver", "price": 31.2},
            {"metal": "platinum", "price": 982.0},
            {"metal": "palladium", "price": 1011.0},
            {"metal": "copper", "price": 4.9},
            {"metal": "nickel", "price": 7.4}
        ]"#;
        let prices = MetalsLiveProvider::parse_response(body).unwrap();
        assert_eq!(prices.gold, 2701.5);
        assert_eq!(prices.silver, 31.2);
        assert_eq!(prices.platinum, 982.0);
        assert_eq!(prices.palladium, 1011.0);
        assert_eq!(prices.copper, 4.9);
        assert_eq!(prices.nickel, 7.4);
        assert_eq!(prices.source, "metals.live");
    }

    #[test]
    fn test_missing_secondary_metals_keep_constants() {
        let body = r#"[
            {"metal": "gold", "price": 2701.5},
            {"metal": "silver", "price": 31.2},
            {"metal": "palladium", "price": 0},
            {"metal": "rhodium", "price": 4500}
        ]"#;
        let prices = MetalsLiveProvider::parse_response(body).unwrap();
        assert_eq!(prices.palladium, FALLBACK_PALLADIUM_PER_OZ);
        assert_eq!(prices.nickel, FALLBACK_NICKEL_PER_LB);
        assert!(!prices.is_fallback());
    }

    #[test]
    fn test_null_secondary_price_keeps_constant() {
        let body = r#"[
            {"metal": "gold", "price": 2700.0},
            {"metal": "silver", "price": 31.0},
            {"metal": "platinum", "price": null},
            {"price": 12.5}
        ]"#;
        let prices = MetalsLiveProvider::parse_response(body).unwrap();
        assert_eq!(prices.gold, 2700.0);
        assert_eq!(prices.silver, 31.0);
        assert_eq!(prices.platinum, FALLBACK_PLATINUM_PER_OZ);
        assert_eq!(prices.source, "metals.live");
    }

    #[test]
    fn test_null_silver_is_failure() {
        let body = r#"[{"metal": "gold", "price": 2700.0}, {"metal": "silver", "price": null}]"#;
        assert!(matches!(
            MetalsLiveProvider::parse_response(body),
            Err(ProviderError::MissingPrice(metal)) if metal == "silver"
        ));
    }

    #[test]
    fn test_missing_gold_or_silver_is_failure() {
        let no_silver = r#"[{"metal": "gold", "price": 2701.5}]"#;
        assert!(matches!(
            MetalsLiveProvider::parse_response(no_silver),
            Err(ProviderError::MissingPrice(metal)) if metal == "silver"
        ));

        let zero_gold = r#"[{"metal": "gold", "price": 0}, {"metal": "silver", "price": 31.2}]"#;
        assert!(matches!(
            MetalsLiveProvider::parse_response(zero_gold),
            Err(ProviderError::MissingPrice(metal)) if metal == "gold"
        ));

        assert!(MetalsLiveProvider::parse_response("[]").is_err());
    }

    #[test]
    fn test_malformed_body_is_failure() {
        assert!(matches!(
            MetalsLiveProvider::parse_response(r#"{"error": "down"}"#),
            Err(ProviderError::InvalidResponse(_))
        ));
    }
}
