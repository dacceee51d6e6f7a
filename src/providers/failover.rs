//! Failover price provider implementation

use crate::{error::ProviderError, provider::SpotPriceProvider, types::SpotPrices};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

/// Price provider that attempts to fetch from multiple providers in order
/// until one succeeds.
///
/// Each attempt is bounded by `attempt_timeout` so one hung feed cannot
/// block the rest of the chain. A failed attempt is never retried.
pub struct FailoverProvider {
    providers: Vec<Arc<dyn SpotPriceProvider>>,
    attempt_timeout: Duration,
}

impl FailoverProvider {
    /// Creates a new failover provider with a list of providers
    ///
    /// The providers are tried in the order they are provided.
    pub fn new(providers: Vec<Arc<dyn SpotPriceProvider>>, attempt_timeout: Duration) -> Self {
        Self {
            providers,
            attempt_timeout,
        }
    }
}

#[async_trait]
impl SpotPriceProvider for FailoverProvider {
    async fn fetch_spot_prices(&self) -> Result<SpotPrices, ProviderError> {
        let mut failures = Vec::with_capacity(self.providers.len());

        for provider in &self.providers {
            let attempt =
                tokio::time::timeout(self.attempt_timeout, provider.fetch_spot_prices()).await;

            match attempt {
                Ok(Ok(prices)) => return Ok(prices),
                Ok(Err(e)) => {
                    tracing::warn!(
                        provider = provider.provider_name(),
                        error = %e,
                        "Spot price source failed"
                    );
                    failures.push(format!("{}: {}", provider.provider_name(), e));
                }
                Err(_) => {
                    tracing::warn!(
                        provider = provider.provider_name(),
                        timeout_ms = self.attempt_timeout.as_millis() as u64,
                        "Spot price source timed out"
                    );
                    failures.push(format!(
                        "{}: {}",
                        provider.provider_name(),
                        ProviderError::Timeout
                    ));
                }
            }
        }

        if failures.is_empty() {
            return Err(ProviderError::AllSourcesFailed(
                "No providers configured for failover".to_string(),
            ));
        }

        Err(ProviderError::AllSourcesFailed(failures.join("; ")))
    }

    fn provider_name(&self) -> &'static str {
        "failover"
    }
}
