//! Runtime configuration for the spot price oracle
//!
//! Defaults come from [`crate::constants`]. `from_env` lets a deployment
//! switch feeds or tune timing without a rebuild:
//!
//! | Variable | Meaning |
//! |---|---|
//! | `MELT_PRICE_PROVIDER` | `failover` (default), `goldprice`, `metals-live` or `static` |
//! | `MELT_PRICE_CACHE_TTL_SECS` | how long a snapshot is served |
//! | `MELT_PRICE_REQUEST_TIMEOUT_SECS` | bound on each feed attempt |
//! | `MELT_GOLDPRICE_URL` | primary feed endpoint |
//! | `MELT_METALS_LIVE_URL` | secondary feed endpoint |

use crate::{
    constants::{CACHE_TTL_SECS, GOLDPRICE_API_URL, METALS_LIVE_API_URL, REQUEST_TIMEOUT_SECS},
    error::ProviderError,
    provider::SpotPriceProvider,
    providers::{FailoverProvider, GoldPriceProvider, MetalsLiveProvider},
};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

/// Which feeds the oracle consults
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderSelection {
    /// goldprice.org, then metals.live
    Failover,
    GoldPrice,
    MetalsLive,
    /// No live feeds; always serve the static snapshot
    Static,
}

impl FromStr for ProviderSelection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "failover" => Ok(Self::Failover),
            "goldprice" | "goldprice.org" => Ok(Self::GoldPrice),
            "metals-live" | "metals.live" | "metalslive" => Ok(Self::MetalsLive),
            "static" | "none" => Ok(Self::Static),
            other => Err(format!("unknown price provider: {}", other)),
        }
    }
}

/// Oracle settings
#[derive(Debug, Clone, PartialEq)]
pub struct OracleConfig {
    pub provider: ProviderSelection,
    pub cache_ttl: Duration,
    pub request_timeout: Duration,
    pub goldprice_url: String,
    pub metals_live_url: String,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            provider: ProviderSelection::Failover,
            cache_ttl: Duration::from_secs(CACHE_TTL_SECS),
            request_timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            goldprice_url: GOLDPRICE_API_URL.to_string(),
            metals_live_url: METALS_LIVE_API_URL.to_string(),
        }
    }
}

impl OracleConfig {
    /// Defaults overridden by any `MELT_*` environment variables that are set
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Invalid values are logged and ignored
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(value) = lookup("MELT_PRICE_PROVIDER") {
            match value.parse() {
                Ok(provider) => config.provider = provider,
                Err(e) => tracing::warn!(error = %e, "Ignoring MELT_PRICE_PROVIDER"),
            }
        }
        if let Some(secs) = parse_secs(&lookup, "MELT_PRICE_CACHE_TTL_SECS") {
            config.cache_ttl = Duration::from_secs(secs);
        }
        if let Some(secs) = parse_secs(&lookup, "MELT_PRICE_REQUEST_TIMEOUT_SECS") {
            config.request_timeout = Duration::from_secs(secs);
        }
        if let Some(url) = lookup("MELT_GOLDPRICE_URL") {
            config.goldprice_url = url;
        }
        if let Some(url) = lookup("MELT_METALS_LIVE_URL") {
            config.metals_live_url = url;
        }

        config
    }

    /// Builds the feed chain for the selected providers
    pub fn build_provider(&self) -> Result<Arc<dyn SpotPriceProvider>, ProviderError> {
        let mut chain: Vec<Arc<dyn SpotPriceProvider>> = Vec::new();

        if matches!(
            self.provider,
            ProviderSelection::Failover | ProviderSelection::GoldPrice
        ) {
            chain.push(Arc::new(GoldPriceProvider::with_url(
                &self.goldprice_url,
                self.request_timeout,
            )?));
        }
        if matches!(
            self.provider,
            ProviderSelection::Failover | ProviderSelection::MetalsLive
        ) {
            chain.push(Arc::new(MetalsLiveProvider::with_url(
                &self.metals_live_url,
                self.request_timeout,
            )?));
        }

        Ok(Arc::new(FailoverProvider::new(chain, self.request_timeout)))
    }
}

fn parse_secs(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<u64> {
    let value = lookup(key)?;
    match value.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Some(secs),
        _ => {
            tracing::warn!(key = key, value = %value, "Ignoring invalid duration");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = OracleConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, OracleConfig::default());
        assert_eq!(config.cache_ttl, Duration::from_secs(900));
        assert_eq!(config.provider, ProviderSelection::Failover);
    }

    #[test]
    fn test_env_overrides() {
        let config = OracleConfig::from_lookup(lookup_from(&[
            ("MELT_PRICE_PROVIDER", "metals-live"),
            ("MELT_PRICE_CACHE_TTL_SECS", "60"),
            ("MELT_PRICE_REQUEST_TIMEOUT_SECS", "3"),
            ("MELT_GOLDPRICE_URL", "http://localhost:9000/rates"),
        ]));
        assert_eq!(config.provider, ProviderSelection::MetalsLive);
        assert_eq!(config.cache_ttl, Duration::from_secs(60));
        assert_eq!(config.request_timeout, Duration::from_secs(3));
        assert_eq!(config.goldprice_url, "http://localhost:9000/rates");
        assert_eq!(config.metals_live_url, METALS_LIVE_API_URL);
    }

    #[test]
    fn test_invalid_values_are_ignored() {
        let config = OracleConfig::from_lookup(lookup_from(&[
            ("MELT_PRICE_PROVIDER", "coingecko"),
            ("MELT_PRICE_CACHE_TTL_SECS", "soon"),
            ("MELT_PRICE_REQUEST_TIMEOUT_SECS", "0"),
        ]));
        assert_eq!(config, OracleConfig::default());
    }

    #[test]
    fn test_provider_selection_parse() {
        assert_eq!("GoldPrice".parse(), Ok(ProviderSelection::GoldPrice));
        assert_eq!("metals.live".parse(), Ok(ProviderSelection::MetalsLive));
        assert_eq!("static".parse(), Ok(ProviderSelection::Static));
        assert!("binance".parse::<ProviderSelection>().is_err());
    }
}
