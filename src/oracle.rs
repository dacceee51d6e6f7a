//! Spot price oracle
//!
//! Serves a cached spot price snapshot and refreshes it lazily once it is
//! older than the cache TTL. `get_spot_prices` never fails: when every feed
//! is down the static fallback snapshot is cached instead, and because it is
//! cached like any other result the next attempt waits a full TTL rather
//! than hammering dead feeds on every call.

use crate::{
    config::OracleConfig,
    constants::{
        EVENT_CHANNEL_CAPACITY, FALLBACK_COPPER_PER_LB, FALLBACK_NICKEL_PER_LB, MANUAL_SOURCE,
    },
    metrics::{MetricsCollector, RefreshMetrics},
    provider::SpotPriceProvider,
    providers::FailoverProvider,
    types::{ComponentHealth, HealthStatus, SpotPriceEvent, SpotPrices},
};
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{broadcast, Mutex, OnceCell, RwLock};
use tokio::time::Instant;
use uuid::Uuid;

static GLOBAL_ORACLE: OnceCell<Arc<SpotPriceOracle>> = OnceCell::const_new();

struct CachedPrices {
    prices: Arc<SpotPrices>,
    fetched_at: Instant,
    /// Bumped on every write so a refresh can tell it was overtaken
    generation: u64,
}

/// Cached, self-refreshing spot prices
///
/// # Example
/// ```no_run
/// use melt_value_sdk::SpotPriceOracle;
///
/// # async fn example() {
/// let oracle = SpotPriceOracle::global().await;
/// let prices = oracle.get_spot_prices().await;
/// println!("Silver: ${:.2} ({})", prices.silver, prices.source);
/// # }
/// ```
pub struct SpotPriceOracle {
    provider: Arc<dyn SpotPriceProvider>,
    cache_ttl: Duration,
    /// Only held briefly; readers never wait on a network fetch
    cache: RwLock<Option<CachedPrices>>,
    /// Held across a refresh so concurrent stale callers wait for one fetch
    refresh_lock: Mutex<()>,
    metrics: Arc<MetricsCollector>,
    events: broadcast::Sender<SpotPriceEvent>,
}

impl SpotPriceOracle {
    /// Returns the process-wide oracle configured from the environment
    pub async fn global() -> Arc<Self> {
        GLOBAL_ORACLE
            .get_or_init(|| async { Arc::new(Self::from_config(&OracleConfig::from_env())) })
            .await
            .clone()
    }

    /// Creates an oracle for the feeds selected in `config`
    ///
    /// If the HTTP clients cannot be built the oracle runs with no live
    /// feeds and serves the static fallback.
    pub fn from_config(config: &OracleConfig) -> Self {
        let provider = config.build_provider().unwrap_or_else(|e| {
            tracing::error!(error = %e, "Failed to build price feeds, using static prices only");
            Arc::new(FailoverProvider::new(Vec::new(), config.request_timeout))
        });

        Self::with_provider(provider, config.cache_ttl)
    }

    /// Creates an oracle with a custom provider
    ///
    /// The provider is expected to bound its own request time.
    pub fn with_provider(provider: Arc<dyn SpotPriceProvider>, cache_ttl: Duration) -> Self {
        let metrics = Arc::new(MetricsCollector::new(provider.provider_name()));
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);

        Self {
            provider,
            cache_ttl,
            cache: RwLock::new(None),
            refresh_lock: Mutex::new(()),
            metrics,
            events,
        }
    }

    /// Returns current spot prices, refreshing first if the cache is cold or
    /// at least one TTL old.
    pub async fn get_spot_prices(&self) -> Arc<SpotPrices> {
        if let Some(prices) = self.fresh_prices().await {
            return prices;
        }

        let _refresh = self.refresh_lock.lock().await;
        // another caller may have refreshed while we waited
        if let Some(prices) = self.fresh_prices().await {
            return prices;
        }
        self.refresh().await
    }

    /// Refreshes immediately regardless of cache age
    pub async fn refresh_now(&self) -> Arc<SpotPrices> {
        let _refresh = self.refresh_lock.lock().await;
        self.refresh().await
    }

    async fn fresh_prices(&self) -> Option<Arc<SpotPrices>> {
        self.cache
            .read()
            .await
            .as_ref()
            .filter(|c| c.fetched_at.elapsed() < self.cache_ttl)
            .map(|c| c.prices.clone())
    }

    /// Fetches and stores a snapshot. Callers hold `refresh_lock`.
    ///
    /// A manual override written during the fetch is kept and returned.
    async fn refresh(&self) -> Arc<SpotPrices> {
        let seen = self.cache.read().await.as_ref().map(|c| c.generation);
        let prices = self.fetch().await;

        let mut cache = self.cache.write().await;
        let current = cache.as_ref().map(|c| c.generation);
        if current != seen {
            if let Some(cached) = cache.as_ref() {
                tracing::debug!("Keeping spot prices set during refresh");
                return cached.prices.clone();
            }
        }
        Self::store(&mut cache, prices.clone());
        prices
    }

    fn store(cache: &mut Option<CachedPrices>, prices: Arc<SpotPrices>) {
        let generation = cache.as_ref().map_or(0, |c| c.generation + 1);
        *cache = Some(CachedPrices {
            prices,
            fetched_at: Instant::now(),
            generation,
        });
    }

    /// Runs the feed chain once, falling back to the static snapshot
    async fn fetch(&self) -> Arc<SpotPrices> {
        let start = Instant::now();

        match self.provider.fetch_spot_prices().await {
            Ok(prices) => {
                tracing::info!(
                    source = %prices.source,
                    gold = prices.gold,
                    silver = prices.silver,
                    latency_ms = start.elapsed().as_millis() as u64,
                    "Fetched live spot prices"
                );
                self.metrics
                    .record_success(start.elapsed(), &prices.source)
                    .await;
                self.emit(SpotPriceEvent::PricesRefreshed {
                    id: Uuid::new_v4(),
                    source: prices.source.clone(),
                    gold: prices.gold,
                    silver: prices.silver,
                    timestamp: Utc::now(),
                });
                Arc::new(prices)
            }
            Err(e) => {
                tracing::warn!(
                    provider = self.provider.provider_name(),
                    error = %e,
                    "Using fallback spot prices"
                );
                self.metrics.record_fallback(start.elapsed()).await;
                self.emit(SpotPriceEvent::FallbackUsed {
                    id: Uuid::new_v4(),
                    error_message: e.to_string(),
                    timestamp: Utc::now(),
                });
                Arc::new(SpotPrices::fallback())
            }
        }
    }

    /// Sets precious metal prices by hand, bypassing the feeds.
    ///
    /// Copper and nickel take the static constants. The TTL clock restarts.
    pub async fn set_spot_prices_manually(
        &self,
        gold: f64,
        silver: f64,
        platinum: f64,
        palladium: f64,
    ) -> Arc<SpotPrices> {
        self.set_spot_prices(SpotPrices {
            gold,
            silver,
            platinum,
            palladium,
            copper: FALLBACK_COPPER_PER_LB,
            nickel: FALLBACK_NICKEL_PER_LB,
            updated_at: Utc::now(),
            source: MANUAL_SOURCE.to_string(),
        })
        .await
    }

    /// Replaces the cache with a caller-supplied snapshot and restarts the TTL clock
    pub async fn set_spot_prices(&self, prices: SpotPrices) -> Arc<SpotPrices> {
        let prices = Arc::new(prices);
        Self::store(&mut *self.cache.write().await, prices.clone());

        tracing::info!(
            gold = prices.gold,
            silver = prices.silver,
            platinum = prices.platinum,
            palladium = prices.palladium,
            "Spot prices set manually"
        );
        self.emit(SpotPriceEvent::ManualOverride {
            id: Uuid::new_v4(),
            gold: prices.gold,
            silver: prices.silver,
            timestamp: Utc::now(),
        });

        prices
    }

    pub fn cache_ttl(&self) -> Duration {
        self.cache_ttl
    }

    /// Returns the name of the provider chain
    pub fn provider_name(&self) -> &'static str {
        self.provider.provider_name()
    }

    /// Subscribes to refresh, fallback and override events
    pub fn subscribe(&self) -> broadcast::Receiver<SpotPriceEvent> {
        self.events.subscribe()
    }

    fn emit(&self, event: SpotPriceEvent) {
        tracing::trace!(event_type = event.event_type(), "{}", event);
        // no subscribers is fine
        let _ = self.events.send(event);
    }

    /// Gets refresh metrics including latency percentiles and success rate
    pub async fn get_refresh_metrics(&self) -> RefreshMetrics {
        self.metrics.get_metrics().await
    }

    /// Perform a health check on the oracle
    ///
    /// # Returns
    /// Unhealthy before the first fetch, Degraded while serving the static
    /// fallback or a stale snapshot, Healthy otherwise
    pub async fn health_check(&self) -> ComponentHealth {
        let mut details = std::collections::HashMap::new();
        details.insert(
            "provider_name".to_string(),
            serde_json::json!(self.provider_name()),
        );
        details.insert(
            "cache_ttl_secs".to_string(),
            serde_json::json!(self.cache_ttl.as_secs()),
        );

        let snapshot = {
            let cache = self.cache.read().await;
            cache
                .as_ref()
                .map(|c| (c.prices.clone(), c.fetched_at.elapsed()))
        };

        let (status, message) = match snapshot {
            None => (
                HealthStatus::Unhealthy,
                "No spot prices fetched yet".to_string(),
            ),
            Some((prices, age)) => {
                details.insert("source".to_string(), serde_json::json!(prices.source));
                details.insert("cache_age_secs".to_string(), serde_json::json!(age.as_secs()));
                details.insert(
                    "updated_at".to_string(),
                    serde_json::json!(prices.updated_at.to_rfc3339()),
                );

                if prices.is_fallback() {
                    (
                        HealthStatus::Degraded,
                        "Serving static fallback spot prices".to_string(),
                    )
                } else if age >= self.cache_ttl {
                    (
                        HealthStatus::Degraded,
                        format!("Spot prices are stale ({}s old)", age.as_secs()),
                    )
                } else {
                    (
                        HealthStatus::Healthy,
                        format!("Serving spot prices from {}", prices.source),
                    )
                }
            }
        };

        let metrics = self.get_refresh_metrics().await;
        details.insert(
            "success_rate".to_string(),
            serde_json::json!(metrics.success_rate),
        );

        ComponentHealth {
            name: "spot_price_oracle".to_string(),
            status,
            message: Some(message),
            details,
            last_checked: Utc::now(),
        }
    }
}
