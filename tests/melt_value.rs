use async_trait::async_trait;
use melt_value_sdk::{
    constants::{
        FALLBACK_COPPER_PER_LB, FALLBACK_GOLD_PER_OZ, FALLBACK_NICKEL_PER_LB,
        FALLBACK_SILVER_PER_OZ, STATIC_FALLBACK_SOURCE,
    },
    providers::FailoverProvider,
    MeltValueEngine, MetalContent, ProviderError, SpotPriceOracle, SpotPriceProvider, SpotPrices,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

const TTL: Duration = Duration::from_secs(15 * 60);

/// Feed returning fixed gold and silver prices, or always failing
struct FixedFeed {
    name: &'static str,
    prices: Option<(f64, f64)>,
    calls: AtomicUsize,
}

impl FixedFeed {
    fn up(name: &'static str, gold: f64, silver: f64) -> Arc<Self> {
        Arc::new(Self {
            name,
            prices: Some((gold, silver)),
            calls: AtomicUsize::new(0),
        })
    }

    fn down(name: &'static str) -> Arc<Self> {
        Arc::new(Self {
            name,
            prices: None,
            calls: AtomicUsize::new(0),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SpotPriceProvider for FixedFeed {
    async fn fetch_spot_prices(&self) -> Result<SpotPrices, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.prices {
            Some((gold, silver)) => Ok(SpotPrices::with_gold_silver(gold, silver, self.name)),
            None => Err(ProviderError::HttpStatus {
                status: 503,
                body: "unavailable".to_string(),
            }),
        }
    }

    fn provider_name(&self) -> &'static str {
        self.name
    }
}

fn engine(feeds: Vec<Arc<FixedFeed>>) -> MeltValueEngine {
    let chain = FailoverProvider::new(
        feeds
            .into_iter()
            .map(|f| f as Arc<dyn SpotPriceProvider>)
            .collect(),
        Duration::from_secs(10),
    );
    let oracle = SpotPriceOracle::with_provider(Arc::new(chain), TTL);
    MeltValueEngine::with_oracle(Arc::new(oracle)).unwrap()
}

#[tokio::test(start_paused = true)]
async fn test_every_feed_down_serves_static_snapshot() {
    let primary = FixedFeed::down("primary");
    let secondary = FixedFeed::down("secondary");
    let engine = engine(vec![primary.clone(), secondary.clone()]);

    let prices = engine.get_spot_prices().await;
    assert_eq!(prices.source, STATIC_FALLBACK_SOURCE);
    assert_eq!(prices.gold, FALLBACK_GOLD_PER_OZ);
    assert_eq!(prices.silver, FALLBACK_SILVER_PER_OZ);

    // the fallback is cached like a live result
    tokio::time::advance(Duration::from_secs(5 * 60)).await;
    engine.get_spot_prices().await;
    assert_eq!(primary.calls(), 1);
    assert_eq!(secondary.calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_secondary_feed_used_when_primary_down() {
    let engine = engine(vec![
        FixedFeed::down("primary"),
        FixedFeed::up("secondary", 2500.0, 28.0),
    ]);

    let valuation = engine.value_coin("Morgan Dollar", None).await.unwrap();
    assert_eq!(valuation.price_source, "secondary");
    assert!((valuation.melt_value - 0.77344 * 0.9 * 28.0).abs() < 1e-9);
}

#[tokio::test(start_paused = true)]
async fn test_year_changes_value_from_real_to_zero() {
    let engine = engine(vec![FixedFeed::up("primary", 2700.0, 30.0)]);

    let silver = engine.value_coin("Roosevelt Dime", Some(1964)).await.unwrap();
    let clad = engine.value_coin("Roosevelt Dime", Some(1965)).await.unwrap();

    assert!((silver.melt_value - 0.07234 * 0.9 * 30.0).abs() < 1e-9);
    assert_eq!(clad.melt_value, 0.0);
}

#[tokio::test(start_paused = true)]
async fn test_wartime_and_regular_nickels() {
    let engine = engine(vec![FixedFeed::up("primary", 2700.0, 30.0)]);

    let wartime = engine
        .value_coin("Jefferson Nickel (Wartime Silver)", None)
        .await
        .unwrap();
    assert!((wartime.melt_value - 0.05626 * 0.35 * 30.0).abs() < 1e-9);

    let standard = engine.value_coin("Jefferson Nickel", Some(1970)).await.unwrap();
    assert!(standard.composition.is_base_metal());
    assert!(standard.melt_value > 0.0 && standard.melt_value < 0.2);
}

#[tokio::test(start_paused = true)]
async fn test_buffalo_nickel_priced_per_pound() {
    let engine = engine(vec![FixedFeed::up("primary", 2700.0, 30.0)]);
    // feed carries gold and silver only, base metals stay at the constants
    let expected =
        (5.0 / 453.592) * (0.75 * FALLBACK_COPPER_PER_LB + 0.25 * FALLBACK_NICKEL_PER_LB);

    for year in [Some(1920), None] {
        let valuation = engine.value_coin("Buffalo Nickel", year).await.unwrap();
        assert_eq!(
            valuation.composition.content,
            MetalContent::BaseAlloy {
                weight_grams: 5.0,
                copper_percent: 75.0,
                nickel_percent: 25.0,
            }
        );
        assert!((valuation.melt_value - expected).abs() < 1e-12);
        assert!((valuation.melt_value - 0.0648).abs() < 0.0001);
    }
}

#[tokio::test(start_paused = true)]
async fn test_lincoln_cent_eras() {
    let engine = engine(vec![FixedFeed::up("primary", 2700.0, 30.0)]);

    let bronze = engine.resolve_composition("Lincoln Cent", Some(1920)).unwrap();
    let steel = engine.resolve_composition("Lincoln Cent", Some(1943)).unwrap();
    let zinc = engine.resolve_composition("Lincoln Cent", Some(1990)).unwrap();

    assert_eq!(bronze.name, "Lincoln Cent (1909-1942)");
    assert_eq!(steel.name, "Lincoln Cent (1943 Steel)");
    assert_eq!(zinc.name, "Lincoln Cent (1982+)");
    assert_eq!(engine.compute_composition_melt_value(&steel).await, 0.0);
}

#[tokio::test(start_paused = true)]
async fn test_unknown_coin_is_not_valued() {
    let primary = FixedFeed::up("primary", 2700.0, 30.0);
    let engine = engine(vec![primary.clone()]);

    assert!(engine.value_coin("Hobo Nickel", Some(1913)).await.is_none());
    assert_eq!(primary.calls(), 0);
}
