//! Melt value engine
//!
//! Entry point for the surrounding service: resolves compositions, serves
//! spot prices and prices coins.

use crate::{
    calculator,
    error::{CatalogError, CompositionError},
    oracle::SpotPriceOracle,
    resolver::CompositionResolver,
    types::{CoinValuation, MetalComposition, SpotPrices},
};
use std::sync::Arc;
use tokio::sync::OnceCell;

static GLOBAL_ENGINE: OnceCell<Arc<MeltValueEngine>> = OnceCell::const_new();

/// Composition resolver plus spot price oracle
///
/// # Example
/// ```no_run
/// use melt_value_sdk::MeltValueEngine;
///
/// # async fn example() {
/// let engine = MeltValueEngine::global().await;
/// if let Some(valuation) = engine.value_coin("Morgan Dollar", Some(1921)).await {
///     println!("{}: ${:.2}", valuation.composition.name, valuation.melt_value);
/// }
/// # }
/// ```
#[derive(Clone)]
pub struct MeltValueEngine {
    resolver: CompositionResolver,
    oracle: Arc<SpotPriceOracle>,
}

impl MeltValueEngine {
    pub fn new(resolver: CompositionResolver, oracle: Arc<SpotPriceOracle>) -> Self {
        Self { resolver, oracle }
    }

    /// Engine over the built-in tables and the given oracle
    pub fn with_oracle(oracle: Arc<SpotPriceOracle>) -> Result<Self, CatalogError> {
        Ok(Self::new(CompositionResolver::builtin()?, oracle))
    }

    /// Returns the process-wide engine backed by [`SpotPriceOracle::global`]
    pub async fn global() -> Arc<Self> {
        GLOBAL_ENGINE
            .get_or_init(|| async {
                let oracle = SpotPriceOracle::global().await;
                Arc::new(Self::new(CompositionResolver::default(), oracle))
            })
            .await
            .clone()
    }

    pub fn resolver(&self) -> &CompositionResolver {
        &self.resolver
    }

    pub fn oracle(&self) -> &Arc<SpotPriceOracle> {
        &self.oracle
    }

    /// Composition for a coin type, year-aware when `year` is given
    pub fn resolve_composition(
        &self,
        coin_type: &str,
        year: Option<i32>,
    ) -> Result<MetalComposition, CompositionError> {
        self.resolver.resolve(coin_type, year)
    }

    /// Every catalog entry, sorted by key
    pub fn compositions(&self) -> Vec<(&'static str, MetalComposition)> {
        self.resolver.catalog().all()
    }

    pub async fn get_spot_prices(&self) -> Arc<SpotPrices> {
        self.oracle.get_spot_prices().await
    }

    /// Melt value from a raw metal name, weight and purity
    pub async fn compute_melt_value(
        &self,
        metal_type: &str,
        weight_troy_oz: f64,
        purity_percent: f64,
    ) -> f64 {
        let prices = self.oracle.get_spot_prices().await;
        calculator::melt_value_for_metal_name(metal_type, weight_troy_oz, purity_percent, &prices)
    }

    pub async fn compute_composition_melt_value(&self, composition: &MetalComposition) -> f64 {
        let prices = self.oracle.get_spot_prices().await;
        calculator::melt_value(composition, &prices)
    }

    pub async fn set_spot_prices_manually(
        &self,
        gold: f64,
        silver: f64,
        platinum: f64,
        palladium: f64,
    ) -> Arc<SpotPrices> {
        self.oracle
            .set_spot_prices_manually(gold, silver, platinum, palladium)
            .await
    }

    /// Resolves and prices a coin in one step.
    ///
    /// Returns `None` for unknown coin types; those are left for manual entry.
    pub async fn value_coin(&self, coin_type: &str, year: Option<i32>) -> Option<CoinValuation> {
        let composition = match self.resolve_composition(coin_type, year) {
            Ok(composition) => composition,
            Err(e) => {
                tracing::debug!(coin_type = coin_type, error = %e, "Cannot value coin");
                return None;
            }
        };

        let prices = self.oracle.get_spot_prices().await;
        Some(CoinValuation {
            composition,
            melt_value: calculator::melt_value(&composition, &prices),
            prices_updated_at: prices.updated_at,
            price_source: prices.source.clone(),
        })
    }
}
