//! # Melt Value SDK
//!
//! Computes the intrinsic metal worth of coins: resolves a coin description
//! (type name plus optional mint year) to its metal composition and prices
//! that composition at current spot prices.
//!
//! ## Two pricing regimes
//!
//! Precious-metal coins are valued by pure content in troy ounces at the
//! per-ounce spot price. Base-metal coins (nickels, cents) are valued by
//! total mass converted to pounds at the per-pound copper and nickel prices.
//!
//! ## Spot prices
//!
//! Prices come from goldprice.org, then metals.live, then a static snapshot
//! if both are down. Results are cached for 15 minutes by default; see
//! [`config::OracleConfig`] for the environment overrides.
//!
//! ## Usage
//!
//! ```no_run
//! use melt_value_sdk::MeltValueEngine;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let engine = MeltValueEngine::global().await;
//!
//! // Year-aware resolution: 1964 quarters are silver, 1965 are clad
//! let quarter = engine.resolve_composition("Washington Quarter", Some(1964))?;
//! let value = engine.compute_composition_melt_value(&quarter).await;
//! println!("{}: ${:.2}", quarter.name, value);
//!
//! // Noisy certification titles are normalized
//! if let Some(valuation) = engine.value_coin("1921-S Peace Dollar MS67", None).await {
//!     println!("{}: ${:.2}", valuation.composition.name, valuation.melt_value);
//! }
//! # Ok(())
//! # }
//! ```

pub mod calculator;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod metrics;
pub mod normalize;
pub mod oracle;
pub mod provider;
pub mod providers;
pub mod resolver;
pub mod types;

// Re-export commonly used types
pub use catalog::CompositionCatalog;
pub use config::{OracleConfig, ProviderSelection};
pub use engine::MeltValueEngine;
pub use error::{CatalogError, CompositionError, ProviderError};
pub use metrics::RefreshMetrics;
pub use oracle::SpotPriceOracle;
pub use provider::SpotPriceProvider;
pub use resolver::CompositionResolver;
pub use types::{
    CoinValuation, ComponentHealth, HealthStatus, Metal, MetalComposition, MetalContent,
    SpotPriceEvent, SpotPrices, YearRule,
};
