//! Constants for the melt value engine
//!
//! Compile-time defaults. `OracleConfig::from_env` can override the cache
//! and network settings at runtime.

/// How long a fetched spot price snapshot is served before refreshing (in seconds)
pub const CACHE_TTL_SECS: u64 = 15 * 60;

/// HTTP request timeout for a single price feed attempt (in seconds)
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Primary feed: gold and silver rates
pub const GOLDPRICE_API_URL: &str = "https://data-asg.goldprice.org/dbXRates/USD";

/// Secondary feed: spot prices for up to six metals
pub const METALS_LIVE_API_URL: &str = "https://www.metals.live/v1/spot";

/// User agent for HTTP requests
pub const USER_AGENT: &str = "melt-value-sdk/0.1.0";

/// Grams per avoirdupois pound
pub const GRAMS_PER_POUND: f64 = 453.592;

// Last known good prices (Dec 2025). Precious metals in USD per troy ounce,
// base metals in USD per pound.
pub const FALLBACK_GOLD_PER_OZ: f64 = 2650.00;
pub const FALLBACK_SILVER_PER_OZ: f64 = 30.50;
pub const FALLBACK_PLATINUM_PER_OZ: f64 = 950.00;
pub const FALLBACK_PALLADIUM_PER_OZ: f64 = 950.00;
pub const FALLBACK_COPPER_PER_LB: f64 = 5.52;
pub const FALLBACK_NICKEL_PER_LB: f64 = 6.96;

/// Source label of the static fallback snapshot
pub const STATIC_FALLBACK_SOURCE: &str = "static-fallback";

/// Source label of administrator-supplied prices
pub const MANUAL_SOURCE: &str = "manual";

/// Capacity of the spot price event channel
pub const EVENT_CHANNEL_CAPACITY: usize = 64;
