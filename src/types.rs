//! Types for the melt value engine

use crate::constants::{
    FALLBACK_COPPER_PER_LB, FALLBACK_GOLD_PER_OZ, FALLBACK_NICKEL_PER_LB,
    FALLBACK_PALLADIUM_PER_OZ, FALLBACK_PLATINUM_PER_OZ, FALLBACK_SILVER_PER_OZ,
    STATIC_FALLBACK_SOURCE,
};
use crate::error::CompositionError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Primary metal of a coin composition
///
/// `Copper` doubles as the "no precious metal" sentinel: a precious-metal
/// composition tagged copper always melts to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metal {
    Gold,
    Silver,
    Platinum,
    Palladium,
    Copper,
}

impl Metal {
    /// Get the lowercase metal name
    pub fn name(&self) -> &'static str {
        match self {
            Metal::Gold => "gold",
            Metal::Silver => "silver",
            Metal::Platinum => "platinum",
            Metal::Palladium => "palladium",
            Metal::Copper => "copper",
        }
    }
}

impl fmt::Display for Metal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Metal {
    type Err = CompositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gold" => Ok(Metal::Gold),
            "silver" => Ok(Metal::Silver),
            "platinum" => Ok(Metal::Platinum),
            "palladium" => Ok(Metal::Palladium),
            "copper" => Ok(Metal::Copper),
            other => Err(CompositionError::unsupported_metal(other)),
        }
    }
}

/// Metal content of one coin variant
///
/// The two variants use incompatible weight systems and are valued by
/// different formulas, so a composition carries exactly one of them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MetalContent {
    /// Valued by pure metal content in troy ounces
    Precious {
        metal: Metal,
        /// Troy ounces of pure metal
        weight_troy_oz: f64,
        /// Percent of the coin's mass that is the precious metal
        purity_percent: f64,
    },
    /// Valued by bulk alloy mass at per-pound commodity rates
    BaseAlloy {
        /// Total coin mass in grams
        weight_grams: f64,
        copper_percent: f64,
        nickel_percent: f64,
    },
}

/// Metal composition of a coin type, optionally scoped to a year range
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetalComposition {
    /// Display label, may encode the applicable years
    pub name: &'static str,
    /// Human-readable summary of the metal content
    pub description: &'static str,
    pub content: MetalContent,
}

impl MetalComposition {
    /// A precious-metal composition
    pub const fn precious(
        name: &'static str,
        metal: Metal,
        weight_troy_oz: f64,
        purity_percent: f64,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            description,
            content: MetalContent::Precious {
                metal,
                weight_troy_oz,
                purity_percent,
            },
        }
    }

    /// A copper-sentinel composition carrying no tracked metal value
    pub const fn valueless(name: &'static str, description: &'static str) -> Self {
        Self::precious(name, Metal::Copper, 0.0, 0.0, description)
    }

    /// A base-metal alloy composition valued per pound
    pub const fn base_alloy(
        name: &'static str,
        weight_grams: f64,
        copper_percent: f64,
        nickel_percent: f64,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            description,
            content: MetalContent::BaseAlloy {
                weight_grams,
                copper_percent,
                nickel_percent,
            },
        }
    }

    /// Primary metal; base alloys report copper
    pub fn metal_type(&self) -> Metal {
        match self.content {
            MetalContent::Precious { metal, .. } => metal,
            MetalContent::BaseAlloy { .. } => Metal::Copper,
        }
    }

    pub fn is_base_metal(&self) -> bool {
        matches!(self.content, MetalContent::BaseAlloy { .. })
    }

    /// Troy ounces of pure precious metal, zero for base alloys
    pub fn weight_troy_oz(&self) -> f64 {
        match self.content {
            MetalContent::Precious { weight_troy_oz, .. } => weight_troy_oz,
            MetalContent::BaseAlloy { .. } => 0.0,
        }
    }

    /// Precious metal purity percent, zero for base alloys
    pub fn purity_percent(&self) -> f64 {
        match self.content {
            MetalContent::Precious { purity_percent, .. } => purity_percent,
            MetalContent::BaseAlloy { .. } => 0.0,
        }
    }

    pub fn weight_grams(&self) -> Option<f64> {
        match self.content {
            MetalContent::BaseAlloy { weight_grams, .. } => Some(weight_grams),
            MetalContent::Precious { .. } => None,
        }
    }

    pub fn copper_percent(&self) -> Option<f64> {
        match self.content {
            MetalContent::BaseAlloy { copper_percent, .. } => Some(copper_percent),
            MetalContent::Precious { .. } => None,
        }
    }

    pub fn nickel_percent(&self) -> Option<f64> {
        match self.content {
            MetalContent::BaseAlloy { nickel_percent, .. } => Some(nickel_percent),
            MetalContent::Precious { .. } => None,
        }
    }
}

/// One year range of a coin type's composition history
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YearRule {
    pub start_year: i32,
    pub end_year: i32,
    pub composition: MetalComposition,
}

impl YearRule {
    pub const fn new(start_year: i32, end_year: i32, composition: MetalComposition) -> Self {
        Self {
            start_year,
            end_year,
            composition,
        }
    }

    /// Inclusive on both ends
    pub fn contains(&self, year: i32) -> bool {
        self.start_year <= year && year <= self.end_year
    }
}

/// Snapshot of spot prices
///
/// Precious metals are quoted in USD per troy ounce, copper and nickel in
/// USD per pound.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpotPrices {
    pub gold: f64,
    pub silver: f64,
    pub platinum: f64,
    pub palladium: f64,
    pub copper: f64,
    pub nickel: f64,
    pub updated_at: DateTime<Utc>,
    /// Feed that produced the snapshot
    pub source: String,
}

impl SpotPrices {
    /// Static last-known-good snapshot stamped with the current time
    pub fn fallback() -> Self {
        Self {
            gold: FALLBACK_GOLD_PER_OZ,
            silver: FALLBACK_SILVER_PER_OZ,
            platinum: FALLBACK_PLATINUM_PER_OZ,
            palladium: FALLBACK_PALLADIUM_PER_OZ,
            copper: FALLBACK_COPPER_PER_LB,
            nickel: FALLBACK_NICKEL_PER_LB,
            updated_at: Utc::now(),
            source: STATIC_FALLBACK_SOURCE.to_string(),
        }
    }

    /// Live gold and silver with every other metal taken from the static constants
    pub fn with_gold_silver(gold: f64, silver: f64, source: impl Into<String>) -> Self {
        Self {
            gold,
            silver,
            source: source.into(),
            ..Self::fallback()
        }
    }

    /// USD per troy ounce for a precious metal, `None` for the copper sentinel
    pub fn price_per_troy_oz(&self, metal: Metal) -> Option<f64> {
        match metal {
            Metal::Gold => Some(self.gold),
            Metal::Silver => Some(self.silver),
            Metal::Platinum => Some(self.platinum),
            Metal::Palladium => Some(self.palladium),
            Metal::Copper => None,
        }
    }

    /// Returns true if this snapshot came from the static constants
    pub fn is_fallback(&self) -> bool {
        self.source == STATIC_FALLBACK_SOURCE
    }
}

/// Result of valuing a single coin
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoinValuation {
    pub composition: MetalComposition,
    /// Melt value in USD
    pub melt_value: f64,
    /// Timestamp of the spot prices used
    pub prices_updated_at: DateTime<Utc>,
    pub price_source: String,
}

/// Spot price events broadcast by the oracle
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SpotPriceEvent {
    /// A live feed refreshed the cache
    PricesRefreshed {
        id: Uuid,
        source: String,
        gold: f64,
        silver: f64,
        timestamp: DateTime<Utc>,
    },

    /// Every feed failed and the static snapshot was cached
    FallbackUsed {
        id: Uuid,
        error_message: String,
        timestamp: DateTime<Utc>,
    },

    /// Prices were set by an administrator
    ManualOverride {
        id: Uuid,
        gold: f64,
        silver: f64,
        timestamp: DateTime<Utc>,
    },
}

impl SpotPriceEvent {
    /// Get the event type as string
    pub fn event_type(&self) -> &'static str {
        match self {
            SpotPriceEvent::PricesRefreshed { .. } => "PRICES_REFRESHED",
            SpotPriceEvent::FallbackUsed { .. } => "FALLBACK_USED",
            SpotPriceEvent::ManualOverride { .. } => "MANUAL_OVERRIDE",
        }
    }
}

impl fmt::Display for SpotPriceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpotPriceEvent::PricesRefreshed {
                source,
                gold,
                silver,
                ..
            } => write!(
                f,
                "Spot prices refreshed from {}: gold=${:.2}, silver=${:.2}",
                source, gold, silver
            ),
            SpotPriceEvent::FallbackUsed { error_message, .. } => {
                write!(f, "Using fallback spot prices: {}", error_message)
            }
            SpotPriceEvent::ManualOverride { gold, silver, .. } => write!(
                f,
                "Spot prices set manually: gold=${:.2}, silver=${:.2}",
                gold, silver
            ),
        }
    }
}

/// Overall system health status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthStatus {
    /// Serving fresh prices from a live feed or an administrator
    Healthy,
    /// Serving static fallback or stale prices
    Degraded,
    /// No prices fetched yet
    Unhealthy,
}

/// Component health information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentHealth {
    /// Component name
    pub name: String,
    /// Component status
    pub status: HealthStatus,
    /// Optional status message
    pub message: Option<String>,
    /// Component-specific details
    pub details: std::collections::HashMap<String, serde_json::Value>,
    /// Last checked timestamp
    pub last_checked: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metal_parse() {
        assert_eq!("silver".parse::<Metal>().unwrap(), Metal::Silver);
        assert_eq!("copper".parse::<Metal>().unwrap(), Metal::Copper);
        assert!("nickel".parse::<Metal>().is_err());
        assert!("Gold".parse::<Metal>().is_err());
    }

    #[test]
    fn test_base_alloy_flat_view() {
        let comp = MetalComposition::base_alloy("Shield Nickel", 5.0, 75.0, 25.0, "cupronickel");
        assert!(comp.is_base_metal());
        assert_eq!(comp.metal_type(), Metal::Copper);
        assert_eq!(comp.weight_troy_oz(), 0.0);
        assert_eq!(comp.purity_percent(), 0.0);
        assert_eq!(comp.weight_grams(), Some(5.0));
        assert_eq!(comp.copper_percent(), Some(75.0));
        assert_eq!(comp.nickel_percent(), Some(25.0));
    }

    #[test]
    fn test_precious_flat_view() {
        let comp = MetalComposition::precious("Trade Dollar", Metal::Silver, 0.78287, 90.0, "");
        assert!(!comp.is_base_metal());
        assert_eq!(comp.metal_type(), Metal::Silver);
        assert_eq!(comp.weight_troy_oz(), 0.78287);
        assert_eq!(comp.weight_grams(), None);
    }

    #[test]
    fn test_composition_serializes_tagged_content() {
        let comp = MetalComposition::precious("Mercury Dime", Metal::Silver, 0.07234, 90.0, "");
        let json = serde_json::to_value(comp).unwrap();
        assert_eq!(json["content"]["kind"], "precious");
        assert_eq!(json["content"]["metal"], "silver");
    }

    #[test]
    fn test_fallback_snapshot_is_complete() {
        let prices = SpotPrices::fallback();
        assert!(prices.is_fallback());
        for value in [
            prices.gold,
            prices.silver,
            prices.platinum,
            prices.palladium,
            prices.copper,
            prices.nickel,
        ] {
            assert!(value > 0.0);
        }
        assert_eq!(prices.price_per_troy_oz(Metal::Copper), None);
    }

    #[test]
    fn test_with_gold_silver_keeps_static_metals() {
        let prices = SpotPrices::with_gold_silver(2700.0, 31.0, "test");
        assert_eq!(prices.gold, 2700.0);
        assert_eq!(prices.silver, 31.0);
        assert_eq!(prices.platinum, FALLBACK_PLATINUM_PER_OZ);
        assert_eq!(prices.nickel, FALLBACK_NICKEL_PER_LB);
        assert!(!prices.is_fallback());
    }

    #[test]
    fn test_event_display() {
        let event = SpotPriceEvent::PricesRefreshed {
            id: Uuid::new_v4(),
            source: "goldprice.org".to_string(),
            gold: 2650.0,
            silver: 30.5,
            timestamp: Utc::now(),
        };
        assert_eq!(event.event_type(), "PRICES_REFRESHED");
        assert_eq!(
            event.to_string(),
            "Spot prices refreshed from goldprice.org: gold=$2650.00, silver=$30.50"
        );
    }
}
