//! Melt value calculation
//!
//! Precious metals are valued by pure content in troy ounces at the per-ounce
//! spot price. Base-metal coins are valued by total mass in pounds at the
//! per-pound copper and nickel prices; any other alloy share (zinc,
//! manganese) is worth nothing here.

use crate::{
    constants::GRAMS_PER_POUND,
    types::{Metal, MetalComposition, MetalContent, SpotPrices},
};

/// Melt value in USD of a composition at the given spot prices
pub fn melt_value(composition: &MetalComposition, prices: &SpotPrices) -> f64 {
    match composition.content {
        MetalContent::Precious {
            metal,
            weight_troy_oz,
            purity_percent,
        } => precious_melt_value(metal, weight_troy_oz, purity_percent, prices),
        MetalContent::BaseAlloy {
            weight_grams,
            copper_percent,
            nickel_percent,
        } => base_alloy_melt_value(weight_grams, copper_percent, nickel_percent, prices),
    }
}

/// `weight * purity / 100 * spot`; the copper sentinel is worth zero
pub fn precious_melt_value(
    metal: Metal,
    weight_troy_oz: f64,
    purity_percent: f64,
    prices: &SpotPrices,
) -> f64 {
    let Some(price_per_oz) = prices.price_per_troy_oz(metal) else {
        return 0.0;
    };
    non_negative(weight_troy_oz * (purity_percent / 100.0) * price_per_oz)
}

/// Per-pound valuation of the copper and nickel share of a coin's mass
pub fn base_alloy_melt_value(
    weight_grams: f64,
    copper_percent: f64,
    nickel_percent: f64,
    prices: &SpotPrices,
) -> f64 {
    let pounds = weight_grams / GRAMS_PER_POUND;
    let copper_value = pounds * (copper_percent / 100.0) * prices.copper;
    let nickel_value = pounds * (nickel_percent / 100.0) * prices.nickel;
    non_negative(copper_value + nickel_value)
}

/// Melt value for callers holding a metal name instead of a composition.
///
/// "copper" and "nickel" are valid names with no per-ounce value. Unknown
/// metal names are worth zero too, but are logged.
pub fn melt_value_for_metal_name(
    metal_type: &str,
    weight_troy_oz: f64,
    purity_percent: f64,
    prices: &SpotPrices,
) -> f64 {
    if is_base_metal_name(metal_type) {
        return 0.0;
    }

    match metal_type.parse::<Metal>() {
        Ok(metal) => precious_melt_value(metal, weight_troy_oz, purity_percent, prices),
        Err(e) => {
            tracing::warn!(
                metal_type = metal_type,
                error = %e,
                "Valuing unsupported metal type at zero"
            );
            0.0
        }
    }
}

/// Base metals are only valued per pound through a full alloy composition
fn is_base_metal_name(metal_type: &str) -> bool {
    matches!(metal_type, "copper" | "nickel")
}

/// Clamps negative and non-finite results to zero
fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
