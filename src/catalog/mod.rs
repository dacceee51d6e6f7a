//! Static coin composition tables
//!
//! The catalog maps canonical coin type names to the composition used when
//! no year is known. Year-aware rules live in [`year_rules`]. Both tables are
//! validated when built so authoring mistakes surface at startup and in
//! tests instead of as wrong melt values.

mod coins;
pub mod year_rules;

pub use year_rules::{YearRuleSet, YearRuleTable};

use crate::error::{CatalogError, CompositionError};
use crate::normalize::normalize;
use crate::types::{Metal, MetalComposition, MetalContent};
use std::collections::HashMap;

/// Exact-match composition catalog
#[derive(Debug, Clone, Default)]
pub struct CompositionCatalog {
    entries: HashMap<&'static str, MetalComposition>,
}

impl CompositionCatalog {
    /// Builds a catalog, rejecting empty or duplicate keys and invalid compositions
    pub fn from_entries(
        entries: impl IntoIterator<Item = (&'static str, MetalComposition)>,
    ) -> Result<Self, CatalogError> {
        let mut map = HashMap::new();

        for (coin_type, composition) in entries {
            if coin_type.is_empty() {
                return Err(CatalogError::EmptyKey);
            }
            validate_composition(coin_type, &composition)?;
            if map.insert(coin_type, composition).is_some() {
                return Err(CatalogError::DuplicateKey(coin_type.to_string()));
            }
        }

        Ok(Self { entries: map })
    }

    /// Built-in catalog of US and world bullion coins
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_entries(coins::CATALOG_ENTRIES.iter().copied())
    }

    /// Exact, case-sensitive match; on a miss retries once with the
    /// normalized name.
    pub fn lookup(&self, coin_type: &str) -> Result<MetalComposition, CompositionError> {
        if let Some(composition) = self.entries.get(coin_type) {
            return Ok(*composition);
        }

        let normalized = normalize(coin_type);
        if normalized != coin_type {
            if let Some(composition) = self.entries.get(normalized.as_str()) {
                tracing::trace!(
                    coin_type = coin_type,
                    normalized = %normalized,
                    "Resolved composition through normalized name"
                );
                return Ok(*composition);
            }
        }

        Err(CompositionError::not_found(coin_type))
    }

    pub fn contains(&self, coin_type: &str) -> bool {
        self.entries.contains_key(coin_type)
    }

    /// All entries sorted by coin type
    pub fn all(&self) -> Vec<(&'static str, MetalComposition)> {
        let mut entries: Vec<_> = self
            .entries
            .iter()
            .map(|(coin_type, composition)| (*coin_type, *composition))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Checks the weight and percentage ranges of one composition
pub(crate) fn validate_composition(
    coin_type: &str,
    composition: &MetalComposition,
) -> Result<(), CatalogError> {
    let in_percent_range = |value: f64| value.is_finite() && (0.0..=100.0).contains(&value);

    match composition.content {
        MetalContent::Precious {
            metal,
            weight_troy_oz,
            purity_percent,
        } => {
            if !weight_troy_oz.is_finite() || weight_troy_oz < 0.0 {
                return Err(CatalogError::invalid_composition(
                    coin_type,
                    format!("weight {} troy oz", weight_troy_oz),
                ));
            }
            if !in_percent_range(purity_percent) {
                return Err(CatalogError::invalid_composition(
                    coin_type,
                    format!("purity {}%", purity_percent),
                ));
            }
            if metal == Metal::Copper && weight_troy_oz > 0.0 {
                return Err(CatalogError::invalid_composition(
                    coin_type,
                    "copper carries no troy ounce weight; use a base alloy",
                ));
            }
        }
        MetalContent::BaseAlloy {
            weight_grams,
            copper_percent,
            nickel_percent,
        } => {
            if !weight_grams.is_finite() || weight_grams < 0.0 {
                return Err(CatalogError::invalid_composition(
                    coin_type,
                    format!("weight {} g", weight_grams),
                ));
            }
            if !in_percent_range(copper_percent)
                || !in_percent_range(nickel_percent)
                || copper_percent + nickel_percent > 100.0
            {
                return Err(CatalogError::invalid_composition(
                    coin_type,
                    format!("alloy {}% copper, {}% nickel", copper_percent, nickel_percent),
                ));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> CompositionCatalog {
        CompositionCatalog::builtin().unwrap()
    }

    #[test]
    fn test_builtin_catalog_validates() {
        let catalog = catalog();
        assert_eq!(catalog.len(), coins::CATALOG_ENTRIES.len());
        assert!(catalog.contains("Morgan Dollar"));
    }

    #[test]
    fn test_exact_lookup() {
        let morgan = catalog().lookup("Morgan Dollar").unwrap();
        assert_eq!(morgan.metal_type(), Metal::Silver);
        assert_eq!(morgan.weight_troy_oz(), 0.77344);
        assert_eq!(morgan.purity_percent(), 90.0);
    }

    #[test]
    fn test_lookup_through_normalized_name() {
        let peace = catalog().lookup("1921-S Peace Dollar MS67").unwrap();
        assert_eq!(peace.name, "Peace Dollar");

        let eagle = catalog().lookup("2020-W American Gold Eagle (1 oz) PR70DCAM").unwrap();
        assert_eq!(eagle.metal_type(), Metal::Gold);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(
            catalog().lookup("morgan dollar").unwrap_err(),
            CompositionError::not_found("morgan dollar")
        );
    }

    #[test]
    fn test_lookup_miss_reports_raw_name() {
        assert_eq!(
            catalog().lookup("1921 Unknown Token MS60").unwrap_err(),
            CompositionError::not_found("1921 Unknown Token MS60")
        );
    }

    #[test]
    fn test_all_is_sorted() {
        let all = catalog().all();
        assert!(all.windows(2).all(|pair| pair[0].0 < pair[1].0));
    }

    #[test]
    fn test_rejects_duplicate_key() {
        let morgan = MetalComposition::precious("Morgan Dollar", Metal::Silver, 0.77344, 90.0, "");
        let result =
            CompositionCatalog::from_entries([("Morgan Dollar", morgan), ("Morgan Dollar", morgan)]);
        assert_eq!(
            result.unwrap_err(),
            CatalogError::DuplicateKey("Morgan Dollar".to_string())
        );
    }

    #[test]
    fn test_rejects_out_of_range_purity() {
        let bad = MetalComposition::precious("Bad", Metal::Gold, 1.0, 120.0, "");
        assert!(matches!(
            CompositionCatalog::from_entries([("Bad", bad)]),
            Err(CatalogError::InvalidComposition { .. })
        ));
    }

    #[test]
    fn test_rejects_weighted_copper_sentinel() {
        let bad = MetalComposition::precious("Bad", Metal::Copper, 0.5, 95.0, "");
        assert!(CompositionCatalog::from_entries([("Bad", bad)]).is_err());
    }

    #[test]
    fn test_rejects_alloy_over_hundred_percent() {
        let bad = MetalComposition::base_alloy("Bad", 5.0, 80.0, 25.0, "");
        assert!(CompositionCatalog::from_entries([("Bad", bad)]).is_err());
    }

    #[test]
    fn test_rejects_empty_key() {
        let comp = MetalComposition::valueless("", "");
        assert_eq!(
            CompositionCatalog::from_entries([("", comp)]).unwrap_err(),
            CatalogError::EmptyKey
        );
    }
}
