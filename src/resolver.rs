//! Composition resolution by coin type and year
//!
//! Year awareness is opt-in per coin type: only types with a rule set go
//! through the year rules, everything else is a plain catalog lookup.

use crate::{
    catalog::{CompositionCatalog, YearRuleSet, YearRuleTable},
    error::{CatalogError, CompositionError},
    normalize::normalize,
    types::MetalComposition,
};
use std::sync::Arc;

/// Resolves a coin description to its metal composition
///
/// Reads only immutable tables, so clones are cheap and safe to share
/// across any number of concurrent callers.
#[derive(Debug, Clone)]
pub struct CompositionResolver {
    catalog: Arc<CompositionCatalog>,
    year_rules: Arc<YearRuleTable>,
}

impl CompositionResolver {
    pub fn new(catalog: CompositionCatalog, year_rules: YearRuleTable) -> Self {
        Self {
            catalog: Arc::new(catalog),
            year_rules: Arc::new(year_rules),
        }
    }

    /// Resolver over the built-in catalog and year rules
    pub fn builtin() -> Result<Self, CatalogError> {
        Ok(Self::new(
            CompositionCatalog::builtin()?,
            YearRuleTable::builtin()?,
        ))
    }

    pub fn catalog(&self) -> &CompositionCatalog {
        &self.catalog
    }

    pub fn year_rules(&self) -> &YearRuleTable {
        &self.year_rules
    }

    /// Catalog lookup ignoring year rules
    pub fn lookup(&self, coin_type: &str) -> Result<MetalComposition, CompositionError> {
        self.catalog.lookup(coin_type)
    }

    /// Resolves with an optional year; `None` behaves like an unknown year
    pub fn resolve(
        &self,
        coin_type: &str,
        year: Option<i32>,
    ) -> Result<MetalComposition, CompositionError> {
        self.resolve_by_year(coin_type, year.unwrap_or(0))
    }

    /// Resolves a composition for a coin type minted in `year`.
    ///
    /// - `year <= 0` skips the year rules and goes straight to the catalog.
    /// - A type with a rule set never misses: the first matching range wins,
    ///   otherwise the type's default composition is returned.
    /// - A type without a rule set falls back to the catalog.
    pub fn resolve_by_year(
        &self,
        coin_type: &str,
        year: i32,
    ) -> Result<MetalComposition, CompositionError> {
        if year <= 0 {
            return self.catalog.lookup(coin_type);
        }

        match self.rule_set_for(coin_type) {
            Some(rule_set) => {
                let composition = rule_set.resolve(year);
                tracing::trace!(
                    coin_type = coin_type,
                    year = year,
                    composition = composition.name,
                    "Resolved composition from year rules"
                );
                Ok(composition)
            }
            None => self.catalog.lookup(coin_type),
        }
    }

    /// Exact rule set match, or the normalized name's rule set when the raw
    /// name is not a catalog key either
    fn rule_set_for(&self, coin_type: &str) -> Option<&YearRuleSet> {
        if let Some(rule_set) = self.year_rules.get(coin_type) {
            return Some(rule_set);
        }
        if self.catalog.contains(coin_type) {
            return None;
        }
        let normalized = normalize(coin_type);
        self.year_rules.get(normalized.as_str())
    }
}

impl Default for CompositionResolver {
    fn default() -> Self {
        Self::builtin().expect("Built-in composition tables are valid")
    }
}
