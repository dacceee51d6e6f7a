//! Year-aware composition rules
//!
//! Only coin types whose alloy changed over their mintage get a rule set.
//! Each set lists the exception eras in declaration order and a default
//! composition, usually the modern debased one, for every other year.

use crate::error::CatalogError;
use crate::types::{Metal, MetalComposition, YearRule};
use std::collections::HashMap;

/// Ordered year rules plus a default for one coin type
#[derive(Debug, Clone, PartialEq)]
pub struct YearRuleSet {
    pub coin_type: &'static str,
    pub rules: Vec<YearRule>,
    pub default_composition: MetalComposition,
}

impl YearRuleSet {
    pub fn new(
        coin_type: &'static str,
        rules: impl Into<Vec<YearRule>>,
        default_composition: MetalComposition,
    ) -> Self {
        Self {
            coin_type,
            rules: rules.into(),
            default_composition,
        }
    }

    /// First rule containing `year` in declaration order, else the default.
    ///
    /// Overlapping ranges are not rejected; the earlier rule wins.
    pub fn resolve(&self, year: i32) -> MetalComposition {
        self.rules
            .iter()
            .find(|rule| rule.contains(year))
            .map(|rule| rule.composition)
            .unwrap_or(self.default_composition)
    }
}

/// Validated rule sets keyed by coin type
#[derive(Debug, Clone, Default)]
pub struct YearRuleTable {
    sets: HashMap<&'static str, YearRuleSet>,
}

impl YearRuleTable {
    /// Builds a table, rejecting duplicate coin types and inverted ranges
    pub fn from_sets(sets: impl IntoIterator<Item = YearRuleSet>) -> Result<Self, CatalogError> {
        let mut table = HashMap::new();

        for set in sets {
            if set.coin_type.is_empty() {
                return Err(CatalogError::EmptyKey);
            }
            for rule in &set.rules {
                if rule.start_year > rule.end_year {
                    return Err(CatalogError::InvalidYearRange {
                        coin_type: set.coin_type.to_string(),
                        start: rule.start_year,
                        end: rule.end_year,
                    });
                }
                super::validate_composition(set.coin_type, &rule.composition)?;
            }
            super::validate_composition(set.coin_type, &set.default_composition)?;

            if table.contains_key(set.coin_type) {
                return Err(CatalogError::DuplicateKey(set.coin_type.to_string()));
            }
            table.insert(set.coin_type, set);
        }

        Ok(Self { sets: table })
    }

    /// Built-in rules for US coins whose composition changed by year
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_sets(
            BUILTIN_RULE_SETS
                .iter()
                .map(|(coin_type, rules, default)| YearRuleSet::new(*coin_type, *rules, *default)),
        )
    }

    pub fn get(&self, coin_type: &str) -> Option<&YearRuleSet> {
        self.sets.get(coin_type)
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}

const CLAD_NO_SILVER: &str = "Copper-nickel clad, no precious metal content";

// The 1942-1945 Jefferson rule assumes every nickel of those years is the
// silver variant. Only large-mintmark coins actually are; callers that know
// the variant can ask for "Jefferson Nickel (Wartime Silver)" directly.
const BUILTIN_RULE_SETS: &[(&str, &[YearRule], MetalComposition)] = &[
    (
        "Kennedy Half Dollar",
        &[
            YearRule::new(
                1964,
                1964,
                MetalComposition::precious(
                    "Kennedy Half Dollar (1964)",
                    Metal::Silver,
                    0.36169,
                    90.0,
                    "1964 only: Contains 0.36169 oz of silver (90% silver)",
                ),
            ),
            YearRule::new(
                1965,
                1970,
                MetalComposition::precious(
                    "Kennedy Half Dollar (1965-1970)",
                    Metal::Silver,
                    0.14792,
                    40.0,
                    "1965-1970: Contains 0.14792 oz of silver (40% silver)",
                ),
            ),
        ],
        MetalComposition::valueless(
            "Kennedy Half Dollar (1971+)",
            "1971+: Copper-nickel clad, no precious metal content",
        ),
    ),
    (
        "Washington Quarter",
        &[YearRule::new(
            1932,
            1964,
            MetalComposition::precious(
                "Washington Quarter (1932-1964)",
                Metal::Silver,
                0.18084,
                90.0,
                "1932-1964: Contains 0.18084 oz of silver (90% silver)",
            ),
        )],
        MetalComposition::valueless(
            "Washington Quarter (1965+)",
            "1965+: Copper-nickel clad, no precious metal content",
        ),
    ),
    (
        "Roosevelt Dime",
        &[YearRule::new(
            1946,
            1964,
            MetalComposition::precious(
                "Roosevelt Dime (1946-1964)",
                Metal::Silver,
                0.07234,
                90.0,
                "1946-1964: Contains 0.07234 oz of silver (90% silver)",
            ),
        )],
        MetalComposition::valueless(
            "Roosevelt Dime (1965+)",
            "1965+: Copper-nickel clad, no precious metal content",
        ),
    ),
    (
        "Jefferson Nickel",
        &[YearRule::new(
            1942,
            1945,
            MetalComposition::precious(
                "Jefferson Nickel (1942-1945 Wartime)",
                Metal::Silver,
                0.05626,
                35.0,
                "1942-1945 wartime with large mintmark: 35% silver, 0.05626 oz",
            ),
        )],
        MetalComposition::base_alloy(
            "Jefferson Nickel (Regular)",
            5.0,
            75.0,
            25.0,
            "75% copper, 25% nickel. No precious metal content",
        ),
    ),
    (
        "Lincoln Cent",
        &[
            YearRule::new(
                1909,
                1942,
                MetalComposition::valueless(
                    "Lincoln Cent (1909-1942)",
                    "95% copper, 5% tin and zinc. No precious metal content",
                ),
            ),
            YearRule::new(
                1943,
                1943,
                MetalComposition::valueless(
                    "Lincoln Cent (1943 Steel)",
                    "1943: Zinc-coated steel. No precious metal content",
                ),
            ),
            YearRule::new(
                1944,
                1946,
                MetalComposition::valueless(
                    "Lincoln Cent (1944-1946 Shell Casing)",
                    "95% copper, 5% zinc (recycled shell casings). No precious metal content",
                ),
            ),
            YearRule::new(
                1947,
                1982,
                MetalComposition::valueless(
                    "Lincoln Cent (1947-1982)",
                    "95% copper, 5% zinc. No precious metal content",
                ),
            ),
        ],
        MetalComposition::valueless(
            "Lincoln Cent (1982+)",
            "1982+: 97.5% zinc, 2.5% copper plating. No precious metal content",
        ),
    ),
    (
        "Eisenhower Dollar",
        &[YearRule::new(
            1971,
            1976,
            MetalComposition::precious(
                "Eisenhower Dollar (1971-1976 Silver)",
                Metal::Silver,
                0.31625,
                40.0,
                "1971-1976 40% silver version (S mint only): Contains 0.31625 oz of silver",
            ),
        )],
        MetalComposition::valueless("Eisenhower Dollar (Copper-Nickel Clad)", CLAD_NO_SILVER),
    ),
    (
        "Susan B. Anthony Dollar",
        &[],
        MetalComposition::valueless("Susan B. Anthony Dollar", CLAD_NO_SILVER),
    ),
    (
        "Sacagawea Dollar",
        &[],
        MetalComposition::valueless(
            "Sacagawea Dollar",
            "Manganese brass, no precious metal content",
        ),
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn marker(name: &'static str) -> MetalComposition {
        MetalComposition::valueless(name, "")
    }

    #[test]
    fn test_builtin_rules_validate() {
        let table = YearRuleTable::builtin().unwrap();
        assert_eq!(table.len(), 8);
        assert!(table.get("Lincoln Cent").is_some());
        assert!(table.get("Morgan Dollar").is_none());
    }

    #[test]
    fn test_first_match_wins_for_overlapping_ranges() {
        let set = YearRuleSet::new(
            "Synthetic Coin",
            vec![
                YearRule::new(1960, 1970, marker("first")),
                YearRule::new(1965, 1975, marker("second")),
            ],
            marker("default"),
        );
        assert_eq!(set.resolve(1967).name, "first");
        assert_eq!(set.resolve(1972).name, "second");
        assert_eq!(set.resolve(1960).name, "first");
        assert_eq!(set.resolve(1975).name, "second");
    }

    #[test]
    fn test_year_outside_ranges_uses_default() {
        let set = YearRuleSet::new(
            "Synthetic Coin",
            vec![YearRule::new(1960, 1970, marker("sixties"))],
            marker("default"),
        );
        assert_eq!(set.resolve(1959), marker("default"));
        assert_eq!(set.resolve(1971), marker("default"));
        assert_eq!(set.resolve(3000), marker("default"));
    }

    #[test]
    fn test_empty_rule_set_always_default() {
        let table = YearRuleTable::builtin().unwrap();
        let sacagawea = table.get("Sacagawea Dollar").unwrap();
        assert_eq!(sacagawea.resolve(2000).name, "Sacagawea Dollar");
    }

    #[test]
    fn test_lincoln_cent_eras() {
        let table = YearRuleTable::builtin().unwrap();
        let cent = table.get("Lincoln Cent").unwrap();
        assert_eq!(cent.resolve(1910).name, "Lincoln Cent (1909-1942)");
        assert_eq!(cent.resolve(1943).name, "Lincoln Cent (1943 Steel)");
        assert_eq!(cent.resolve(1945).name, "Lincoln Cent (1944-1946 Shell Casing)");
        assert_eq!(cent.resolve(1982).name, "Lincoln Cent (1947-1982)");
        assert_eq!(cent.resolve(1983).name, "Lincoln Cent (1982+)");
    }

    #[test]
    fn test_rejects_inverted_range() {
        let result = YearRuleTable::from_sets([YearRuleSet::new(
            "Backwards",
            vec![YearRule::new(1970, 1960, marker("bad"))],
            marker("default"),
        )]);
        assert_eq!(
            result.unwrap_err(),
            CatalogError::InvalidYearRange {
                coin_type: "Backwards".to_string(),
                start: 1970,
                end: 1960,
            }
        );
    }

    #[test]
    fn test_rejects_duplicate_coin_type() {
        let set = YearRuleSet::new("Twice", Vec::new(), marker("default"));
        let result = YearRuleTable::from_sets([set.clone(), set]);
        assert_eq!(
            result.unwrap_err(),
            CatalogError::DuplicateKey("Twice".to_string())
        );
    }
}
