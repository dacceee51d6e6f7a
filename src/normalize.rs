//! Coin name normalization
//!
//! Certification services title coins like `"1921-S Peace Dollar MS67"`. The
//! catalog is keyed by the bare type (`"Peace Dollar"`), so lookups that miss
//! on the raw string retry with the year/mint-mark prefix and the grade
//! suffix removed.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Leading year with an optional mint mark, e.g. `1921-S ` or `1964 `.
    /// The mint mark must be a standalone letter so `1964 Kennedy` keeps its `K`.
    static ref YEAR_PREFIX_REGEX: Regex =
        Regex::new(r"^\d{4}(?:[-\s]?[A-Z]\b)?\s*").expect("Invalid regex pattern");

    /// Trailing grade, e.g. ` MS67` or ` PR70DCAM`
    static ref GRADE_SUFFIX_REGEX: Regex =
        Regex::new(r"\s+[A-Z]{2,4}\d+[A-Z]*$").expect("Invalid regex pattern");
}

/// Strips a leading year/mint-mark token and a trailing grade token.
///
/// Returns the input unchanged when neither pattern matches.
pub fn normalize(raw: &str) -> String {
    let without_year = YEAR_PREFIX_REGEX.replace(raw, "");
    GRADE_SUFFIX_REGEX.replace(&without_year, "").into_owned()
}
