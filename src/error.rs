//! Error types for the melt value engine

use thiserror::Error;

/// Errors that can occur when fetching prices from a feed
///
/// None of these reach callers of `SpotPriceOracle::get_spot_prices`; they
/// drive the fallback chain and end up in logs.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Network request failed
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    /// Feed answered with a non-success status
    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// Invalid response from the feed
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Response parsed but a required price was zero or absent
    #[error("Missing price for {0}")]
    MissingPrice(String),

    /// Timeout waiting for response
    #[error("Request timeout")]
    Timeout,

    /// Every feed in the chain failed
    #[error("All price sources failed: {0}")]
    AllSourcesFailed(String),
}

impl ProviderError {
    /// Creates an InvalidResponse error
    pub fn invalid_response(msg: impl Into<String>) -> Self {
        Self::InvalidResponse(msg.into())
    }

    /// Creates a MissingPrice error
    pub fn missing_price(metal: impl Into<String>) -> Self {
        Self::MissingPrice(metal.into())
    }
}

/// Errors that can occur when resolving a composition
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CompositionError {
    /// No catalog entry or year rule matches the coin type
    #[error("Composition not found for {coin_type}")]
    NotFound { coin_type: String },

    /// Metal name outside the known set
    #[error("Unsupported metal type: {0}")]
    UnsupportedMetal(String),
}

impl CompositionError {
    /// Creates a NotFound error
    pub fn not_found(coin_type: &str) -> Self {
        Self::NotFound {
            coin_type: coin_type.to_string(),
        }
    }

    /// Creates an UnsupportedMetal error
    pub fn unsupported_metal(metal: &str) -> Self {
        Self::UnsupportedMetal(metal.to_string())
    }
}

/// Errors found while validating composition tables
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Empty coin type key")]
    EmptyKey,

    #[error("Duplicate coin type: {0}")]
    DuplicateKey(String),

    #[error("Invalid composition for {coin_type}: {reason}")]
    InvalidComposition { coin_type: String, reason: String },

    #[error("Invalid year range {start}-{end} for {coin_type}")]
    InvalidYearRange {
        coin_type: String,
        start: i32,
        end: i32,
    },
}

impl CatalogError {
    /// Creates an InvalidComposition error
    pub fn invalid_composition(coin_type: &str, reason: impl Into<String>) -> Self {
        Self::InvalidComposition {
            coin_type: coin_type.to_string(),
            reason: reason.into(),
        }
    }
}
