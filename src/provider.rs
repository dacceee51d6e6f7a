//! Provider abstraction for fetching spot prices from external feeds

use crate::{error::ProviderError, types::SpotPrices};
use async_trait::async_trait;

/// Trait for spot price providers
///
/// A provider returns a complete snapshot or an error. Feeds that only
/// carry some metals fill the rest from the static constants so every
/// successful fetch is usable on its own.
#[async_trait]
pub trait SpotPriceProvider: Send + Sync {
    /// Fetches a full spot price snapshot
    ///
    /// # Returns
    /// Spot prices, or an error if the feed was unreachable, answered with a
    /// non-success status, or returned unusable data
    async fn fetch_spot_prices(&self) -> Result<SpotPrices, ProviderError>;

    /// Returns the name of this provider
    fn provider_name(&self) -> &'static str;
}
