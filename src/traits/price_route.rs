use async_trait::async_trait;

use crate::error::PortfolioError;

/// A quote source able to price one token identity in USD.
///
/// Routes are registered on the `PriceResolver` per mint, so new sources can
/// be added without touching the resolver.
#[async_trait]
pub trait PriceRoute: Send + Sync {
    /// Fetch the current USD price for `mint`
    async fn fetch_price(&self, mint: &str) -> Result<f64, PortfolioError>;

    /// Short name used in logs
    fn name(&self) -> &str;
}
