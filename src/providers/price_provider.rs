use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::error::PortfolioError;
use crate::providers::price_cache::PriceCache;
use crate::traits::price_route::PriceRoute;

/// How long a fetched price is served from cache
pub const DEFAULT_PRICE_TTL: Duration = Duration::from_secs(60);

/// Resolves USD prices through the cache and per-mint price routes
pub struct PriceResolver {
    cache: Arc<PriceCache>,
    routes: HashMap<String, Arc<dyn PriceRoute>>,
    ttl: Duration,
}

impl PriceResolver {
    /// Create a resolver with no routes
    pub fn new(cache: Arc<PriceCache>) -> Self {
        Self {
            cache,
            routes: HashMap::new(),
            ttl: DEFAULT_PRICE_TTL,
        }
    }

    /// Register the route that prices `mint`
    pub fn with_route(mut self, mint: impl Into<String>, route: Arc<dyn PriceRoute>) -> Self {
        self.routes.insert(mint.into(), route);
        self
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn cache(&self) -> &PriceCache {
        &self.cache
    }

    /// Whether a route is registered for `mint`
    pub fn has_route(&self, mint: &str) -> bool {
        self.routes.contains_key(mint)
    }

    /// Get the USD price for a mint.
    ///
    /// Mints without a registered route fail with `PriceNotFound` and never
    /// reach the network. Route errors are returned as-is.
    pub async fn get_price(&self, mint: &str) -> Result<f64, PortfolioError> {
        // Check cache first
        if let Some(price) = self.cache.get(mint) {
            return Ok(price);
        }

        let Some(route) = self.routes.get(mint) else {
            return Err(PortfolioError::PriceNotFound(mint.to_string()));
        };

        debug!("Fetching price for {} from {}", mint, route.name());
        let price = route.fetch_price(mint).await?;
        self.cache.set(mint, price, self.ttl);

        Ok(price)
    }
}
