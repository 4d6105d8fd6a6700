//! CoinCap quote source for the native coin.
//!
//! Docs: https://docs.coincap.io/

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::PortfolioError;
use crate::traits::price_route::PriceRoute;

const COINCAP_API_BASE: &str = "https://rest.coincap.io/v3";
const SOLANA_ASSET_ID: &str = "solana";

/// Default per-request timeout for quote calls
pub const DEFAULT_QUOTE_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Deserialize)]
struct AssetResponse {
    data: AssetData,
}

#[derive(Debug, Deserialize)]
struct AssetData {
    #[serde(rename = "priceUsd")]
    price_usd: String,
}

/// Prices one CoinCap asset (SOL by default) in USD
pub struct CoinCapPriceRoute {
    client: Client,
    api_key: Option<String>,
    base_url: String,
    asset_id: String,
}

impl CoinCapPriceRoute {
    /// Create a route for SOL with the given request timeout
    pub fn new(api_key: Option<String>, timeout: Duration) -> Result<Self, PortfolioError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            base_url: COINCAP_API_BASE.to_string(),
            asset_id: SOLANA_ASSET_ID.to_string(),
        })
    }

    /// Point the route at a different API base (no trailing slash)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

#[async_trait]
impl PriceRoute for CoinCapPriceRoute {
    async fn fetch_price(&self, mint: &str) -> Result<f64, PortfolioError> {
        let Some(api_key) = &self.api_key else {
            return Err(PortfolioError::QuoteCredentialMissing(mint.to_string()));
        };

        let url = format!("{}/assets/{}", self.base_url, self.asset_id);
        debug!("Requesting {}", url);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .bearer_auth(api_key)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(PortfolioError::QuoteTransport(format!(
                "CoinCap API error: {status} - {body}"
            )));
        }

        let body: AssetResponse = response.json().await?;
        let price = body.data.price_usd.trim().parse::<f64>().map_err(|e| {
            PortfolioError::QuoteDecode(format!("invalid priceUsd {:?}: {e}", body.data.price_usd))
        })?;

        if !price.is_finite() || price < 0.0 {
            return Err(PortfolioError::QuoteDecode(format!("invalid priceUsd {price}")));
        }

        info!("Found {} price: ${:.2}", self.asset_id, price);
        Ok(price)
    }

    fn name(&self) -> &str {
        "coincap"
    }
}
