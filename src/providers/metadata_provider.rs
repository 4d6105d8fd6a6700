use std::collections::HashMap;

use anyhow::anyhow;
use async_trait::async_trait;

use crate::traits::metadata_provider::TokenMetadataProvider;

/// Symbol lookup backed by a fixed table of well-known mints
pub struct StaticMetadataProvider {
    symbols: HashMap<String, String>,
}

impl StaticMetadataProvider {
    /// Create a provider preloaded with common mainnet mints
    pub fn new() -> Self {
        let symbols = [
            ("So11111111111111111111111111111111111111112", "SOL"),
            ("EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v", "USDC"),
            ("Es9vMFrzaCERmJfrF4H2FYD4KCoNkY11McCe8BenwNYB", "USDT"),
            ("DezXAZ8z7PnrnRJjz3wXBoRgixCa6xjnB7YaB1pPB263", "BONK"),
            ("JUPyiwrYJFskUPiHa7hkeR8VUtAeFoSYbKedZNsDvCN", "JUP"),
            ("mSoLzYCxHdYgdzU16g5QSh3i5K3z3KZK7ytfqcJm7So", "mSOL"),
        ]
        .iter()
        .map(|(mint, symbol)| (mint.to_string(), symbol.to_string()))
        .collect();

        Self { symbols }
    }

    /// Add or override a symbol
    pub fn with_symbol(mut self, mint: impl Into<String>, symbol: impl Into<String>) -> Self {
        self.symbols.insert(mint.into(), symbol.into());
        self
    }
}

impl Default for StaticMetadataProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenMetadataProvider for StaticMetadataProvider {
    async fn symbol(&self, mint: &str) -> anyhow::Result<String> {
        self.symbols
            .get(mint)
            .cloned()
            .ok_or_else(|| anyhow!("no metadata for mint {mint}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn knows_common_mints() {
        let provider = StaticMetadataProvider::new();
        assert_eq!(
            provider.symbol("EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v").await.unwrap(),
            "USDC"
        );
        assert!(provider.symbol("unknown-mint").await.is_err());
    }

    #[tokio::test]
    async fn custom_symbols_override() {
        let provider = StaticMetadataProvider::new().with_symbol("mint", "XYZ");
        assert_eq!(provider.symbol("mint").await.unwrap(), "XYZ");
    }
}
