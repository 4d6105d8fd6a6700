use async_trait::async_trait;

/// Best-effort token metadata lookup
#[async_trait]
pub trait TokenMetadataProvider: Send + Sync {
    /// Resolve the display symbol for a mint
    async fn symbol(&self, mint: &str) -> anyhow::Result<String>;
}
