use async_trait::async_trait;
use solana_sdk::pubkey::Pubkey;

/// Read-only access to on-chain wallet data
#[async_trait]
pub trait LedgerQueryService: Send + Sync {
    /// Fetch the native SOL balance for a wallet, in lamports
    async fn fetch_native_balance(&self, wallet: &Pubkey) -> anyhow::Result<u64>;

    /// Fetch the raw data of every SPL token account owned by a wallet.
    ///
    /// Blobs are returned in the order the ledger reported them.
    async fn fetch_owned_accounts(&self, wallet: &Pubkey) -> anyhow::Result<Vec<Vec<u8>>>;
}
