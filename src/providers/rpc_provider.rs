use std::time::Duration;

use async_trait::async_trait;
use solana_account_decoder::UiAccountEncoding;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_client::rpc_config::{RpcAccountInfoConfig, RpcProgramAccountsConfig};
use solana_client::rpc_filter::{Memcmp, RpcFilterType};
use solana_commitment_config::{CommitmentConfig, CommitmentLevel};
use solana_sdk::pubkey::Pubkey;
use tracing::{debug, info};

use crate::decoder::token_account::TOKEN_ACCOUNT_LEN;
use crate::traits::ledger_service::LedgerQueryService;

/// Offset of the owner field in an SPL token account
const TOKEN_ACCOUNT_OWNER_OFFSET: usize = 32;

/// Default per-request timeout for RPC calls
pub const DEFAULT_RPC_TIMEOUT: Duration = Duration::from_secs(30);

/// Solana JSON-RPC backed ledger access
pub struct RpcLedgerService {
    rpc_client: RpcClient,
}

impl RpcLedgerService {
    /// Create a new RPC ledger service reading at finalized commitment
    pub fn new(rpc_url: String, timeout: Duration) -> Self {
        let client = RpcClient::new_with_timeout_and_commitment(
            rpc_url,
            timeout,
            CommitmentConfig { commitment: CommitmentLevel::Finalized },
        );

        Self { rpc_client: client }
    }

    /// Owner-indexed token account query. Nodes only use the owner index
    /// when the account size filter is present.
    fn owned_accounts_config(wallet: &Pubkey) -> RpcProgramAccountsConfig {
        RpcProgramAccountsConfig {
            filters: Some(vec![
                RpcFilterType::DataSize(TOKEN_ACCOUNT_LEN as u64),
                RpcFilterType::Memcmp(Memcmp::new_raw_bytes(
                    TOKEN_ACCOUNT_OWNER_OFFSET,
                    wallet.to_bytes().to_vec(),
                )),
            ]),
            account_config: RpcAccountInfoConfig {
                encoding: Some(UiAccountEncoding::Base64),
                commitment: Some(CommitmentConfig::finalized()),
                data_slice: None,
                min_context_slot: None,
            },
            ..RpcProgramAccountsConfig::default()
        }
    }
}

#[async_trait]
impl LedgerQueryService for RpcLedgerService {
    async fn fetch_native_balance(&self, wallet: &Pubkey) -> anyhow::Result<u64> {
        let lamports = self.rpc_client.get_balance(wallet).await?;
        debug!("Wallet {} holds {} lamports", wallet, lamports);
        Ok(lamports)
    }

    async fn fetch_owned_accounts(&self, wallet: &Pubkey) -> anyhow::Result<Vec<Vec<u8>>> {
        let accounts = self
            .rpc_client
            .get_program_accounts_with_config(&spl_token::id(), Self::owned_accounts_config(wallet))
            .await?;

        info!("Found {} token accounts for {}", accounts.len(), wallet);
        Ok(accounts.into_iter().map(|(_, account)| account.data).collect())
    }
}
