use std::sync::Arc;

use solana_sdk::pubkey::Pubkey;
use tracing::debug;

use crate::error::PortfolioError;
use crate::models::token::{TokenBalance, UNKNOWN_SYMBOL};
use crate::traits::metadata_provider::TokenMetadataProvider;
use crate::utils::helper::scale_amount;

/// Length of an SPL token account
pub const TOKEN_ACCOUNT_LEN: usize = 165;

const MINT_RANGE: std::ops::Range<usize> = 0..32;
const AMOUNT_RANGE: std::ops::Range<usize> = 64..72;
const DECIMALS_OFFSET: usize = 44;

/// Fields extracted from a raw token account, before pricing
#[derive(Debug, Clone, PartialEq)]
pub struct RawTokenAccount {
    pub mint: Pubkey,
    pub amount: u64,
    pub decimals: u8,
}

impl RawTokenAccount {
    pub fn balance(&self) -> f64 {
        scale_amount(self.amount, self.decimals)
    }
}

/// Parse the fixed-layout fields out of token account bytes
pub fn parse_token_account(data: &[u8]) -> Result<RawTokenAccount, PortfolioError> {
    if data.len() < TOKEN_ACCOUNT_LEN {
        return Err(PortfolioError::InvalidAccountData {
            expected: TOKEN_ACCOUNT_LEN,
            actual: data.len(),
        });
    }

    let mut mint = [0u8; 32];
    mint.copy_from_slice(&data[MINT_RANGE]);

    let mut amount = [0u8; 8];
    amount.copy_from_slice(&data[AMOUNT_RANGE]);

    Ok(RawTokenAccount {
        mint: Pubkey::new_from_array(mint),
        amount: u64::from_le_bytes(amount),
        decimals: data[DECIMALS_OFFSET],
    })
}

/// Turns raw token accounts into unpriced `TokenBalance`s
pub struct AccountDecoder {
    metadata: Arc<dyn TokenMetadataProvider>,
}

impl AccountDecoder {
    pub fn new(metadata: Arc<dyn TokenMetadataProvider>) -> Self {
        Self { metadata }
    }

    /// Decode a token account. The symbol lookup never fails decoding.
    pub async fn decode(&self, data: &[u8]) -> Result<TokenBalance, PortfolioError> {
        let account = parse_token_account(data)?;
        let mint = account.mint.to_string();

        let symbol = match self.metadata.symbol(&mint).await {
            Ok(symbol) => symbol,
            Err(e) => {
                debug!("No metadata for {}: {}", mint, e);
                UNKNOWN_SYMBOL.to_string()
            }
        };

        Ok(TokenBalance::new(mint, symbol, account.balance(), 0.0))
    }
}
