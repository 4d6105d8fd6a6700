use serde::{Deserialize, Serialize};

use super::token::TokenBalance;

/// Valued snapshot of a wallet's holdings.
///
/// Tokens keep the order they were assembled in: the native coin first, then
/// owned token accounts in ledger order. `total_value` is fixed at assembly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub wallet_address: String,
    pub tokens: Vec<TokenBalance>,
    pub total_value: f64,
}

impl Portfolio {
    /// Assemble a portfolio, summing the token values once
    pub fn assemble(wallet_address: impl Into<String>, tokens: Vec<TokenBalance>) -> Self {
        let total_value = tokens.iter().map(|t| t.value).sum();
        Self {
            wallet_address: wallet_address.into(),
            tokens,
            total_value,
        }
    }

    /// Get the holding for a specific mint
    pub fn get_token(&self, mint: &str) -> Option<&TokenBalance> {
        self.tokens.iter().find(|t| t.token_mint == mint)
    }

    /// Number of tokens in portfolio
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    /// Count of holdings that could not be priced and were valued at zero.
    pub fn unpriced_count(&self) -> usize {
        self.tokens.iter().filter(|t| !t.is_priced()).count()
    }
}
