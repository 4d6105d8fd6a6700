use serde::{Deserialize, Serialize};

/// Symbol used when a mint has no known metadata.
pub const UNKNOWN_SYMBOL: &str = "Unknown";

/// A valued token holding. `value` is always `balance * current_price`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenBalance {
    pub token_mint: String,
    pub symbol: String,
    pub balance: f64,
    pub current_price: f64,
    pub value: f64,
}

impl TokenBalance {
    /// Create a new token balance priced at `current_price`
    pub fn new(
        token_mint: impl Into<String>,
        symbol: impl Into<String>,
        balance: f64,
        current_price: f64,
    ) -> Self {
        Self {
            token_mint: token_mint.into(),
            symbol: symbol.into(),
            balance,
            current_price,
            value: balance * current_price,
        }
    }

    /// Same holding at a different price, with the value recomputed.
    pub fn priced(self, current_price: f64) -> Self {
        Self::new(self.token_mint, self.symbol, self.balance, current_price)
    }

    pub fn is_priced(&self) -> bool {
        self.current_price > 0.0
    }
}
