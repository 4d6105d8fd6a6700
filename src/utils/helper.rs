use solana_sdk::pubkey::Pubkey;
use std::str::FromStr;

use crate::error::PortfolioError;

/// Display symbol of the native coin
pub const NATIVE_SYMBOL: &str = "SOL";

/// Mint identity the native coin is priced and reported under (wrapped SOL)
pub fn native_mint() -> String {
    spl_token::native_mint::id().to_string()
}

/// Parse a wallet pubkey from string, with better error messages
pub fn parse_pubkey(s: &str) -> Result<Pubkey, PortfolioError> {
    Pubkey::from_str(s.trim()).map_err(|e| PortfolioError::InvalidAddress(format!("{s}: {e}")))
}

/// Format lamports as SOL
pub fn lamports_to_sol(lamports: u64) -> f64 {
    scale_amount(lamports, spl_token::native_mint::DECIMALS)
}

/// Scale a raw token amount by its decimal places
pub fn scale_amount(amount: u64, decimals: u8) -> f64 {
    amount as f64 / 10f64.powi(decimals as i32)
}

/// Format a pubkey-like string for display (truncated)
pub fn format_pubkey(s: &str) -> String {
    if s.len() <= 8 {
        return s.to_string();
    }
    format!("{}...{}", &s[..4], &s[s.len() - 4..])
}
