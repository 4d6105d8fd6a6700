pub mod helper;

pub use helper::{format_pubkey, lamports_to_sol, native_mint, parse_pubkey, scale_amount, NATIVE_SYMBOL};
