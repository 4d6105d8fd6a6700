//! Decoding of raw on-chain token accounts

pub mod token_account;

pub use token_account::{parse_token_account, AccountDecoder, RawTokenAccount, TOKEN_ACCOUNT_LEN};
