//! Solana Portfolio Library
//!
//! Values a Solana wallet's SOL and SPL-token holdings in USD: raw token
//! accounts are decoded, priced through a TTL cache in front of pluggable
//! quote sources, and summed into a portfolio snapshot.

// Public modules - these are the API surface
pub mod config;
pub mod decoder;
pub mod error;
pub mod handlers;
pub mod models;
pub mod providers;
pub mod server;
pub mod tracker;
pub mod traits;
pub mod utils;

// Re-export commonly used items for easier access
pub use config::Config;
pub use decoder::{parse_token_account, AccountDecoder, TOKEN_ACCOUNT_LEN};
pub use error::PortfolioError;
pub use models::{portfolio::Portfolio, token::TokenBalance};
pub use providers::{
    coincap::CoinCapPriceRoute,
    metadata_provider::StaticMetadataProvider,
    price_cache::PriceCache,
    price_provider::PriceResolver,
    rpc_provider::RpcLedgerService,
};
pub use tracker::portfolio_tracker::PortfolioTracker;
pub use traits::{
    ledger_service::LedgerQueryService,
    metadata_provider::TokenMetadataProvider,
    price_route::PriceRoute,
};
