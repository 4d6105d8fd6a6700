//! Collaborator implementations: ledger access, quote sources, pricing

pub mod coincap;
pub mod metadata_provider;
pub mod price_cache;
pub mod price_provider;
pub mod rpc_provider;

// Re-export for convenience
pub use coincap::CoinCapPriceRoute;
pub use metadata_provider::StaticMetadataProvider;
pub use price_cache::PriceCache;
pub use price_provider::PriceResolver;
pub use rpc_provider::RpcLedgerService;
