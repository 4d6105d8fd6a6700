//! Core traits for the portfolio service

pub mod ledger_service;
pub mod metadata_provider;
pub mod price_route;

// Re-export for convenience
pub use ledger_service::LedgerQueryService;
pub use metadata_provider::TokenMetadataProvider;
pub use price_route::PriceRoute;
