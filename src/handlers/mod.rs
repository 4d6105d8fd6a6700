//! HTTP handlers

pub mod health;
pub mod portfolio;

// Re-export for convenience
pub use health::health;
pub use portfolio::get_portfolio;
