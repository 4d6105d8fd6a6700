//! Data models for the portfolio service

pub mod token;
pub mod portfolio;

// Re-export for convenience
pub use token::{TokenBalance, UNKNOWN_SYMBOL};
pub use portfolio::Portfolio;
