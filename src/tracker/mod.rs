pub mod portfolio_tracker;

pub use portfolio_tracker::PortfolioTracker;
