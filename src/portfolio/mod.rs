// Module declarations
pub mod performance;
pub mod pnl;
pub(crate) mod portfolio_model;
pub(crate) mod portfolio_service;
pub(crate) mod portfolio_traits;

// Re-export the public interface
pub use pnl::RealizedPnl;
pub use portfolio_model::{
    PortfolioOverview, PortfolioScope, PortfolioSnapshot, ReturnPoint, SecuritySummary,
};
pub use portfolio_service::PortfolioService;
pub use portfolio_traits::PortfolioServiceTrait;

#[cfg(test)]
pub(crate) mod tests;
