// Module declarations
pub mod ledger;
pub(crate) mod holdings_errors;
pub(crate) mod holdings_model;
pub(crate) mod holdings_repository;
pub(crate) mod holdings_service;
pub(crate) mod holdings_traits;

// Re-export the public interface
pub use holdings_model::{Holding, HoldingDB, HoldingView};
pub use holdings_repository::HoldingsRepository;
pub use holdings_service::HoldingsService;
pub use holdings_traits::{HoldingsRepositoryTrait, HoldingsServiceTrait};

// Re-export error types for convenience
pub use holdings_errors::{HoldingsError, Result};
