// Module declarations
pub(crate) mod cash_errors;
pub(crate) mod cash_model;
pub(crate) mod cash_repository;
pub(crate) mod cash_traits;

// Re-export the public interface
pub use cash_model::{CashEntry, CashEntryDB, CashEntryKind, CashSummary};
pub use cash_repository::CashRepository;
pub use cash_traits::CashRepositoryTrait;

// Re-export error types for convenience
pub use cash_errors::{CashError, Result};
