// Module declarations
pub(crate) mod securities_errors;
pub(crate) mod securities_model;
pub(crate) mod securities_repository;

// Re-export the public interface
pub use securities_model::{Security, SecurityDB};
pub use securities_repository::{SecurityRepository, SecurityRepositoryTrait};

// Re-export error types for convenience
pub use securities_errors::{Result, SecurityError};
