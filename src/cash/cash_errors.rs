use diesel::result::Error as DieselError;
use thiserror::Error;

/// Custom error type for cash ledger operations
#[derive(Debug, Error)]
pub enum CashError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<DieselError> for CashError {
    fn from(err: DieselError) -> Self {
        CashError::DatabaseError(err.to_string())
    }
}

impl From<crate::errors::Error> for CashError {
    fn from(err: crate::errors::Error) -> Self {
        CashError::DatabaseError(err.to_string())
    }
}

/// Result type for cash ledger operations
pub type Result<T> = std::result::Result<T, CashError>;
