use diesel::result::Error as DieselError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Custom error type for order placement and trade history operations.
///
/// `InsufficientQuantity` is a business-rule rejection surfaced to the caller
/// verbatim, not an operational failure; nothing here is retried.
#[derive(Debug, Error)]
pub enum OrderError {
    #[error("Insufficient quantity to sell. Available: {available}, Requested: {requested}")]
    InsufficientQuantity {
        available: Decimal,
        requested: Decimal,
    },
    #[error("Invalid order: {0}")]
    InvalidInput(String),
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<DieselError> for OrderError {
    fn from(err: DieselError) -> Self {
        OrderError::DatabaseError(err.to_string())
    }
}

impl From<crate::errors::Error> for OrderError {
    fn from(err: crate::errors::Error) -> Self {
        OrderError::DatabaseError(err.to_string())
    }
}

/// Result type for order and trade operations
pub type Result<T> = std::result::Result<T, OrderError>;
