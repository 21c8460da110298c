use thiserror::Error;

use crate::errors::DatabaseError;

#[derive(Error, Debug)]
pub enum MarketDataError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] diesel::result::Error),

    #[error("Database error: {0}")]
    DatabaseConnectionError(#[from] DatabaseError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

// get_connection surfaces the root error type; fold it back into ours
impl From<crate::errors::Error> for MarketDataError {
    fn from(err: crate::errors::Error) -> Self {
        match err {
            crate::errors::Error::Database(db) => MarketDataError::DatabaseConnectionError(db),
            other => MarketDataError::InvalidData(other.to_string()),
        }
    }
}

/// Result type for market data operations
pub type Result<T> = std::result::Result<T, MarketDataError>;
