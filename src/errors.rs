use diesel::result::Error as DieselError;
use thiserror::Error;

use crate::accounts::AccountError;
use crate::cash::CashError;
use crate::holdings::HoldingsError;
use crate::market_data::MarketDataError;
use crate::securities::SecurityError;
use crate::trades::OrderError;

// Create a type alias for Result using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the portfolio engine
#[derive(Error, Debug)]
pub enum Error {
    #[error("Database operation failed: {0}")]
    Database(#[from] DatabaseError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Account error: {0}")]
    Account(#[from] AccountError),

    #[error("Security error: {0}")]
    Security(#[from] SecurityError),

    #[error("Market data error: {0}")]
    MarketData(#[from] MarketDataError),

    #[error("Cash ledger error: {0}")]
    Cash(#[from] CashError),

    #[error("Holdings error: {0}")]
    Holdings(#[from] HoldingsError),

    #[error("Order error: {0}")]
    Order(#[from] OrderError),
}

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(#[from] diesel::result::ConnectionError),

    #[error("Failed to create database pool: {0}")]
    PoolCreationFailed(#[from] r2d2::Error),

    #[error("Database query failed: {0}")]
    QueryFailed(#[from] DieselError),

    #[error("Database migration failed: {0}")]
    MigrationFailed(String),
}

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),
}

// Implement From for DieselError to Error directly
impl From<DieselError> for Error {
    fn from(err: DieselError) -> Self {
        Error::Database(DatabaseError::QueryFailed(err))
    }
}

impl From<r2d2::Error> for Error {
    fn from(err: r2d2::Error) -> Self {
        Error::Database(DatabaseError::PoolCreationFailed(err))
    }
}

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Database(DatabaseError::MigrationFailed(err.to_string()))
    }
}
