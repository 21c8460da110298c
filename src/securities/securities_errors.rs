use diesel::result::Error as DieselError;
use thiserror::Error;

/// Custom error type for security reference-data operations
#[derive(Debug, Error)]
pub enum SecurityError {
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("Not found: {0}")]
    NotFound(String),
}

impl From<DieselError> for SecurityError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::NotFound => SecurityError::NotFound("Record not found".to_string()),
            _ => SecurityError::DatabaseError(err.to_string()),
        }
    }
}

/// Result type for security operations
pub type Result<T> = std::result::Result<T, SecurityError>;
