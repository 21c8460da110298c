use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;

use crate::db::get_connection;
use crate::schema::securities;
use crate::securities::{Result, SecurityError};

use super::securities_model::{Security, SecurityDB};

/// Trait defining the contract for security repository operations.
pub trait SecurityRepositoryTrait: Send + Sync {
    fn list_securities(&self, active_only: bool) -> Result<Vec<Security>>;
    fn get_security(&self, security_id: &str) -> Result<Security>;
}

/// Repository for security reference data
pub struct SecurityRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
}

impl SecurityRepository {
    /// Creates a new SecurityRepository instance
    pub fn new(pool: Arc<Pool<ConnectionManager<SqliteConnection>>>) -> Self {
        Self { pool }
    }
}

impl SecurityRepositoryTrait for SecurityRepository {
    fn list_securities(&self, active_only: bool) -> Result<Vec<Security>> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| SecurityError::DatabaseError(e.to_string()))?;

        let mut query = securities::table.into_boxed();
        if active_only {
            query = query.filter(securities::is_active.eq(true));
        }

        query
            .order(securities::ticker.asc())
            .load::<SecurityDB>(&mut conn)
            .map_err(SecurityError::from)
            .map(|rows| rows.into_iter().map(Security::from).collect())
    }

    fn get_security(&self, security_id: &str) -> Result<Security> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| SecurityError::DatabaseError(e.to_string()))?;

        securities::table
            .find(security_id)
            .first::<SecurityDB>(&mut conn)
            .map(Security::from)
            .map_err(|e| match e {
                diesel::result::Error::NotFound => SecurityError::NotFound(format!(
                    "Security with id {} not found",
                    security_id
                )),
                _ => SecurityError::DatabaseError(e.to_string()),
            })
    }
}
