use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use rust_decimal::Decimal;
use std::sync::Arc;

use super::holdings_errors::{HoldingsError, Result};
use super::holdings_model::{Holding, HoldingDB};
use super::holdings_traits::HoldingsRepositoryTrait;
use crate::db::get_connection;
use crate::schema::{accounts, holdings, securities};
use crate::securities::{Security, SecurityDB};

/// Repository for holdings state
pub struct HoldingsRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
}

impl HoldingsRepository {
    pub fn new(pool: Arc<Pool<ConnectionManager<SqliteConnection>>>) -> Self {
        Self { pool }
    }
}

impl HoldingsRepositoryTrait for HoldingsRepository {
    fn find_holding(&self, account_id: &str, security_id: &str) -> Result<Option<Holding>> {
        let mut conn = get_connection(&self.pool)?;

        holdings::table
            .filter(holdings::account_id.eq(account_id))
            .filter(holdings::security_id.eq(security_id))
            .first::<HoldingDB>(&mut conn)
            .optional()
            .map(|row| row.map(Holding::from))
            .map_err(HoldingsError::from)
    }

    fn get_quantity(&self, account_id: &str, security_id: &str) -> Result<Decimal> {
        let mut conn = get_connection(&self.pool)?;

        let quantity = holdings::table
            .filter(holdings::account_id.eq(account_id))
            .filter(holdings::security_id.eq(security_id))
            .select(holdings::quantity)
            .first::<f64>(&mut conn)
            .optional()
            .map_err(HoldingsError::from)?
            .unwrap_or(0.0);

        Ok(Decimal::from_f64_retain(quantity).unwrap_or_default())
    }

    fn get_account_holdings(&self, account_id: &str) -> Result<Vec<(Holding, Security)>> {
        let mut conn = get_connection(&self.pool)?;

        holdings::table
            .inner_join(securities::table)
            .filter(holdings::account_id.eq(account_id))
            .filter(holdings::quantity.ne(0.0))
            .load::<(HoldingDB, SecurityDB)>(&mut conn)
            .map(|rows| {
                rows.into_iter()
                    .map(|(h, s)| (Holding::from(h), Security::from(s)))
                    .collect()
            })
            .map_err(HoldingsError::from)
    }

    fn get_user_holdings(&self, user_id: &str) -> Result<Vec<(Holding, Security)>> {
        let mut conn = get_connection(&self.pool)?;

        holdings::table
            .inner_join(securities::table)
            .inner_join(accounts::table)
            .filter(accounts::user_id.eq(user_id))
            .filter(holdings::quantity.ne(0.0))
            .select((holdings::all_columns, securities::all_columns))
            .load::<(HoldingDB, SecurityDB)>(&mut conn)
            .map(|rows| {
                rows.into_iter()
                    .map(|(h, s)| (Holding::from(h), Security::from(s)))
                    .collect()
            })
            .map_err(HoldingsError::from)
    }
}
