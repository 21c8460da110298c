use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;

use super::cash_errors::{CashError, Result};
use super::cash_model::{CashEntry, CashEntryDB};
use super::cash_traits::CashRepositoryTrait;
use crate::constants::DEFAULT_RECENT_TAKE;
use crate::db::get_connection;
use crate::schema::{accounts, cash_entries};

/// Repository for reading the cash ledger
pub struct CashRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
}

impl CashRepository {
    pub fn new(pool: Arc<Pool<ConnectionManager<SqliteConnection>>>) -> Self {
        Self { pool }
    }
}

impl CashRepositoryTrait for CashRepository {
    fn get_account_entries(&self, account_id: &str) -> Result<Vec<CashEntry>> {
        let mut conn = get_connection(&self.pool)?;

        cash_entries::table
            .filter(cash_entries::account_id.eq(account_id))
            .order(cash_entries::entry_date.asc())
            .load::<CashEntryDB>(&mut conn)
            .map(|rows| rows.into_iter().map(CashEntry::from).collect())
            .map_err(CashError::from)
    }

    fn get_user_entries(&self, user_id: &str) -> Result<Vec<CashEntry>> {
        let mut conn = get_connection(&self.pool)?;

        cash_entries::table
            .inner_join(accounts::table)
            .filter(accounts::user_id.eq(user_id))
            .select(cash_entries::all_columns)
            .order(cash_entries::entry_date.asc())
            .load::<CashEntryDB>(&mut conn)
            .map(|rows| rows.into_iter().map(CashEntry::from).collect())
            .map_err(CashError::from)
    }

    fn get_recent_entries(&self, account_id: &str, take: i64) -> Result<Vec<CashEntry>> {
        let mut conn = get_connection(&self.pool)?;
        let take = if take > 0 { take } else { DEFAULT_RECENT_TAKE };

        cash_entries::table
            .filter(cash_entries::account_id.eq(account_id))
            .order(cash_entries::entry_date.desc())
            .limit(take)
            .load::<CashEntryDB>(&mut conn)
            .map(|rows| rows.into_iter().map(CashEntry::from).collect())
            .map_err(CashError::from)
    }
}
