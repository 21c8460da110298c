use chrono::NaiveDateTime;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;

use super::trades_errors::{OrderError, Result};
use super::trades_model::{Trade, TradeDB, TradeSummary};
use super::trades_traits::TradeRepositoryTrait;
use crate::constants::DEFAULT_RECENT_TAKE;
use crate::db::get_connection;
use crate::holdings::{Holding, HoldingDB};
use crate::schema::{accounts, holdings, securities, trades};
use crate::securities::SecurityDB;

/// Repository for the append-only trade history
pub struct TradeRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
}

impl TradeRepository {
    pub fn new(pool: Arc<Pool<ConnectionManager<SqliteConnection>>>) -> Self {
        Self { pool }
    }
}

impl TradeRepositoryTrait for TradeRepository {
    /// Writes the trade row and the resulting holding row in one transaction
    /// so a failure cannot leave an orphan trade behind.
    fn record_execution(&self, trade: &Trade, holding: &Holding) -> Result<()> {
        let mut conn = get_connection(&self.pool)?;

        let trade_row = TradeDB::from(trade);
        let holding_row = HoldingDB::from(holding);
        conn.transaction::<_, diesel::result::Error, _>(|tx_conn| {
            diesel::insert_into(trades::table)
                .values(&trade_row)
                .execute(tx_conn)?;
            diesel::replace_into(holdings::table)
                .values(&holding_row)
                .execute(tx_conn)?;
            Ok(())
        })
        .map_err(OrderError::from)?;

        Ok(())
    }

    fn get_account_trades(&self, account_id: &str) -> Result<Vec<Trade>> {
        let mut conn = get_connection(&self.pool)?;

        trades::table
            .filter(trades::account_id.eq(account_id))
            .order(trades::traded_at.asc())
            .load::<TradeDB>(&mut conn)
            .map(|rows| rows.into_iter().map(Trade::from).collect())
            .map_err(OrderError::from)
    }

    fn get_account_trades_until(
        &self,
        account_id: &str,
        until: NaiveDateTime,
    ) -> Result<Vec<Trade>> {
        let mut conn = get_connection(&self.pool)?;

        trades::table
            .filter(trades::account_id.eq(account_id))
            .filter(trades::traded_at.le(until))
            .order(trades::traded_at.asc())
            .load::<TradeDB>(&mut conn)
            .map(|rows| rows.into_iter().map(Trade::from).collect())
            .map_err(OrderError::from)
    }

    fn get_user_trades(&self, user_id: &str) -> Result<Vec<Trade>> {
        let mut conn = get_connection(&self.pool)?;

        trades::table
            .inner_join(accounts::table)
            .filter(accounts::user_id.eq(user_id))
            .select(trades::all_columns)
            .order(trades::traded_at.asc())
            .load::<TradeDB>(&mut conn)
            .map(|rows| rows.into_iter().map(Trade::from).collect())
            .map_err(OrderError::from)
    }

    fn get_recent_trades(&self, account_id: &str, take: i64) -> Result<Vec<TradeSummary>> {
        let mut conn = get_connection(&self.pool)?;
        let take = if take > 0 { take } else { DEFAULT_RECENT_TAKE };

        trades::table
            .inner_join(securities::table)
            .filter(trades::account_id.eq(account_id))
            .order(trades::traded_at.desc())
            .limit(take)
            .load::<(TradeDB, SecurityDB)>(&mut conn)
            .map(|rows| {
                rows.into_iter()
                    .map(|(t, s)| {
                        let trade = Trade::from(t);
                        TradeSummary {
                            trade_id: trade.id,
                            account_id: trade.account_id,
                            security_id: trade.security_id,
                            ticker: s.ticker,
                            side: trade.side,
                            quantity: trade.quantity,
                            price: trade.price,
                            traded_at: trade.traded_at,
                        }
                    })
                    .collect()
            })
            .map_err(OrderError::from)
    }
}
