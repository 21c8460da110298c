use chrono::NaiveDate;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use std::collections::HashMap;
use std::sync::Arc;

use super::market_data_errors::{MarketDataError, Result};
use super::market_data_model::{PriceDB, PricePoint};
use super::market_data_traits::MarketDataRepositoryTrait;
use crate::db::get_connection;
use crate::schema::prices;

/// Repository for historical price data
pub struct MarketDataRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
}

impl MarketDataRepository {
    pub fn new(pool: Arc<Pool<ConnectionManager<SqliteConnection>>>) -> Self {
        Self { pool }
    }
}

impl MarketDataRepositoryTrait for MarketDataRepository {
    /// Resolves, for each security, the most recent close price dated on or
    /// before `as_of`. Securities without any price in range are absent from
    /// the returned map.
    fn get_latest_prices(
        &self,
        security_ids: &[String],
        as_of: Option<NaiveDate>,
    ) -> Result<HashMap<String, PricePoint>> {
        if security_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let mut conn = get_connection(&self.pool)?;

        let id_list = security_ids
            .iter()
            .map(|s| format!("'{}'", s))
            .collect::<Vec<_>>()
            .join(",");
        let as_of_filter = as_of
            .map(|d| format!("AND price_date <= '{}'", d.format("%Y-%m-%d")))
            .unwrap_or_default();

        // Use a subquery to get the latest in-range date for each security
        let latest_prices = diesel::sql_query(format!(
            "WITH latest_dates AS (
                SELECT security_id, MAX(price_date) as max_date
                FROM prices
                WHERE security_id IN ({}) {}
                GROUP BY security_id
            )
            SELECT p.*
            FROM prices p
            INNER JOIN latest_dates ld
                ON p.security_id = ld.security_id
                AND p.price_date = ld.max_date",
            id_list, as_of_filter
        ))
        .load::<PriceDB>(&mut conn)
        .map_err(MarketDataError::DatabaseError)?;

        Ok(latest_prices
            .into_iter()
            .map(|row| {
                let point = PricePoint::from(row);
                (point.security_id.clone(), point)
            })
            .collect())
    }

    /// Loads the ordered (ascending date) price history for one security,
    /// optionally bounded on either side.
    fn get_price_history(
        &self,
        security_id: &str,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<Vec<PricePoint>> {
        let mut conn = get_connection(&self.pool)?;

        let mut query = prices::table
            .filter(prices::security_id.eq(security_id))
            .into_boxed();
        if let Some(start_date) = start {
            query = query.filter(prices::price_date.ge(start_date));
        }
        if let Some(end_date) = end {
            query = query.filter(prices::price_date.le(end_date));
        }

        query
            .order(prices::price_date.asc())
            .load::<PriceDB>(&mut conn)
            .map(|rows| rows.into_iter().map(PricePoint::from).collect())
            .map_err(MarketDataError::DatabaseError)
    }

    /// Most recent price date available across the given securities.
    fn latest_price_date(&self, security_ids: &[String]) -> Result<Option<NaiveDate>> {
        if security_ids.is_empty() {
            return Ok(None);
        }

        let mut conn = get_connection(&self.pool)?;

        prices::table
            .filter(prices::security_id.eq_any(security_ids))
            .select(diesel::dsl::max(prices::price_date))
            .first::<Option<NaiveDate>>(&mut conn)
            .map_err(MarketDataError::DatabaseError)
    }

    /// Ingestion write path; replaces on (security, date) conflicts.
    fn insert_prices(&self, points: &[PricePoint]) -> Result<()> {
        let mut conn = get_connection(&self.pool)?;

        for chunk in points.chunks(100) {
            let rows: Vec<PriceDB> = chunk.iter().map(PriceDB::from).collect();
            diesel::replace_into(prices::table)
                .values(&rows)
                .execute(&mut conn)
                .map_err(MarketDataError::DatabaseError)?;
        }

        Ok(())
    }
}
