use chrono::NaiveDate;
use std::collections::HashMap;

use super::market_data_errors::Result;
use super::market_data_model::PricePoint;

/// Trait defining the contract for price data access.
/// Valuation treats an absent entry as "no price known" (resolved to zero
/// downstream); it is never an error.
pub trait MarketDataRepositoryTrait: Send + Sync {
    fn get_latest_prices(
        &self,
        security_ids: &[String],
        as_of: Option<NaiveDate>,
    ) -> Result<HashMap<String, PricePoint>>;

    fn get_price_history(
        &self,
        security_id: &str,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<Vec<PricePoint>>;

    fn latest_price_date(&self, security_ids: &[String]) -> Result<Option<NaiveDate>>;

    fn insert_prices(&self, points: &[PricePoint]) -> Result<()>;
}
