use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::portfolio_model::{PortfolioOverview, PortfolioScope, PortfolioSnapshot, ReturnPoint};
use crate::errors::Result;

/// Trait defining the public reporting interface of the portfolio service.
pub trait PortfolioServiceTrait: Send + Sync {
    fn get_overview(&self, scope: &PortfolioScope) -> Result<PortfolioOverview>;

    fn get_snapshot(
        &self,
        account_id: &str,
        as_of: Option<NaiveDate>,
    ) -> Result<PortfolioSnapshot>;

    fn get_return_series(
        &self,
        security_id: &str,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<Vec<ReturnPoint>>;

    fn get_volatility(
        &self,
        security_id: &str,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<Option<Decimal>>;
}
