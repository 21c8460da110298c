use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::holdings_errors::Result;
use super::holdings_model::{Holding, HoldingView};
use crate::securities::Security;

/// Trait defining the read contract for holdings state. Writes happen only
/// through the trade repository's transactional execution record.
/// "Account"/"user" listing methods return only non-zero holdings, joined
/// with their security reference data.
pub trait HoldingsRepositoryTrait: Send + Sync {
    fn find_holding(&self, account_id: &str, security_id: &str) -> Result<Option<Holding>>;
    fn get_quantity(&self, account_id: &str, security_id: &str) -> Result<Decimal>;
    fn get_account_holdings(&self, account_id: &str) -> Result<Vec<(Holding, Security)>>;
    fn get_user_holdings(&self, user_id: &str) -> Result<Vec<(Holding, Security)>>;
}

/// Trait defining the public interface of the holdings valuation service.
pub trait HoldingsServiceTrait: Send + Sync {
    fn value_holdings(
        &self,
        account_id: &str,
        as_of: Option<NaiveDate>,
    ) -> crate::errors::Result<Vec<HoldingView>>;

    fn get_top_holdings(
        &self,
        account_id: &str,
        top_n: usize,
        metric: &str,
    ) -> crate::errors::Result<Vec<HoldingView>>;
}
