use super::cash_errors::Result;
use super::cash_model::CashEntry;

/// Trait defining the contract for cash ledger data access.
pub trait CashRepositoryTrait: Send + Sync {
    fn get_account_entries(&self, account_id: &str) -> Result<Vec<CashEntry>>;
    fn get_user_entries(&self, user_id: &str) -> Result<Vec<CashEntry>>;
    fn get_recent_entries(&self, account_id: &str, take: i64) -> Result<Vec<CashEntry>>;
}
