use chrono::NaiveDateTime;

use super::trades_errors::Result;
use super::trades_model::{NewOrder, Trade, TradeSummary};
use crate::holdings::Holding;

/// Trait defining the contract for trade history storage.
/// Trades are append-only; there is no update or delete.
pub trait TradeRepositoryTrait: Send + Sync {
    /// Persists an executed trade together with the holding state it produced,
    /// as a single atomic write. Neither row may exist without the other.
    fn record_execution(&self, trade: &Trade, holding: &Holding) -> Result<()>;
    fn get_account_trades(&self, account_id: &str) -> Result<Vec<Trade>>;
    fn get_account_trades_until(
        &self,
        account_id: &str,
        until: NaiveDateTime,
    ) -> Result<Vec<Trade>>;
    fn get_user_trades(&self, user_id: &str) -> Result<Vec<Trade>>;
    fn get_recent_trades(&self, account_id: &str, take: i64) -> Result<Vec<TradeSummary>>;
}

/// Trait defining the public interface of the order execution service.
pub trait TradeServiceTrait: Send + Sync {
    fn place_order(&self, order: NewOrder) -> crate::errors::Result<Trade>;
    fn get_recent_trades(&self, account_id: &str, take: i64) -> Result<Vec<TradeSummary>>;
}
