use chrono::Utc;
use dashmap::DashMap;
use log::{debug, info};
use std::sync::{Arc, Mutex};

use super::trades_model::{NewOrder, OrderSide, Trade, TradeSummary};
use super::trades_traits::{TradeRepositoryTrait, TradeServiceTrait};
use crate::errors::Result;
use crate::holdings::ledger;
use crate::holdings::HoldingsRepositoryTrait;
use crate::trades::OrderError;

/// Service executing orders against the holdings ledger.
///
/// Order placement is serialized per (account, security) so that the
/// validate-sell / record-trade / merge-holding sequence is atomic per key
/// and two concurrent sells cannot both pass validation against a stale
/// quantity. Reporting paths take no locks.
pub struct TradeService {
    trade_repo: Arc<dyn TradeRepositoryTrait>,
    holdings_repo: Arc<dyn HoldingsRepositoryTrait>,
    order_locks: DashMap<(String, String), Arc<Mutex<()>>>,
}

impl TradeService {
    /// Creates a new TradeService instance with dependencies injected.
    pub fn new(
        trade_repo: Arc<dyn TradeRepositoryTrait>,
        holdings_repo: Arc<dyn HoldingsRepositoryTrait>,
    ) -> Self {
        Self {
            trade_repo,
            holdings_repo,
            order_locks: DashMap::new(),
        }
    }

    fn lock_for(&self, account_id: &str, security_id: &str) -> Arc<Mutex<()>> {
        self.order_locks
            .entry((account_id.to_string(), security_id.to_string()))
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }
}

impl TradeServiceTrait for TradeService {
    /// Validates, records, and applies an order as one unit. The trade row
    /// and the updated holding are written in a single transaction, so a
    /// failed write leaves neither behind.
    ///
    /// Sells exceeding the currently held quantity are rejected with
    /// `InsufficientQuantity`; selling the exact held quantity is allowed and
    /// drives the holding to zero. Buys are always permitted: no cash-balance
    /// check is made against the account's cash ledger.
    ///
    /// Not idempotent; callers must not blind-retry on failure or a trade
    /// could be double-booked.
    fn place_order(&self, order: NewOrder) -> Result<Trade> {
        order.validate()?;

        debug!(
            "Placing {} order for account {}, security {}: {} @ {}",
            order.side, order.account_id, order.security_id, order.quantity, order.price
        );

        let lock = self.lock_for(&order.account_id, &order.security_id);
        let _guard = lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        if order.side == OrderSide::Sell {
            let available = self
                .holdings_repo
                .get_quantity(&order.account_id, &order.security_id)?;
            if order.quantity > available {
                return Err(OrderError::InsufficientQuantity {
                    available,
                    requested: order.quantity,
                }
                .into());
            }
        }

        let trade = Trade {
            id: uuid::Uuid::new_v4().to_string(),
            account_id: order.account_id,
            security_id: order.security_id,
            side: order.side,
            quantity: order.quantity,
            price: order.price,
            traded_at: Utc::now().naive_utc(),
        };

        let existing = self
            .holdings_repo
            .find_holding(&trade.account_id, &trade.security_id)?;
        let updated = ledger::apply(existing, &trade);
        self.trade_repo.record_execution(&trade, &updated)?;

        info!(
            "Executed trade {}: {} {} {} @ {}",
            trade.id, trade.side, trade.quantity, trade.security_id, trade.price
        );

        Ok(trade)
    }

    fn get_recent_trades(
        &self,
        account_id: &str,
        take: i64,
    ) -> super::trades_errors::Result<Vec<TradeSummary>> {
        self.trade_repo.get_recent_trades(account_id, take)
    }
}
