//! Average-cost holdings ledger.
//!
//! The sole writer of holding state: every executed trade passes through
//! [`apply`] exactly once, and callers must treat the holding as exclusively
//! owned between trade applications (see `TradeService` for the per-key
//! serialization that guarantees this).

use chrono::Utc;
use rust_decimal::Decimal;

use super::holdings_model::Holding;
use crate::trades::{OrderSide, Trade};

/// Applies an executed trade to the current holding state and returns the
/// new state.
///
/// Buys merge into the weighted-average cost basis:
/// `new_avg = (old_qty * old_avg + qty * price) / (old_qty + qty)`.
/// Sells reduce quantity and leave the average cost untouched, even when the
/// quantity reaches zero; a subsequent buy then re-establishes the basis from
/// that buy alone, exactly as if no holding existed.
///
/// Sell quantity must already have been validated against the available
/// quantity; the ledger itself does not enforce the no-short rule.
pub fn apply(existing: Option<Holding>, trade: &Trade) -> Holding {
    let now = Utc::now().naive_utc();

    let mut holding = existing.unwrap_or_else(|| Holding {
        id: uuid::Uuid::new_v4().to_string(),
        account_id: trade.account_id.clone(),
        security_id: trade.security_id.clone(),
        quantity: Decimal::ZERO,
        average_cost: Decimal::ZERO,
        updated_at: now,
    });

    match trade.side {
        OrderSide::Buy => {
            let old_quantity = holding.quantity;
            let new_quantity = old_quantity + trade.quantity;
            // Trade quantities are strictly positive, so a buy can only reach
            // zero from a (validator-excluded) short position; guard anyway.
            holding.average_cost = if new_quantity.is_zero() {
                trade.price
            } else {
                (old_quantity * holding.average_cost + trade.quantity * trade.price)
                    / new_quantity
            };
            holding.quantity = new_quantity;
        }
        OrderSide::Sell => {
            holding.quantity -= trade.quantity;
        }
    }

    holding.updated_at = now;
    holding
}
