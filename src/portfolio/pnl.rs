//! Realized P&L over a trade history.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::trades::{OrderSide, Trade};

/// Realized gain/loss and invested capital over a set of trades.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RealizedPnl {
    pub realized_pl: Decimal,
    pub invested_capital: Decimal,
}

#[derive(Default)]
struct SecurityTotals {
    buy_qty: Decimal,
    buy_cost: Decimal,
    sell_qty: Decimal,
    sell_proceeds: Decimal,
}

/// Computes realized P&L and invested capital for whatever set of trades the
/// caller supplies (one account, or all accounts of a user).
///
/// Per security, sells are priced against the average cost of *all* buys in
/// the set, not lot-matched and not ordered chronologically: a sell that
/// precedes every buy is still priced against the eventual average. This
/// whole-history average-cost method is kept for compatibility with the
/// stored reports; do not replace it with FIFO/LIFO matching.
pub fn calculate_realized_pnl(trades: &[Trade]) -> RealizedPnl {
    let mut per_security: HashMap<&str, SecurityTotals> = HashMap::new();

    for trade in trades {
        let totals = per_security
            .entry(trade.security_id.as_str())
            .or_default();
        match trade.side {
            OrderSide::Buy => {
                totals.buy_qty += trade.quantity;
                totals.buy_cost += trade.quantity * trade.price;
            }
            OrderSide::Sell => {
                totals.sell_qty += trade.quantity;
                totals.sell_proceeds += trade.quantity * trade.price;
            }
        }
    }

    let mut result = RealizedPnl::default();
    for totals in per_security.values() {
        let avg_buy_cost = if totals.buy_qty > Decimal::ZERO {
            totals.buy_cost / totals.buy_qty
        } else {
            Decimal::ZERO
        };
        result.invested_capital += totals.buy_cost;
        result.realized_pl += totals.sell_proceeds - totals.sell_qty * avg_buy_cost;
    }

    result
}
