use chrono::NaiveDateTime;
use diesel::prelude::*;
use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::trades_errors::{OrderError, Result};

/// Buy or sell side of an order. Persisted as "BUY"/"SELL".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderSide {
    Buy,
    Sell,
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderSide::Buy => write!(f, "BUY"),
            OrderSide::Sell => write!(f, "SELL"),
        }
    }
}

impl FromStr for OrderSide {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("BUY") {
            Ok(OrderSide::Buy)
        } else if s.eq_ignore_ascii_case("SELL") {
            Ok(OrderSide::Sell)
        } else {
            Err(OrderError::InvalidInput(format!(
                "Unknown order side: {}",
                s
            )))
        }
    }
}

/// An executed trade. Immutable once recorded; the append-only source of
/// truth for holdings and P&L.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    pub id: String,
    pub account_id: String,
    pub security_id: String,
    pub side: OrderSide,
    pub quantity: Decimal,
    pub price: Decimal,
    pub traded_at: NaiveDateTime,
}

/// Trade joined with its security ticker, for recent-activity listings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeSummary {
    pub trade_id: String,
    pub account_id: String,
    pub security_id: String,
    pub ticker: String,
    pub side: OrderSide,
    pub quantity: Decimal,
    pub price: Decimal,
    pub traded_at: NaiveDateTime,
}

/// Input model for placing an order. All orders fill immediately at the
/// submitted price.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub account_id: String,
    pub security_id: String,
    pub side: OrderSide,
    pub quantity: Decimal,
    pub price: Decimal,
}

impl NewOrder {
    /// Validates the order input
    pub fn validate(&self) -> Result<()> {
        if self.quantity <= Decimal::ZERO {
            return Err(OrderError::InvalidInput(
                "Quantity must be positive".to_string(),
            ));
        }
        if self.price <= Decimal::ZERO {
            return Err(OrderError::InvalidInput(
                "Price must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Database model for trades
#[derive(Queryable, Identifiable, Insertable, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::trades)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TradeDB {
    pub id: String,
    pub account_id: String,
    pub security_id: String,
    pub side: String,
    pub quantity: f64,
    pub price: f64,
    pub traded_at: NaiveDateTime,
    pub created_at: NaiveDateTime,
}

impl From<TradeDB> for Trade {
    fn from(db: TradeDB) -> Self {
        Self {
            id: db.id,
            account_id: db.account_id,
            security_id: db.security_id,
            // Rows are only ever written through OrderSide::to_string
            side: if db.side.eq_ignore_ascii_case("SELL") {
                OrderSide::Sell
            } else {
                OrderSide::Buy
            },
            quantity: Decimal::from_f64_retain(db.quantity).unwrap_or_default(),
            price: Decimal::from_f64_retain(db.price).unwrap_or_default(),
            traded_at: db.traded_at,
        }
    }
}

impl From<&Trade> for TradeDB {
    fn from(trade: &Trade) -> Self {
        Self {
            id: trade.id.clone(),
            account_id: trade.account_id.clone(),
            security_id: trade.security_id.clone(),
            side: trade.side.to_string(),
            quantity: trade.quantity.to_f64().unwrap_or_default(),
            price: trade.price.to_f64().unwrap_or_default(),
            traded_at: trade.traded_at,
            created_at: trade.traded_at,
        }
    }
}
