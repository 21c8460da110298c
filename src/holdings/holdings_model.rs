use chrono::NaiveDateTime;
use diesel::prelude::*;
use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Derived per-(account, security) position state. Mutated only through the
/// ledger; quantity may reach zero, in which case the row is retained but
/// excluded from valuation and display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub id: String,
    pub account_id: String,
    pub security_id: String,
    pub quantity: Decimal,
    pub average_cost: Decimal,
    pub updated_at: NaiveDateTime,
}

/// A holding valued against a resolved price.
///
/// When no price is known on or before the valuation date, `latest_price`
/// is zero: market value collapses to zero and the unrealized P&L becomes
/// the full negative cost basis. Absence of price data is not an error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HoldingView {
    pub account_id: String,
    pub security_id: String,
    pub ticker: String,
    pub company_name: String,
    pub sector: Option<String>,
    pub quantity: Decimal,
    pub average_cost: Decimal,
    pub latest_price: Decimal,
    pub market_value: Decimal,
    pub unrealized_pl: Decimal,
}

impl HoldingView {
    /// Values a holding at the given price (zero when no price resolved).
    pub fn new(
        holding: &Holding,
        ticker: &str,
        company_name: &str,
        sector: Option<String>,
        latest_price: Decimal,
    ) -> Self {
        Self {
            account_id: holding.account_id.clone(),
            security_id: holding.security_id.clone(),
            ticker: ticker.to_string(),
            company_name: company_name.to_string(),
            sector,
            quantity: holding.quantity,
            average_cost: holding.average_cost,
            latest_price,
            market_value: latest_price * holding.quantity,
            unrealized_pl: (latest_price - holding.average_cost) * holding.quantity,
        }
    }
}

/// Database model for holdings rows
#[derive(Queryable, Identifiable, Insertable, AsChangeset, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::holdings)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct HoldingDB {
    pub id: String,
    pub account_id: String,
    pub security_id: String,
    pub quantity: f64,
    pub average_cost: f64,
    pub updated_at: NaiveDateTime,
}

impl From<HoldingDB> for Holding {
    fn from(db: HoldingDB) -> Self {
        Self {
            id: db.id,
            account_id: db.account_id,
            security_id: db.security_id,
            quantity: Decimal::from_f64_retain(db.quantity).unwrap_or_default(),
            average_cost: Decimal::from_f64_retain(db.average_cost).unwrap_or_default(),
            updated_at: db.updated_at,
        }
    }
}

impl From<&Holding> for HoldingDB {
    fn from(holding: &Holding) -> Self {
        Self {
            id: holding.id.clone(),
            account_id: holding.account_id.clone(),
            security_id: holding.security_id.clone(),
            quantity: holding.quantity.to_f64().unwrap_or_default(),
            average_cost: holding.average_cost.to_f64().unwrap_or_default(),
            updated_at: holding.updated_at,
        }
    }
}
