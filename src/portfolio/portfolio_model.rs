use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::holdings::HoldingView;

/// Scope of an overview query: one account, or every account owned by a
/// user pooled together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortfolioScope {
    Account(String),
    User(String),
}

/// One security grouped across all holdings in scope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SecuritySummary {
    pub security_id: String,
    pub ticker: String,
    pub company_name: String,
    pub quantity: Decimal,
    pub average_cost: Decimal,
    pub latest_price: Decimal,
    pub market_value: Decimal,
    pub unrealized_pl: Decimal,
}

/// Aggregated value, P&L, and contributions for a scope.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioOverview {
    pub account_id: Option<String>,
    pub user_id: Option<String>,
    pub securities: Vec<SecuritySummary>,
    pub total_security_value: Decimal,
    pub cash_balance: Decimal,
    pub total_portfolio_value: Decimal,
    pub total_unrealized_pl: Decimal,
    pub total_realized_pl: Decimal,
    pub net_contribution: Decimal,
    pub total_return_pct: Option<Decimal>,
}

/// Point-in-time valuation of one account's holdings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSnapshot {
    pub account_id: String,
    pub as_of_date: NaiveDate,
    pub total_market_value: Decimal,
    pub total_unrealized_pl: Decimal,
    pub total_realized_pl: Decimal,
    pub total_return_pct: Option<Decimal>,
    pub holdings: Vec<HoldingView>,
}

/// One point of a security's return series.
///
/// `cum_return_approx` is a running sum of daily returns, not a compounded
/// product; the name carries the approximation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReturnPoint {
    pub security_id: String,
    pub ticker: String,
    pub price_date: NaiveDate,
    pub close_price: Decimal,
    pub daily_return: Option<Decimal>,
    pub cum_return_approx: Option<Decimal>,
}
