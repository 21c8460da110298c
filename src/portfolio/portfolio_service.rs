use chrono::{NaiveDate, Utc};
use log::debug;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Arc;

use super::performance;
use super::pnl;
use super::portfolio_model::{
    PortfolioOverview, PortfolioScope, PortfolioSnapshot, SecuritySummary,
};
use super::portfolio_traits::PortfolioServiceTrait;
use crate::accounts::AccountRepositoryTrait;
use crate::cash::{CashRepositoryTrait, CashSummary};
use crate::errors::Result;
use crate::holdings::{HoldingView, HoldingsRepositoryTrait};
use crate::market_data::MarketDataRepositoryTrait;
use crate::portfolio::portfolio_model::ReturnPoint;
use crate::securities::{Security, SecurityRepositoryTrait};
use crate::trades::TradeRepositoryTrait;

/// Top-level reporting service composing holdings valuation, realized P&L,
/// and the cash ledger into account- and user-scoped overviews.
pub struct PortfolioService {
    account_repo: Arc<dyn AccountRepositoryTrait>,
    security_repo: Arc<dyn SecurityRepositoryTrait>,
    market_data_repo: Arc<dyn MarketDataRepositoryTrait>,
    holdings_repo: Arc<dyn HoldingsRepositoryTrait>,
    trade_repo: Arc<dyn TradeRepositoryTrait>,
    cash_repo: Arc<dyn CashRepositoryTrait>,
}

impl PortfolioService {
    /// Creates a new PortfolioService instance with dependencies injected.
    pub fn new(
        account_repo: Arc<dyn AccountRepositoryTrait>,
        security_repo: Arc<dyn SecurityRepositoryTrait>,
        market_data_repo: Arc<dyn MarketDataRepositoryTrait>,
        holdings_repo: Arc<dyn HoldingsRepositoryTrait>,
        trade_repo: Arc<dyn TradeRepositoryTrait>,
        cash_repo: Arc<dyn CashRepositoryTrait>,
    ) -> Self {
        Self {
            account_repo,
            security_repo,
            market_data_repo,
            holdings_repo,
            trade_repo,
            cash_repo,
        }
    }

    fn ensure_scope_exists(&self, scope: &PortfolioScope) -> Result<()> {
        match scope {
            PortfolioScope::Account(account_id) => {
                self.account_repo.get_account(account_id)?;
            }
            PortfolioScope::User(user_id) => {
                self.account_repo.get_user(user_id)?;
            }
        }
        Ok(())
    }

    /// Groups in-scope holdings by security: quantities summed, average cost
    /// qty-weighted across the grouped rows, one resolved price per security.
    fn group_by_security(
        &self,
        rows: Vec<(crate::holdings::Holding, Security)>,
    ) -> Result<Vec<SecuritySummary>> {
        struct Grouped {
            security: Security,
            quantity: Decimal,
            cost: Decimal,
        }

        let security_ids: Vec<String> = rows
            .iter()
            .map(|(h, _)| h.security_id.clone())
            .collect();
        let price_lookup = self.market_data_repo.get_latest_prices(&security_ids, None)?;

        let mut grouped: HashMap<String, Grouped> = HashMap::new();
        for (holding, security) in rows {
            let entry = grouped
                .entry(holding.security_id.clone())
                .or_insert_with(|| Grouped {
                    security,
                    quantity: Decimal::ZERO,
                    cost: Decimal::ZERO,
                });
            entry.quantity += holding.quantity;
            entry.cost += holding.quantity * holding.average_cost;
        }

        let mut securities: Vec<SecuritySummary> = grouped
            .into_values()
            .map(|g| {
                let average_cost = if g.quantity.is_zero() {
                    Decimal::ZERO
                } else {
                    g.cost / g.quantity
                };
                let latest_price = price_lookup
                    .get(&g.security.id)
                    .map(|p| p.close_price)
                    .unwrap_or(Decimal::ZERO);
                SecuritySummary {
                    security_id: g.security.id,
                    ticker: g.security.ticker,
                    company_name: g.security.company_name,
                    quantity: g.quantity,
                    average_cost,
                    latest_price,
                    market_value: g.quantity * latest_price,
                    unrealized_pl: (latest_price - average_cost) * g.quantity,
                }
            })
            .collect();
        securities.sort_by(|a, b| b.market_value.cmp(&a.market_value));

        Ok(securities)
    }
}

impl PortfolioServiceTrait for PortfolioService {
    /// Builds the aggregated overview for one account or for all accounts of
    /// a user pooled into a single scope (same formulas, wider input set).
    fn get_overview(&self, scope: &PortfolioScope) -> Result<PortfolioOverview> {
        debug!("Building portfolio overview for {:?}", scope);
        self.ensure_scope_exists(scope)?;

        let holding_rows = match scope {
            PortfolioScope::Account(id) => self.holdings_repo.get_account_holdings(id)?,
            PortfolioScope::User(id) => self.holdings_repo.get_user_holdings(id)?,
        };
        let securities = self.group_by_security(holding_rows)?;

        let total_security_value: Decimal = securities.iter().map(|s| s.market_value).sum();
        let total_unrealized_pl: Decimal = securities.iter().map(|s| s.unrealized_pl).sum();

        let cash_entries = match scope {
            PortfolioScope::Account(id) => self.cash_repo.get_account_entries(id)?,
            PortfolioScope::User(id) => self.cash_repo.get_user_entries(id)?,
        };
        let cash = CashSummary::from_entries(&cash_entries);
        let net_contribution = cash.net_contribution();

        let trades = match scope {
            PortfolioScope::Account(id) => self.trade_repo.get_account_trades(id)?,
            PortfolioScope::User(id) => self.trade_repo.get_user_trades(id)?,
        };
        let realized = pnl::calculate_realized_pnl(&trades);

        let total_portfolio_value = total_security_value + cash.cash_balance;
        let total_return_pct = if net_contribution > Decimal::ZERO {
            Some((total_portfolio_value - net_contribution) / net_contribution)
        } else {
            None
        };

        let (account_id, user_id) = match scope {
            PortfolioScope::Account(id) => (Some(id.clone()), None),
            PortfolioScope::User(id) => (None, Some(id.clone())),
        };

        Ok(PortfolioOverview {
            account_id,
            user_id,
            securities,
            total_security_value,
            cash_balance: cash.cash_balance,
            total_portfolio_value,
            total_unrealized_pl,
            total_realized_pl: realized.realized_pl,
            net_contribution,
            total_return_pct,
        })
    }

    /// Values one account as of a date. Defaults to the most recent price
    /// date across the held securities, falling back to today when no price
    /// history exists at all.
    fn get_snapshot(
        &self,
        account_id: &str,
        as_of: Option<NaiveDate>,
    ) -> Result<PortfolioSnapshot> {
        debug!("Building snapshot for account {} as of {:?}", account_id, as_of);
        self.account_repo.get_account(account_id)?;

        let holding_rows = self.holdings_repo.get_account_holdings(account_id)?;
        let security_ids: Vec<String> = holding_rows
            .iter()
            .map(|(h, _)| h.security_id.clone())
            .collect();

        let effective_date = match as_of {
            Some(date) => date,
            None => self
                .market_data_repo
                .latest_price_date(&security_ids)?
                .unwrap_or_else(|| Utc::now().date_naive()),
        };

        let price_lookup = self
            .market_data_repo
            .get_latest_prices(&security_ids, Some(effective_date))?;
        let holdings: Vec<HoldingView> = holding_rows
            .iter()
            .map(|(holding, security)| {
                let price = price_lookup
                    .get(&holding.security_id)
                    .map(|p| p.close_price)
                    .unwrap_or(Decimal::ZERO);
                HoldingView::new(
                    holding,
                    &security.ticker,
                    &security.company_name,
                    security.sector.clone(),
                    price,
                )
            })
            .collect();

        let total_market_value: Decimal = holdings.iter().map(|h| h.market_value).sum();
        let total_unrealized_pl: Decimal = holdings.iter().map(|h| h.unrealized_pl).sum();

        let until = effective_date.and_hms_opt(23, 59, 59).unwrap();
        let trades = self.trade_repo.get_account_trades_until(account_id, until)?;
        let realized = pnl::calculate_realized_pnl(&trades);

        let total_return_pct = if realized.invested_capital > Decimal::ZERO {
            Some(
                (total_market_value + realized.realized_pl) / realized.invested_capital
                    - Decimal::ONE,
            )
        } else {
            None
        };

        Ok(PortfolioSnapshot {
            account_id: account_id.to_string(),
            as_of_date: effective_date,
            total_market_value,
            total_unrealized_pl,
            total_realized_pl: realized.realized_pl,
            total_return_pct,
            holdings,
        })
    }

    fn get_return_series(
        &self,
        security_id: &str,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<Vec<ReturnPoint>> {
        let security = self.security_repo.get_security(security_id)?;
        let prices = self
            .market_data_repo
            .get_price_history(security_id, start, end)?;
        Ok(performance::calculate_return_series(&security.ticker, &prices))
    }

    fn get_volatility(
        &self,
        security_id: &str,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<Option<Decimal>> {
        self.security_repo.get_security(security_id)?;
        let prices = self
            .market_data_repo
            .get_price_history(security_id, start, end)?;
        Ok(performance::calculate_volatility(&prices))
    }
}
