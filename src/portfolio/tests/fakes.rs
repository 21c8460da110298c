// In-memory store implementing every repository trait the portfolio
// service depends on. One instance is shared across all six ports.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Arc;

use crate::accounts::{
    AccountError, AccountRepositoryTrait, AccountSummary, NewAccount, User, UserSummary,
};
use crate::cash::{CashEntry, CashRepositoryTrait};
use crate::holdings::{Holding, HoldingsRepositoryTrait};
use crate::market_data::{MarketDataRepositoryTrait, PricePoint};
use crate::portfolio::PortfolioService;
use crate::securities::{Security, SecurityError, SecurityRepositoryTrait};
use crate::trades::{OrderSide, Trade, TradeRepositoryTrait, TradeSummary};

#[derive(Default)]
pub(crate) struct FakeStore {
    /// (account_id, user_id) pairs; also defines which users exist.
    pub accounts: Vec<(String, String)>,
    pub securities: Vec<Security>,
    pub holdings: Vec<(Holding, Security)>,
    pub trades: Vec<Trade>,
    pub cash_entries: Vec<CashEntry>,
    pub prices: Vec<PricePoint>,
}

impl FakeStore {
    fn user_accounts(&self, user_id: &str) -> Vec<&str> {
        self.accounts
            .iter()
            .filter(|(_, u)| u == user_id)
            .map(|(a, _)| a.as_str())
            .collect()
    }
}

impl AccountRepositoryTrait for FakeStore {
    fn list_accounts(&self) -> crate::accounts::Result<Vec<AccountSummary>> {
        Ok(Vec::new())
    }

    fn get_account(&self, account_id: &str) -> crate::accounts::Result<AccountSummary> {
        match self.accounts.iter().find(|(a, _)| a == account_id) {
            Some((account_id, user_id)) => Ok(AccountSummary {
                account_id: account_id.clone(),
                account_name: "Trading".to_string(),
                user_name: user_id.clone(),
                account_type: "individual".to_string(),
                is_active: true,
                created_at: NaiveDateTime::default(),
            }),
            None => Err(AccountError::NotFound(format!(
                "Account with id {} not found",
                account_id
            ))),
        }
    }

    fn get_user(&self, user_id: &str) -> crate::accounts::Result<User> {
        if self.accounts.iter().any(|(_, u)| u == user_id) {
            Ok(User {
                id: user_id.to_string(),
                ..User::default()
            })
        } else {
            Err(AccountError::NotFound(format!(
                "User with id {} not found",
                user_id
            )))
        }
    }

    fn create_account(&self, _new_account: NewAccount) -> crate::accounts::Result<AccountSummary> {
        Err(AccountError::InvalidData("not supported".to_string()))
    }

    fn list_users(&self) -> crate::accounts::Result<Vec<UserSummary>> {
        Ok(Vec::new())
    }

    fn deactivate_user(&self, _user_id: &str) -> crate::accounts::Result<bool> {
        Ok(false)
    }
}

impl SecurityRepositoryTrait for FakeStore {
    fn list_securities(&self, active_only: bool) -> crate::securities::Result<Vec<Security>> {
        Ok(self
            .securities
            .iter()
            .filter(|s| !active_only || s.is_active)
            .cloned()
            .collect())
    }

    fn get_security(&self, security_id: &str) -> crate::securities::Result<Security> {
        self.securities
            .iter()
            .find(|s| s.id == security_id)
            .cloned()
            .ok_or_else(|| {
                SecurityError::NotFound(format!("Security with id {} not found", security_id))
            })
    }
}

impl MarketDataRepositoryTrait for FakeStore {
    fn get_latest_prices(
        &self,
        security_ids: &[String],
        as_of: Option<NaiveDate>,
    ) -> crate::market_data::Result<HashMap<String, PricePoint>> {
        let mut lookup = HashMap::new();
        for id in security_ids {
            let best = self
                .prices
                .iter()
                .filter(|p| &p.security_id == id)
                .filter(|p| as_of.map_or(true, |date| p.price_date <= date))
                .max_by_key(|p| p.price_date);
            if let Some(point) = best {
                lookup.insert(id.clone(), point.clone());
            }
        }
        Ok(lookup)
    }

    fn get_price_history(
        &self,
        security_id: &str,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> crate::market_data::Result<Vec<PricePoint>> {
        let mut history: Vec<PricePoint> = self
            .prices
            .iter()
            .filter(|p| p.security_id == security_id)
            .filter(|p| start.map_or(true, |date| p.price_date >= date))
            .filter(|p| end.map_or(true, |date| p.price_date <= date))
            .cloned()
            .collect();
        history.sort_by_key(|p| p.price_date);
        Ok(history)
    }

    fn latest_price_date(
        &self,
        security_ids: &[String],
    ) -> crate::market_data::Result<Option<NaiveDate>> {
        Ok(self
            .prices
            .iter()
            .filter(|p| security_ids.contains(&p.security_id))
            .map(|p| p.price_date)
            .max())
    }

    fn insert_prices(&self, _points: &[PricePoint]) -> crate::market_data::Result<()> {
        Ok(())
    }
}

impl HoldingsRepositoryTrait for FakeStore {
    fn find_holding(
        &self,
        account_id: &str,
        security_id: &str,
    ) -> crate::holdings::Result<Option<Holding>> {
        Ok(self
            .holdings
            .iter()
            .find(|(h, _)| h.account_id == account_id && h.security_id == security_id)
            .map(|(h, _)| h.clone()))
    }

    fn get_quantity(
        &self,
        account_id: &str,
        security_id: &str,
    ) -> crate::holdings::Result<Decimal> {
        Ok(self
            .find_holding(account_id, security_id)?
            .map(|h| h.quantity)
            .unwrap_or(Decimal::ZERO))
    }

    fn get_account_holdings(
        &self,
        account_id: &str,
    ) -> crate::holdings::Result<Vec<(Holding, Security)>> {
        Ok(self
            .holdings
            .iter()
            .filter(|(h, _)| h.account_id == account_id && !h.quantity.is_zero())
            .cloned()
            .collect())
    }

    fn get_user_holdings(
        &self,
        user_id: &str,
    ) -> crate::holdings::Result<Vec<(Holding, Security)>> {
        let accounts = self.user_accounts(user_id);
        Ok(self
            .holdings
            .iter()
            .filter(|(h, _)| accounts.contains(&h.account_id.as_str()) && !h.quantity.is_zero())
            .cloned()
            .collect())
    }
}

impl TradeRepositoryTrait for FakeStore {
    fn record_execution(
        &self,
        _trade: &Trade,
        _holding: &Holding,
    ) -> crate::trades::Result<()> {
        Ok(())
    }

    fn get_account_trades(&self, account_id: &str) -> crate::trades::Result<Vec<Trade>> {
        Ok(self
            .trades
            .iter()
            .filter(|t| t.account_id == account_id)
            .cloned()
            .collect())
    }

    fn get_account_trades_until(
        &self,
        account_id: &str,
        until: NaiveDateTime,
    ) -> crate::trades::Result<Vec<Trade>> {
        Ok(self
            .trades
            .iter()
            .filter(|t| t.account_id == account_id && t.traded_at <= until)
            .cloned()
            .collect())
    }

    fn get_user_trades(&self, user_id: &str) -> crate::trades::Result<Vec<Trade>> {
        let accounts = self.user_accounts(user_id);
        Ok(self
            .trades
            .iter()
            .filter(|t| accounts.contains(&t.account_id.as_str()))
            .cloned()
            .collect())
    }

    fn get_recent_trades(
        &self,
        _account_id: &str,
        _take: i64,
    ) -> crate::trades::Result<Vec<TradeSummary>> {
        Ok(Vec::new())
    }
}

impl CashRepositoryTrait for FakeStore {
    fn get_account_entries(&self, account_id: &str) -> crate::cash::Result<Vec<CashEntry>> {
        Ok(self
            .cash_entries
            .iter()
            .filter(|e| e.account_id == account_id)
            .cloned()
            .collect())
    }

    fn get_user_entries(&self, user_id: &str) -> crate::cash::Result<Vec<CashEntry>> {
        let accounts = self.user_accounts(user_id);
        Ok(self
            .cash_entries
            .iter()
            .filter(|e| accounts.contains(&e.account_id.as_str()))
            .cloned()
            .collect())
    }

    fn get_recent_entries(
        &self,
        _account_id: &str,
        _take: i64,
    ) -> crate::cash::Result<Vec<CashEntry>> {
        Ok(Vec::new())
    }
}

pub(crate) fn portfolio_service(store: FakeStore) -> PortfolioService {
    let store = Arc::new(store);
    PortfolioService::new(
        store.clone(),
        store.clone(),
        store.clone(),
        store.clone(),
        store.clone(),
        store,
    )
}

pub(crate) fn account(account_id: &str, user_id: &str) -> (String, String) {
    (account_id.to_string(), user_id.to_string())
}

pub(crate) fn security(id: &str, ticker: &str) -> Security {
    Security {
        id: id.to_string(),
        ticker: ticker.to_string(),
        company_name: format!("{} Inc", ticker),
        sector: Some("Technology".to_string()),
        listed_in: Some("NASDAQ".to_string()),
        is_active: true,
    }
}

pub(crate) fn holding(
    account_id: &str,
    security_id: &str,
    quantity: Decimal,
    average_cost: Decimal,
) -> Holding {
    Holding {
        id: uuid::Uuid::new_v4().to_string(),
        account_id: account_id.to_string(),
        security_id: security_id.to_string(),
        quantity,
        average_cost,
        updated_at: NaiveDateTime::default(),
    }
}

pub(crate) fn trade(
    account_id: &str,
    security_id: &str,
    side: OrderSide,
    quantity: Decimal,
    price: Decimal,
    traded_at: NaiveDateTime,
) -> Trade {
    Trade {
        id: uuid::Uuid::new_v4().to_string(),
        account_id: account_id.to_string(),
        security_id: security_id.to_string(),
        side,
        quantity,
        price,
        traded_at,
    }
}

pub(crate) fn cash_entry(account_id: &str, entry_type: &str, amount: Decimal) -> CashEntry {
    CashEntry {
        id: uuid::Uuid::new_v4().to_string(),
        account_id: account_id.to_string(),
        entry_date: NaiveDateTime::default(),
        amount,
        entry_type: entry_type.to_string(),
        reference: None,
    }
}

pub(crate) fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
}

pub(crate) fn datetime(day: u32) -> NaiveDateTime {
    date(day).and_hms_opt(12, 0, 0).unwrap()
}
