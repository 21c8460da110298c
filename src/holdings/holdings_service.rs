use chrono::NaiveDate;
use log::debug;
use rust_decimal::Decimal;
use std::sync::Arc;

use super::holdings_model::HoldingView;
use super::holdings_traits::{HoldingsRepositoryTrait, HoldingsServiceTrait};
use crate::errors::Result;
use crate::market_data::MarketDataRepositoryTrait;

/// Service valuing holdings against resolved prices.
pub struct HoldingsService {
    holdings_repo: Arc<dyn HoldingsRepositoryTrait>,
    market_data_repo: Arc<dyn MarketDataRepositoryTrait>,
}

impl HoldingsService {
    /// Creates a new HoldingsService instance with dependencies injected.
    pub fn new(
        holdings_repo: Arc<dyn HoldingsRepositoryTrait>,
        market_data_repo: Arc<dyn MarketDataRepositoryTrait>,
    ) -> Self {
        Self {
            holdings_repo,
            market_data_repo,
        }
    }

    /// Loads the non-zero holdings of an account and values each against the
    /// most recent close on or before `as_of` (latest available if None).
    fn load_valued_holdings(
        &self,
        account_id: &str,
        as_of: Option<NaiveDate>,
    ) -> Result<Vec<HoldingView>> {
        let rows = self.holdings_repo.get_account_holdings(account_id)?;

        let security_ids: Vec<String> = rows
            .iter()
            .map(|(h, _)| h.security_id.clone())
            .collect();
        let price_lookup = self
            .market_data_repo
            .get_latest_prices(&security_ids, as_of)?;

        Ok(rows
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
            .collect())
    }
}

impl HoldingsServiceTrait for HoldingsService {
    fn value_holdings(
        &self,
        account_id: &str,
        as_of: Option<NaiveDate>,
    ) -> Result<Vec<HoldingView>> {
        debug!("Valuing holdings for account {} as of {:?}", account_id, as_of);
        self.load_valued_holdings(account_id, as_of)
    }

    /// Returns the account's largest holdings ranked by the given metric:
    /// "unrealizedpl", "returnpct", or market value (the default).
    fn get_top_holdings(
        &self,
        account_id: &str,
        top_n: usize,
        metric: &str,
    ) -> Result<Vec<HoldingView>> {
        let mut holdings = self.load_valued_holdings(account_id, None)?;
        if holdings.is_empty() {
            return Ok(holdings);
        }

        match metric.trim().to_lowercase().as_str() {
            "unrealizedpl" => {
                holdings.sort_by(|a, b| b.unrealized_pl.cmp(&a.unrealized_pl));
            }
            "returnpct" => {
                // Positions with no positive cost basis rank last
                let return_pct = |h: &HoldingView| -> Option<Decimal> {
                    let cost = h.quantity * h.average_cost;
                    (cost > Decimal::ZERO).then(|| h.unrealized_pl / cost)
                };
                holdings.sort_by(|a, b| return_pct(b).cmp(&return_pct(a)));
            }
            _ => {
                holdings.sort_by(|a, b| b.market_value.cmp(&a.market_value));
            }
        }

        holdings.truncate(top_n);
        Ok(holdings)
    }
}
