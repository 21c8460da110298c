//! Return series and volatility over an ordered price history.

use rust_decimal::{Decimal, MathematicalOps};

use super::portfolio_model::ReturnPoint;
use crate::constants::DECIMAL_PRECISION;
use crate::market_data::PricePoint;

/// Computes the daily and cumulative return series over a chronologically
/// ascending price history, one output point per input price.
///
/// The daily return is undefined (None) for the first point and whenever the
/// previous close is zero. The cumulative figure is a running *sum* of daily
/// returns (an approximation, hence `cum_return_approx`). It stays None
/// until the first defined daily return and then carries forward across any
/// undefined gaps.
pub fn calculate_return_series(ticker: &str, prices: &[PricePoint]) -> Vec<ReturnPoint> {
    let mut previous_close: Option<Decimal> = None;
    let mut cumulative: Option<Decimal> = None;
    let mut points = Vec::with_capacity(prices.len());

    for price in prices {
        let daily_return = match previous_close {
            Some(prev) if !prev.is_zero() => {
                Some(((price.close_price - prev) / prev).round_dp(DECIMAL_PRECISION))
            }
            _ => None,
        };
        if let Some(daily) = daily_return {
            cumulative = Some(cumulative.unwrap_or(Decimal::ZERO) + daily);
        }

        points.push(ReturnPoint {
            security_id: price.security_id.clone(),
            ticker: ticker.to_string(),
            price_date: price.price_date,
            close_price: price.close_price,
            daily_return,
            cum_return_approx: cumulative,
        });

        previous_close = Some(price.close_price);
    }

    points
}

/// Computes the population standard deviation (divisor N) of the daily
/// returns derived from the price history. Returns None when fewer than two
/// return observations exist.
pub fn calculate_volatility(prices: &[PricePoint]) -> Option<Decimal> {
    let mut returns: Vec<Decimal> = Vec::new();
    let mut previous_close: Option<Decimal> = None;

    for price in prices {
        if let Some(prev) = previous_close {
            if !prev.is_zero() {
                returns.push((price.close_price - prev) / prev);
            }
        }
        previous_close = Some(price.close_price);
    }

    if returns.len() < 2 {
        return None;
    }

    let n = Decimal::from(returns.len());
    let mean = returns.iter().copied().sum::<Decimal>() / n;
    let variance = returns
        .iter()
        .map(|r| (*r - mean) * (*r - mean))
        .sum::<Decimal>()
        / n;

    variance.sqrt().map(|stdev| stdev.round_dp(DECIMAL_PRECISION))
}
