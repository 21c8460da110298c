// Tests for return series and volatility

use rust_decimal_macros::dec;

use super::fakes::{self, portfolio_service, FakeStore};
use crate::errors::Error;
use crate::market_data::PricePoint;
use crate::portfolio::performance::{calculate_return_series, calculate_volatility};
use crate::portfolio::PortfolioServiceTrait;
use crate::securities::SecurityError;

fn prices(closes: &[rust_decimal::Decimal]) -> Vec<PricePoint> {
    closes
        .iter()
        .enumerate()
        .map(|(i, close)| PricePoint::new("SEC-AAPL", fakes::date(i as u32 + 1), *close))
        .collect()
}

#[test]
fn daily_and_cumulative_returns_over_a_series() {
    let series = calculate_return_series("AAPL", &prices(&[dec!(100), dec!(110), dec!(99)]));

    assert_eq!(series.len(), 3);

    // First point has no previous close
    assert_eq!(series[0].daily_return, None);
    assert_eq!(series[0].cum_return_approx, None);
    assert_eq!(series[0].close_price, dec!(100));
    assert_eq!(series[0].ticker, "AAPL");

    assert_eq!(series[1].daily_return, Some(dec!(0.1)));
    assert_eq!(series[1].cum_return_approx, Some(dec!(0.1)));

    // Cumulative is an additive running sum, so +10% then -10% nets to zero
    assert_eq!(series[2].daily_return, Some(dec!(-0.1)));
    assert_eq!(series[2].cum_return_approx, Some(dec!(0)));
}

#[test]
fn zero_previous_close_leaves_the_return_undefined() {
    let series = calculate_return_series("AAPL", &prices(&[dec!(100), dec!(0), dec!(50)]));

    assert_eq!(series[1].daily_return, Some(dec!(-1)));
    assert_eq!(series[1].cum_return_approx, Some(dec!(-1)));

    // Division by a zero close is undefined; the cumulative figure carries
    // forward across the gap
    assert_eq!(series[2].daily_return, None);
    assert_eq!(series[2].cum_return_approx, Some(dec!(-1)));
}

#[test]
fn empty_history_yields_an_empty_series() {
    assert!(calculate_return_series("AAPL", &[]).is_empty());
}

#[test]
fn volatility_is_the_population_standard_deviation() {
    // Returns are +10% and -10%: mean 0, variance 0.01, stdev 0.1
    let result = calculate_volatility(&prices(&[dec!(100), dec!(110), dec!(99)]));
    assert_eq!(result, Some(dec!(0.1)));
}

#[test]
fn volatility_requires_at_least_two_return_observations() {
    assert_eq!(calculate_volatility(&prices(&[])), None);
    assert_eq!(calculate_volatility(&prices(&[dec!(100)])), None);
    assert_eq!(calculate_volatility(&prices(&[dec!(100), dec!(110)])), None);
}

#[test]
fn return_series_for_unknown_security_is_not_found() {
    let service = portfolio_service(FakeStore::default());

    let err = service
        .get_return_series("SEC-MISSING", None, None)
        .unwrap_err();

    assert!(matches!(
        err,
        Error::Security(SecurityError::NotFound(_))
    ));
}

#[test]
fn service_computes_volatility_over_the_requested_window() {
    let store = FakeStore {
        securities: vec![fakes::security("SEC-AAPL", "AAPL")],
        prices: vec![
            PricePoint::new("SEC-AAPL", fakes::date(1), dec!(100)),
            PricePoint::new("SEC-AAPL", fakes::date(2), dec!(110)),
            PricePoint::new("SEC-AAPL", fakes::date(3), dec!(99)),
            // Outside the window below
            PricePoint::new("SEC-AAPL", fakes::date(10), dec!(500)),
        ],
        ..FakeStore::default()
    };
    let service = portfolio_service(store);

    let result = service
        .get_volatility("SEC-AAPL", Some(fakes::date(1)), Some(fakes::date(5)))
        .unwrap();

    assert_eq!(result, Some(dec!(0.1)));
}
