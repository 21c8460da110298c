// Tests for realized P&L over trade histories

use rust_decimal_macros::dec;

use super::fakes::{datetime, trade};
use crate::portfolio::pnl::calculate_realized_pnl;
use crate::trades::OrderSide;

#[test]
fn empty_history_has_no_pnl() {
    let result = calculate_realized_pnl(&[]);
    assert_eq!(result.realized_pl, dec!(0));
    assert_eq!(result.invested_capital, dec!(0));
}

#[test]
fn round_trip_realizes_the_spread_over_average_cost() {
    let trades = vec![
        trade("ACC-1", "SEC-A", OrderSide::Buy, dec!(10), dec!(100), datetime(1)),
        trade("ACC-1", "SEC-A", OrderSide::Sell, dec!(10), dec!(110), datetime(2)),
    ];

    let result = calculate_realized_pnl(&trades);

    assert_eq!(result.realized_pl, dec!(100));
    assert_eq!(result.invested_capital, dec!(1000));
}

#[test]
fn sells_price_against_the_average_of_all_buys() {
    // Two buys at different prices average to 110
    let trades = vec![
        trade("ACC-1", "SEC-A", OrderSide::Buy, dec!(10), dec!(100), datetime(1)),
        trade("ACC-1", "SEC-A", OrderSide::Buy, dec!(10), dec!(120), datetime(2)),
        trade("ACC-1", "SEC-A", OrderSide::Sell, dec!(5), dec!(130), datetime(3)),
    ];

    let result = calculate_realized_pnl(&trades);

    // 5 * (130 - 110)
    assert_eq!(result.realized_pl, dec!(100));
    assert_eq!(result.invested_capital, dec!(2200));
}

#[test]
fn trade_order_does_not_matter() {
    // The sell is dated before the buy it is priced against; the whole
    // history contributes to the average regardless of chronology
    let trades = vec![
        trade("ACC-1", "SEC-A", OrderSide::Sell, dec!(5), dec!(120), datetime(1)),
        trade("ACC-1", "SEC-A", OrderSide::Buy, dec!(10), dec!(100), datetime(5)),
    ];

    let result = calculate_realized_pnl(&trades);

    // 5 * (120 - 100)
    assert_eq!(result.realized_pl, dec!(100));
    assert_eq!(result.invested_capital, dec!(1000));
}

#[test]
fn sells_with_no_buys_count_full_proceeds() {
    let trades = vec![trade(
        "ACC-1",
        "SEC-A",
        OrderSide::Sell,
        dec!(5),
        dec!(120),
        datetime(1),
    )];

    let result = calculate_realized_pnl(&trades);

    assert_eq!(result.realized_pl, dec!(600));
    assert_eq!(result.invested_capital, dec!(0));
}

#[test]
fn securities_are_matched_independently_and_summed() {
    let trades = vec![
        trade("ACC-1", "SEC-A", OrderSide::Buy, dec!(10), dec!(100), datetime(1)),
        trade("ACC-1", "SEC-A", OrderSide::Sell, dec!(10), dec!(110), datetime(2)),
        trade("ACC-1", "SEC-B", OrderSide::Buy, dec!(4), dec!(50), datetime(1)),
        trade("ACC-1", "SEC-B", OrderSide::Sell, dec!(4), dec!(40), datetime(2)),
    ];

    let result = calculate_realized_pnl(&trades);

    // +100 on SEC-A, -40 on SEC-B
    assert_eq!(result.realized_pl, dec!(60));
    assert_eq!(result.invested_capital, dec!(1200));
}
