//! Fee-aware profit calculation

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::config::FeeSchedule;

/// Breakdown of a buy-here/sell-there evaluation at given fee rates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfitBreakdown {
    pub total_buy_cost: Decimal,
    pub net_sell_proceeds: Decimal,
    pub profit: Decimal,
    pub margin_percent: Decimal,
}

/// Net profit per ticket for buying at `buy_price` and reselling at
/// `sell_price` under the given fee schedule. Buyer fees inflate the
/// cost, seller fees shave the proceeds. Pure; callers decide what to
/// do with non-positive results.
pub fn compute_profit(
    buy_price: Decimal,
    sell_price: Decimal,
    fees: &FeeSchedule,
) -> ProfitBreakdown {
    let total_buy_cost = buy_price * (dec!(1) + fees.buyer_fee_rate);
    let net_sell_proceeds = sell_price * (dec!(1) - fees.seller_fee_rate);
    let profit = net_sell_proceeds - total_buy_cost;

    let margin_percent = if profit > dec!(0) && total_buy_cost > dec!(0) {
        (profit / total_buy_cost) * dec!(100)
    } else {
        dec!(0)
    };

    ProfitBreakdown {
        total_buy_cost,
        net_sell_proceeds,
        profit,
        margin_percent,
    }
}

/// Single-source estimate when no cross-platform match exists: assume
/// resale at `multiplier` times the observed floor price. No fee
/// schedule applies; the figure is an estimate, not a confirmed spread.
pub fn estimate_profit(min_price: Decimal, multiplier: Decimal) -> ProfitBreakdown {
    let sell_price = min_price * multiplier;
    let profit = sell_price - min_price;

    let margin_percent = if profit > dec!(0) && min_price > dec!(0) {
        (profit / min_price) * dec!(100)
    } else {
        dec!(0)
    };

    ProfitBreakdown {
        total_buy_cost: min_price,
        net_sell_proceeds: sell_price,
        profit,
        margin_percent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn fees(buyer: Decimal, seller: Decimal) -> FeeSchedule {
        FeeSchedule {
            buyer_fee_rate: buyer,
            seller_fee_rate: seller,
        }
    }

    #[test]
    fn profitable_spread_at_default_rates() {
        let breakdown = compute_profit(dec!(100), dec!(150), &FeeSchedule::default());
        assert_eq!(breakdown.total_buy_cost, dec!(118.00));
        assert_eq!(breakdown.net_sell_proceeds, dec!(127.50));
        assert_eq!(breakdown.profit, dec!(9.50));
        assert_eq!(breakdown.margin_percent.round_dp(2), dec!(8.05));
    }

    #[test]
    fn thin_spread_is_eaten_by_fees() {
        let breakdown = compute_profit(dec!(100), dec!(110), &FeeSchedule::default());
        assert_eq!(breakdown.net_sell_proceeds, dec!(93.50));
        assert_eq!(breakdown.profit, dec!(-24.50));
        assert_eq!(breakdown.margin_percent, dec!(0));
    }

    #[test]
    fn zero_fee_schedule_is_raw_spread() {
        let breakdown = compute_profit(dec!(80), dec!(95), &fees(dec!(0), dec!(0)));
        assert_eq!(breakdown.profit, dec!(15));
        assert_eq!(breakdown.margin_percent, dec!(18.75));
    }

    #[test]
    fn estimate_applies_multiplier_without_fees() {
        let breakdown = estimate_profit(dec!(50), dec!(1.2));
        assert_eq!(breakdown.net_sell_proceeds, dec!(60.00));
        assert_eq!(breakdown.profit, dec!(10.00));
        assert_eq!(breakdown.margin_percent, dec!(20.00));
    }

    #[test]
    fn estimate_of_zero_price_has_zero_profit() {
        let breakdown = estimate_profit(dec!(0), dec!(1.2));
        assert_eq!(breakdown.profit, dec!(0));
        assert_eq!(breakdown.margin_percent, dec!(0));
    }

    proptest! {
        #[test]
        fn raising_sell_price_never_lowers_profit(
            buy in 0u32..10_000,
            sell in 0u32..10_000,
            bump in 0u32..5_000,
        ) {
            let schedule = FeeSchedule::default();
            let base = compute_profit(Decimal::from(buy), Decimal::from(sell), &schedule);
            let bumped = compute_profit(Decimal::from(buy), Decimal::from(sell + bump), &schedule);
            prop_assert!(bumped.profit >= base.profit);
        }

        #[test]
        fn raising_buyer_fee_never_raises_profit(
            buy in 1u32..10_000,
            sell in 1u32..10_000,
            fee_pct in 0u32..50,
            bump_pct in 0u32..49,
        ) {
            let low = fees(Decimal::from(fee_pct) / dec!(100), dec!(0.15));
            let high = fees(Decimal::from(fee_pct + bump_pct) / dec!(100), dec!(0.15));
            let base = compute_profit(Decimal::from(buy), Decimal::from(sell), &low);
            let raised = compute_profit(Decimal::from(buy), Decimal::from(sell), &high);
            prop_assert!(raised.profit <= base.profit);
        }
    }
}
