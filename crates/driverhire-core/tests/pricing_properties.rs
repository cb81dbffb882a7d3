//! Property tests for the usage resolver and the cost calculator.

use driverhire_core::pricing::{calculate, calculate_with_policy, CostBreakdown};
use driverhire_core::usage::UsageSelector;
use driverhire_core::{
    BookingDraft, Money, PriceCategoryRecord, PriceTable, PricingPolicy, Quantity, RateBps, UnitKind,
};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Usage with up to two decimal places, 0.00 ..= 10000.00.
fn usage_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..=1_000_000).prop_map(|hundredths| Decimal::new(hundredths, 2))
}

/// Rate with up to two decimal places, 0.00 ..= 5000.00.
fn rate_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..=500_000).prop_map(|hundredths| Decimal::new(hundredths, 2))
}

proptest! {
    #[test]
    fn test_hourly_emits_chosen_hour(hour in 1u32..=12) {
        let mut hourly = UsageSelector::hourly();
        let option = hourly.options()[(hour - 1) as usize].clone();
        prop_assert_eq!(option.value, Quantity::whole(Decimal::from(hour)));

        let input = hourly.select(&option.raw());
        prop_assert_eq!(input.unit_kind, UnitKind::HoursCount);
        prop_assert_eq!(input.selected, Some(hour.to_string()));
    }

    #[test]
    fn test_weekly_minute_option_prices_exactly(minutes in 1u32..=1440, rate in 1u64..=5000) {
        let mut weekly = UsageSelector::weekly_in_minutes(&[minutes]);
        prop_assert_eq!(weekly.unit_kind(), UnitKind::HoursCount);

        let raw = weekly.options()[0].raw();
        let mut draft = BookingDraft::new();
        draft.apply_usage(weekly.select(&raw));
        draft.set_category("Std");

        let selection = draft.usage_selection();
        prop_assert_eq!(
            selection.map(|s| s.value),
            Some(Quantity::ratio(u64::from(minutes), 60))
        );

        let table = PriceTable::new(vec![PriceCategoryRecord::new("Std", Decimal::from(rate))]);
        let breakdown = draft.quote(&table, &PricingPolicy::default());

        // round(rate × minutes / 60), half-up, in integers
        let expected = ((rate * u64::from(minutes) + 30) / 60) as i64;
        prop_assert_eq!(breakdown.map(|b| b.driver_charge.units()), Some(expected));
    }

    #[test]
    fn test_driver_charge_is_rounded_product(usage in usage_strategy(), rate in rate_strategy()) {
        let breakdown = calculate(usage, rate);
        prop_assert_eq!(breakdown.driver_charge, Money::round_half_up(rate * usage));
    }

    #[test]
    fn test_total_is_sum_of_lines(usage in usage_strategy(), rate in rate_strategy()) {
        let breakdown = calculate(usage, rate);
        prop_assert_eq!(
            breakdown.total.units(),
            breakdown.driver_charge.units()
                + breakdown.admin_charge.units()
                + breakdown.tax_charge.units()
        );
    }

    #[test]
    fn test_lines_are_never_negative(usage in -1000i64..=1000, rate in rate_strategy()) {
        let breakdown = calculate(Decimal::from(usage), rate);
        for (_, amount) in breakdown.lines() {
            prop_assert!(amount.units() >= 0);
        }
    }

    #[test]
    fn test_calculation_is_idempotent(usage in usage_strategy(), rate in rate_strategy()) {
        prop_assert_eq!(calculate(usage, rate), calculate(usage, rate));
    }

    #[test]
    fn test_zero_usage_is_all_zero(rate in rate_strategy(), admin in 0u32..=10000, tax in 0u32..=10000) {
        let policy = PricingPolicy {
            admin_rate: RateBps::from_bps(admin),
            tax_rate: RateBps::from_bps(tax),
        };
        prop_assert_eq!(
            calculate_with_policy(Decimal::ZERO, rate, &policy),
            CostBreakdown::zero()
        );
    }
}

#[test]
fn test_distance_end_to_end() {
    let breakdown = calculate(dec!(10), dec!(12));
    assert_eq!(
        (
            breakdown.driver_charge.units(),
            breakdown.admin_charge.units(),
            breakdown.tax_charge.units(),
            breakdown.total.units()
        ),
        (120, 12, 2, 134)
    );
}

#[test]
fn test_weekly_ninety_minutes_end_to_end() {
    let weekly = UsageSelector::weekly_in_minutes(&[60, 90, 120]);
    let labels: Vec<&str> = weekly.options().iter().map(|o| o.label.as_str()).collect();
    assert_eq!(labels, vec!["1 Hour", "1.5 Hours", "2 Hours"]);

    let breakdown = calculate(weekly.options()[1].value, dec!(50));
    assert_eq!(
        (
            breakdown.driver_charge.units(),
            breakdown.admin_charge.units(),
            breakdown.tax_charge.units(),
            breakdown.total.units()
        ),
        (75, 8, 1, 84)
    );
}
