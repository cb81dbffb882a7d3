//! # Cost Breakdown Calculator
//!
//! Derives the four-line price of a booking from its usage and the rate of
//! its price category.
//!
//! ## Derivation Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  driver = round(rate × usage)      ← rate × numerator, then ÷ denom.    │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  admin  = round(driver × 10%)      ← from the ROUNDED driver charge     │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  tax    = round(admin × 18%)       ← from the ROUNDED admin charge      │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  total  = driver + admin + tax     ← plain sum, never re-rounded        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Missing Categories
//! The calculator always receives a resolved [`PriceCategoryRecord`]. When
//! [`PriceTable::find`] returns `None`, callers skip pricing entirely and
//! show no breakdown rather than a zeroed one.
//!
//! ## Usage
//! ```rust
//! use driverhire_core::pricing::calculate;
//! use rust_decimal_macros::dec;
//!
//! let breakdown = calculate(dec!(10), dec!(12));
//! assert_eq!(breakdown.total.units(), 134);
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{PriceCategoryRecord, PricingPolicy, Quantity};

// =============================================================================
// Cost Breakdown
// =============================================================================

/// The itemized price shown to the customer.
///
/// ## Invariants
/// - Every line is ≥ 0
/// - `total == driver_charge + admin_charge + tax_charge`, by construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    pub driver_charge: Money,
    pub admin_charge: Money,
    pub tax_charge: Money,
    pub total: Money,
}

impl CostBreakdown {
    /// All four lines zero.
    pub const fn zero() -> Self {
        CostBreakdown {
            driver_charge: Money::zero(),
            admin_charge: Money::zero(),
            tax_charge: Money::zero(),
            total: Money::zero(),
        }
    }

    /// Builds the breakdown from a rounded driver charge.
    fn from_driver_charge(driver_charge: Money, policy: &PricingPolicy) -> Self {
        let admin_charge = driver_charge.apply_rate(policy.admin_rate);
        let tax_charge = admin_charge.apply_rate(policy.tax_rate);

        CostBreakdown {
            driver_charge,
            admin_charge,
            tax_charge,
            total: driver_charge + admin_charge + tax_charge,
        }
    }

    /// `(label, amount)` pairs in display order.
    pub fn lines(&self) -> [(&'static str, Money); 4] {
        [
            ("Driver charge", self.driver_charge),
            ("Admin charge", self.admin_charge),
            ("Tax", self.tax_charge),
            ("Total", self.total),
        ]
    }
}

// =============================================================================
// Calculation
// =============================================================================

/// Calculates a breakdown with the default 10% admin / 18% tax policy.
pub fn calculate(usage: impl Into<Quantity>, rate_per_unit: Decimal) -> CostBreakdown {
    calculate_with_policy(usage, rate_per_unit, &PricingPolicy::default())
}

/// Calculates a breakdown with an explicit policy.
///
/// ## Degenerate Input
/// A usage or rate of zero or below prices to all-zero lines. That is a
/// valid result, not an error.
///
/// ## Fractional Usage
/// A [`Quantity`] such as 5/6 hour is priced as `rate × 5 ÷ 6`, so
/// `round(3 × 5/6) = round(2.5) = 3`.
///
/// ## Example
/// ```rust
/// use driverhire_core::pricing::calculate_with_policy;
/// use driverhire_core::PricingPolicy;
/// use rust_decimal_macros::dec;
///
/// let breakdown = calculate_with_policy(dec!(1.5), dec!(50), &PricingPolicy::default());
/// assert_eq!(breakdown.driver_charge.units(), 75);
/// assert_eq!(breakdown.admin_charge.units(), 8);
/// assert_eq!(breakdown.tax_charge.units(), 1);
/// assert_eq!(breakdown.total.units(), 84);
/// ```
pub fn calculate_with_policy(
    usage: impl Into<Quantity>,
    rate_per_unit: Decimal,
    policy: &PricingPolicy,
) -> CostBreakdown {
    let usage = usage.into();
    if !usage.is_positive() || rate_per_unit <= Decimal::ZERO {
        return CostBreakdown::zero();
    }

    // Both factors are positive, so overflow can only go upwards.
    let base = usage.times(rate_per_unit).unwrap_or(Decimal::MAX);
    CostBreakdown::from_driver_charge(Money::round_half_up(base), policy)
}

/// Prices a usage against an already-matched category record.
pub fn quote(
    usage: Quantity,
    category: &PriceCategoryRecord,
    policy: &PricingPolicy,
) -> CostBreakdown {
    calculate_with_policy(usage, category.rate_per_unit, policy)
}

// =============================================================================
// Price Table
// =============================================================================

/// Price categories as fetched for one view. Read-only once built.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceTable {
    records: Vec<PriceCategoryRecord>,
}

impl PriceTable {
    pub fn new(records: Vec<PriceCategoryRecord>) -> Self {
        PriceTable { records }
    }

    /// First record whose name equals `name` exactly (case-sensitive, no
    /// trimming).
    pub fn find(&self, name: &str) -> Option<&PriceCategoryRecord> {
        self.records.iter().find(|record| record.name == name)
    }

    pub fn records(&self) -> &[PriceCategoryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<PriceCategoryRecord> for PriceTable {
    fn from_iter<I: IntoIterator<Item = PriceCategoryRecord>>(iter: I) -> Self {
        PriceTable::new(iter.into_iter().collect())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RateBps;
    use rust_decimal_macros::dec;

    #[test]
    fn test_distance_scenario() {
        // 10 km at 12 per km
        let breakdown = calculate(dec!(10), dec!(12));
        assert_eq!(breakdown.driver_charge.units(), 120);
        assert_eq!(breakdown.admin_charge.units(), 12);
        assert_eq!(breakdown.tax_charge.units(), 2); // 2.16
        assert_eq!(breakdown.total.units(), 134);
    }

    #[test]
    fn test_weekly_ninety_minute_scenario() {
        // 90 minutes = 1.5 hours at 50 per hour
        let breakdown = calculate(dec!(90) / dec!(60), dec!(50));
        assert_eq!(breakdown.driver_charge.units(), 75);
        assert_eq!(breakdown.admin_charge.units(), 8); // 7.5 rounds up
        assert_eq!(breakdown.tax_charge.units(), 1); // 1.44
        assert_eq!(breakdown.total.units(), 84);
    }

    #[test]
    fn test_zero_usage_is_all_zero() {
        assert_eq!(calculate(Decimal::ZERO, dec!(12)), CostBreakdown::zero());
    }

    #[test]
    fn test_negative_usage_is_all_zero() {
        assert_eq!(calculate(dec!(-4), dec!(12)), CostBreakdown::zero());
    }

    #[test]
    fn test_zero_rate_is_all_zero() {
        assert_eq!(calculate(dec!(4), Decimal::ZERO), CostBreakdown::zero());
    }

    #[test]
    fn test_driver_charge_rounds_half_up() {
        // 2.5 × 1 = 2.5 → 3
        let breakdown = calculate(dec!(2.5), dec!(1));
        assert_eq!(breakdown.driver_charge.units(), 3);
        // 0.4 → 0, then everything else follows from zero
        let breakdown = calculate(dec!(0.4), dec!(1));
        assert_eq!(breakdown, CostBreakdown::zero());
    }

    #[test]
    fn test_total_sums_rounded_lines() {
        // Unrounded: 25 + 2.5 + 0.45 = 27.95 → 28.
        // Line by line: 25 + 3 + round(0.54) = 25 + 3 + 1 = 29.
        let breakdown = calculate(dec!(1), dec!(25));
        assert_eq!(breakdown.admin_charge.units(), 3);
        assert_eq!(breakdown.tax_charge.units(), 1);
        assert_eq!(breakdown.total.units(), 29);
        assert_eq!(
            breakdown.total,
            breakdown.driver_charge + breakdown.admin_charge + breakdown.tax_charge
        );
    }

    #[test]
    fn test_custom_policy() {
        let policy = PricingPolicy {
            admin_rate: RateBps::from_bps(2000),
            tax_rate: RateBps::zero(),
        };
        let breakdown = calculate_with_policy(dec!(10), dec!(10), &policy);
        assert_eq!(breakdown.admin_charge.units(), 20);
        assert_eq!(breakdown.tax_charge.units(), 0);
        assert_eq!(breakdown.total.units(), 120);
    }

    #[test]
    fn test_fractional_hours_round_from_exact_product() {
        // 50 and 110 minutes at 3 per hour: 2.5 and 5.5 exactly
        assert_eq!(calculate(Quantity::ratio(50, 60), dec!(3)).driver_charge.units(), 3);
        assert_eq!(calculate(Quantity::ratio(110, 60), dec!(3)).driver_charge.units(), 6);
        assert_eq!(calculate(Quantity::ratio(70, 60), dec!(3)).driver_charge.units(), 4); // 3.5
        assert_eq!(calculate(Quantity::ratio(10, 60), dec!(3)).driver_charge.units(), 1); // 0.5
    }

    #[test]
    fn test_overflow_saturates() {
        let breakdown = calculate(Decimal::MAX, Decimal::MAX);
        assert_eq!(breakdown.driver_charge.units(), i64::MAX);
        assert_eq!(breakdown.total.units(), i64::MAX);
    }

    #[test]
    fn test_price_table_exact_match() {
        let table: PriceTable = vec![
            PriceCategoryRecord::new("Standard", dec!(12)),
            PriceCategoryRecord::new("Premium", dec!(50)),
        ]
        .into_iter()
        .collect();

        assert_eq!(table.find("Premium").map(|r| r.rate_per_unit), Some(dec!(50)));
        assert!(table.find("premium").is_none());
        assert!(table.find("Premium ").is_none());
        assert!(table.find("").is_none());
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_quote_uses_record_rate() {
        let record = PriceCategoryRecord::new("Standard", dec!(12));
        let breakdown = quote(Quantity::whole(dec!(10)), &record, &PricingPolicy::default());
        assert_eq!(breakdown.total.units(), 134);
    }

    #[test]
    fn test_lines_order() {
        let labels: Vec<&str> = calculate(dec!(1), dec!(1))
            .lines()
            .iter()
            .map(|(label, _)| *label)
            .collect();
        assert_eq!(labels, vec!["Driver charge", "Admin charge", "Tax", "Total"]);
    }

    #[test]
    fn test_breakdown_serializes_camel_case() {
        let json = serde_json::to_value(calculate(dec!(10), dec!(12))).unwrap();
        assert_eq!(json["driverCharge"], 120);
        assert_eq!(json["adminCharge"], 12);
        assert_eq!(json["taxCharge"], 2);
        assert_eq!(json["total"], 134);
    }
}
