//! # Domain Types
//!
//! Core domain types shared by the usage resolver, the booking record and
//! the cost calculator.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────────┐   ┌─────────────────┐   │
//! │  │ UsageSelection  │   │ PriceCategoryRecord │   │  PricingPolicy  │   │
//! │  │  ─────────────  │   │  ─────────────────  │   │  ─────────────  │   │
//! │  │  unit_kind      │   │  name (exact match) │   │  admin_rate     │   │
//! │  │  value (base)   │   │  rate_per_unit      │   │  tax_rate       │   │
//! │  │  multiplier?    │   │  unit_kind?         │   │  (basis points) │   │
//! │  │  months?        │   └─────────────────────┘   └─────────────────┘   │
//! │  └─────────────────┘                                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    UnitKind     │   │   PeriodUnit    │   │    RateBps      │       │
//! │  │  HoursCount     │   │   Day (default) │   │  1000 = 10%     │       │
//! │  │  DaysOrWeeks..  │   │   Week          │   │  1800 = 18%     │       │
//! │  │  MonthsCount    │   └─────────────────┘   └─────────────────┘       │
//! │  │  KilometersCount│                                                    │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Base Units
//! A `UsageSelection::value` is always in the base unit of its kind: hours
//! (never minutes) and kilometers. Conversion happens once, when the
//! resolver builds its options.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;

// =============================================================================
// Rate (basis points)
// =============================================================================

/// A percentage rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1000 bps = 10% (admin margin), 1800 bps = 18% (tax on the margin)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RateBps(u32);

impl RateBps {
    /// Creates a rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        RateBps(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Zero rate.
    #[inline]
    pub const fn zero() -> Self {
        RateBps(0)
    }
}

impl Default for RateBps {
    fn default() -> Self {
        RateBps::zero()
    }
}

// =============================================================================
// Quantity
// =============================================================================

/// An exact usage amount: `numerator / denominator` base units.
///
/// Minute options convert to hours as a fraction (50 min = 5/6 h), so the
/// charge is computed as `rate × numerator / denominator` with nothing lost
/// to decimal truncation before rounding.
///
/// Text form is a plain decimal when the fraction terminates (`"1.5"`),
/// otherwise `"numerator/denominator"` (`"5/6"`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Quantity {
    numerator: Decimal,
    /// Never zero.
    denominator: u64,
}

impl Quantity {
    /// A whole (denominator 1) quantity.
    pub const fn whole(value: Decimal) -> Self {
        Quantity {
            numerator: value,
            denominator: 1,
        }
    }

    /// `numerator / denominator` reduced to lowest terms; a zero denominator
    /// yields zero.
    pub fn ratio(numerator: u64, denominator: u64) -> Self {
        if denominator == 0 {
            return Quantity::zero();
        }
        let divisor = gcd(numerator, denominator);
        Quantity {
            numerator: Decimal::from(numerator / divisor),
            denominator: denominator / divisor,
        }
    }

    pub const fn zero() -> Self {
        Quantity::whole(Decimal::ZERO)
    }

    pub fn numerator(&self) -> Decimal {
        self.numerator
    }

    pub fn denominator(&self) -> u64 {
        self.denominator
    }

    pub fn is_positive(&self) -> bool {
        self.numerator > Decimal::ZERO
    }

    /// Negative quantities become zero.
    pub fn clamp_non_negative(self) -> Self {
        if self.numerator < Decimal::ZERO {
            Quantity::zero()
        } else {
            self
        }
    }

    /// Nearest decimal, for display and labels.
    pub fn to_decimal(&self) -> Decimal {
        self.numerator
            .checked_div(Decimal::from(self.denominator))
            .unwrap_or(self.numerator)
    }

    /// `rate × self`, multiplying before dividing. `None` on overflow.
    pub fn times(&self, rate: Decimal) -> Option<Decimal> {
        rate.checked_mul(self.numerator)?
            .checked_div(Decimal::from(self.denominator))
    }

    fn terminates(&self) -> bool {
        self.denominator == 1
            || self
                .to_decimal()
                .checked_mul(Decimal::from(self.denominator))
                .is_some_and(|back| back == self.numerator)
    }
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a.max(1)
}

impl Default for Quantity {
    fn default() -> Self {
        Quantity::zero()
    }
}

impl From<Decimal> for Quantity {
    fn from(value: Decimal) -> Self {
        Quantity::whole(value)
    }
}

impl PartialEq for Quantity {
    fn eq(&self, other: &Self) -> bool {
        let left = self.numerator.checked_mul(Decimal::from(other.denominator));
        let right = other.numerator.checked_mul(Decimal::from(self.denominator));
        match (left, right) {
            (Some(left), Some(right)) => left == right,
            _ => self.to_decimal() == other.to_decimal(),
        }
    }
}

impl Eq for Quantity {}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terminates() {
            write!(f, "{}", self.to_decimal().normalize())
        } else {
            write!(f, "{}/{}", self.numerator.normalize(), self.denominator)
        }
    }
}

impl FromStr for Quantity {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let invalid = || ValidationError::InvalidFormat {
            field: "quantity".to_string(),
            reason: format!("'{}' is not a number or fraction", text),
        };

        match text.split_once('/') {
            Some((numerator, denominator)) => {
                let numerator = Decimal::from_str(numerator.trim()).map_err(|_| invalid())?;
                let denominator = denominator.trim().parse::<u64>().map_err(|_| invalid())?;
                if denominator == 0 {
                    return Err(invalid());
                }
                Ok(Quantity {
                    numerator,
                    denominator,
                })
            }
            None => Decimal::from_str(text)
                .map(Quantity::whole)
                .map_err(|_| invalid()),
        }
    }
}

impl TryFrom<String> for Quantity {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Quantity> for String {
    fn from(quantity: Quantity) -> Self {
        quantity.to_string()
    }
}

// =============================================================================
// Unit Kind
// =============================================================================

/// What a usage quantity counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum UnitKind {
    /// Hours (fractional allowed: 90 minutes = 1.5).
    HoursCount,
    /// Days or weeks of a period multiplier.
    DaysOrWeeksCount,
    /// Months of a monthly booking.
    MonthsCount,
    /// Kilometers of a one-way trip.
    KilometersCount,
}

impl UnitKind {
    /// Singular/plural unit label. Singular only when the quantity is
    /// exactly one.
    pub fn label(&self, quantity: Decimal) -> &'static str {
        let singular = quantity == Decimal::ONE;
        match (self, singular) {
            (UnitKind::HoursCount, true) => "Hour",
            (UnitKind::HoursCount, false) => "Hours",
            (UnitKind::DaysOrWeeksCount, true) => "Day",
            (UnitKind::DaysOrWeeksCount, false) => "Days",
            (UnitKind::MonthsCount, true) => "Month",
            (UnitKind::MonthsCount, false) => "Months",
            (UnitKind::KilometersCount, _) => "Km",
        }
    }

    /// Quantity plus label, e.g. `"1.5 Hours"` or `"1 Hour"`.
    pub fn describe(&self, quantity: Decimal) -> String {
        format!("{} {}", format_quantity(quantity), self.label(quantity))
    }
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitKind::HoursCount => write!(f, "hours"),
            UnitKind::DaysOrWeeksCount => write!(f, "days_or_weeks"),
            UnitKind::MonthsCount => write!(f, "months"),
            UnitKind::KilometersCount => write!(f, "kilometers"),
        }
    }
}

/// Formats a quantity for labels: trailing zeros dropped, at most two
/// decimal places (100 minutes shows as `1.67`).
pub fn format_quantity(quantity: Decimal) -> String {
    let shown = if quantity.scale() > 2 {
        quantity.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    } else {
        quantity
    };
    shown.normalize().to_string()
}

// =============================================================================
// Period Unit & Multiplier
// =============================================================================

/// The period a weekly booking repeats over. Restricted to exactly two
/// values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PeriodUnit {
    #[default]
    Day,
    Week,
}

impl PeriodUnit {
    /// Flips Day ↔ Week.
    pub fn toggled(self) -> Self {
        match self {
            PeriodUnit::Day => PeriodUnit::Week,
            PeriodUnit::Week => PeriodUnit::Day,
        }
    }

    pub fn label(&self, count: u64) -> &'static str {
        match (self, count == 1) {
            (PeriodUnit::Day, true) => "Day",
            (PeriodUnit::Day, false) => "Days",
            (PeriodUnit::Week, true) => "Week",
            (PeriodUnit::Week, false) => "Weeks",
        }
    }
}

impl fmt::Display for PeriodUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodUnit::Day => write!(f, "day"),
            PeriodUnit::Week => write!(f, "week"),
        }
    }
}

impl FromStr for PeriodUnit {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "day" | "days" => Ok(PeriodUnit::Day),
            "week" | "weeks" => Ok(PeriodUnit::Week),
            other => Err(ValidationError::InvalidFormat {
                field: "period unit".to_string(),
                reason: format!("'{}' is not one of: day, week", other),
            }),
        }
    }
}

/// How many days or weeks a weekly booking covers. Default `(1, Day)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PeriodMultiplier {
    #[ts(type = "number")]
    pub count: u64,
    pub unit: PeriodUnit,
}

impl PeriodMultiplier {
    pub const fn new(count: u64, unit: PeriodUnit) -> Self {
        PeriodMultiplier { count, unit }
    }

    pub const fn unit_kind(&self) -> UnitKind {
        UnitKind::DaysOrWeeksCount
    }

    /// e.g. `"2 Weeks"`.
    pub fn describe(&self) -> String {
        format!("{} {}", self.count, self.unit.label(self.count))
    }
}

impl Default for PeriodMultiplier {
    fn default() -> Self {
        PeriodMultiplier::new(1, PeriodUnit::Day)
    }
}

// =============================================================================
// Usage Selection
// =============================================================================

/// The canonical usage of a booking, already coerced by the booking record.
///
/// ## Invariants
/// - `value >= 0`, expressed in the base unit of `unit_kind`
/// - `multiplier` only for weekly bookings, `months` only for monthly ones
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct UsageSelection {
    pub unit_kind: UnitKind,

    #[ts(type = "string")]
    pub value: Quantity,

    pub multiplier: Option<PeriodMultiplier>,

    #[ts(type = "number | null")]
    pub months: Option<u64>,
}

impl UsageSelection {
    /// A plain selection with no multiplier or month count.
    pub fn new(unit_kind: UnitKind, value: impl Into<Quantity>) -> Self {
        UsageSelection {
            unit_kind,
            value: value.into().clamp_non_negative(),
            multiplier: None,
            months: None,
        }
    }

    /// Human summary, e.g. `"1.5 Hours × 2 Weeks"` or `"8 Hours × 3 Months"`.
    pub fn describe(&self) -> String {
        let mut text = self.unit_kind.describe(self.value.to_decimal());
        if let Some(multiplier) = &self.multiplier {
            text.push_str(&format!(" × {}", multiplier.describe()));
        }
        if let Some(months) = self.months {
            text.push_str(&format!(
                " × {}",
                UnitKind::MonthsCount.describe(Decimal::from(months))
            ));
        }
        text
    }
}

// =============================================================================
// Price Category
// =============================================================================

/// A named pricing tier (driver skill / vehicle class), fetched by a
/// collaborator and treated as read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PriceCategoryRecord {
    /// Matched case-sensitively against the booking's category label.
    pub name: String,

    /// Charge per one unit of usage.
    #[ts(type = "string")]
    pub rate_per_unit: Decimal,

    /// Unit the rate is quoted in (informational).
    #[serde(default)]
    pub unit_kind: Option<UnitKind>,
}

impl PriceCategoryRecord {
    pub fn new(name: impl Into<String>, rate_per_unit: Decimal) -> Self {
        PriceCategoryRecord {
            name: name.into(),
            rate_per_unit,
            unit_kind: None,
        }
    }
}

// =============================================================================
// Pricing Policy
// =============================================================================

/// Platform margin and tax applied on top of the driver charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PricingPolicy {
    /// Admin margin, a share of the driver charge.
    pub admin_rate: RateBps,

    /// Tax, a share of the admin charge (not of the driver charge).
    pub tax_rate: RateBps,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        PricingPolicy {
            admin_rate: RateBps::from_bps(crate::DEFAULT_ADMIN_RATE_BPS),
            tax_rate: RateBps::from_bps(crate::DEFAULT_TAX_RATE_BPS),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
