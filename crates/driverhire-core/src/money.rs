//! # Money Module
//!
//! Provides the `Money` type for the lines of a cost breakdown.
//!
//! ## Whole Currency Units
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  EVERY BREAKDOWN LINE IS A WHOLE NUMBER                                 │
//! │                                                                         │
//! │  rate 12 × usage 10     = 120      → driver  ₹120                       │
//! │  120 × 10%              = 12       → admin   ₹12                        │
//! │  12 × 18%               = 2.16     → tax     ₹2     (rounded here)      │
//! │                                                                         │
//! │  Rounding happens line by line, so the displayed lines always add up    │
//! │  to the displayed total. Nothing downstream ever re-rounds.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use driverhire_core::money::Money;
//! use driverhire_core::types::RateBps;
//!
//! let driver = Money::from_units(75);
//! let admin = driver.apply_rate(RateBps::from_bps(1000)); // 10% of 75 = 7.5
//! assert_eq!(admin.units(), 8);                            // half rounds up
//! ```

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};
use ts_rs::TS;

use crate::types::RateBps;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary amount in whole currency units (rupees, dollars, ...).
///
/// ## Design Decisions
/// - **i64 (signed)**: Same width as the rest of the arithmetic; breakdown
///   lines are never negative, but intermediate sums may be compared freely
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Saturating**: Absurd rates saturate at `i64::MAX` instead of panicking
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole currency units.
    ///
    /// ## Example
    /// ```rust
    /// use driverhire_core::money::Money;
    ///
    /// let total = Money::from_units(134);
    /// assert_eq!(total.units(), 134);
    /// ```
    #[inline]
    pub const fn from_units(units: i64) -> Self {
        Money(units)
    }

    /// Rounds a decimal amount half-up to whole units.
    ///
    /// ## Example
    /// ```rust
    /// use driverhire_core::money::Money;
    /// use rust_decimal_macros::dec;
    ///
    /// assert_eq!(Money::round_half_up(dec!(2.16)).units(), 2);
    /// assert_eq!(Money::round_half_up(dec!(7.5)).units(), 8);
    /// ```
    pub fn round_half_up(amount: Decimal) -> Self {
        let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        match rounded.to_i64() {
            Some(units) => Money(units),
            None if rounded.is_sign_negative() => Money(i64::MIN),
            None => Money(i64::MAX),
        }
    }

    /// Returns the value in whole currency units.
    #[inline]
    pub const fn units(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    ///
    /// ## Example
    /// ```rust
    /// use driverhire_core::money::Money;
    ///
    /// let zero = Money::zero();
    /// assert_eq!(zero.units(), 0);
    /// assert!(zero.is_zero());
    /// ```
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Applies a basis-point rate and rounds half-up to whole units.
    ///
    /// ## Implementation
    /// Integer math on i128: `(amount * bps + 5000) / 10000`.
    /// The +5000 is the half (5000/10000 = 0.5). Negative amounts mirror
    /// the positive side so -7.5 becomes -8.
    ///
    /// ## Example
    /// ```rust
    /// use driverhire_core::money::Money;
    /// use driverhire_core::types::RateBps;
    ///
    /// let admin = Money::from_units(12);
    /// let tax = admin.apply_rate(RateBps::from_bps(1800)); // 18% of 12 = 2.16
    /// assert_eq!(tax.units(), 2);
    /// ```
    pub fn apply_rate(&self, rate: RateBps) -> Money {
        let product = self.0 as i128 * rate.bps() as i128;
        let rounded = if product < 0 {
            -((-product + 5000) / 10000)
        } else {
            (product + 5000) / 10000
        };
        Money(rounded.clamp(i64::MIN as i128, i64::MAX as i128) as i64)
    }

    /// Formats with a currency symbol in front, e.g. `₹134`.
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}{}{}", sign, symbol, self.0.unsigned_abs())
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Plain number, no currency symbol. The display layer owns the symbol.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Saturating addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
