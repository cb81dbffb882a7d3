//! # Validation Module
//!
//! Numeric coercion and boundary validation for booking input.
//!
//! ## Two Kinds of Checks
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Lenient vs. Strict                                 │
//! │                                                                         │
//! │  Lenient (pricing view)                                                │
//! │  ├── parse_usage("abc") → 0                                            │
//! │  └── never fails, the price view always renders                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Strict (submission, config loading)                                   │
//! │  ├── parse_usage_checked("abc") → Err(InvalidFormat)                   │
//! │  ├── validate_month_count("0")  → Err(MustBePositive)                  │
//! │  └── validate_rate(-1)          → Err(MustNotBeNegative)               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use driverhire_core::validation::{parse_usage, validate_month_count};
//! use driverhire_core::Quantity;
//!
//! assert_eq!(parse_usage("not a number"), Quantity::zero());
//! assert_eq!(validate_month_count("3").unwrap(), 3);
//! ```

use rust_decimal::Decimal;

use crate::error::ValidationError;
use crate::types::{PricingPolicy, Quantity};
use crate::MAX_CATEGORY_NAME_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Usage Parsing
// =============================================================================

/// Parses usage text strictly.
///
/// ## Rules
/// - Surrounding whitespace is ignored
/// - Plain decimal notation (`"1.5"`, `"10"`, `"-2"`) or an exact fraction
///   with a whole denominator (`"5/6"`, as listed for 50-minute options)
/// - Trailing units or other text are rejected (`"12km"` is invalid)
pub fn parse_usage_checked(raw: &str) -> ValidationResult<Quantity> {
    let text = raw.trim();

    if text.is_empty() {
        return Err(ValidationError::Required {
            field: "usage".to_string(),
        });
    }

    text.parse::<Quantity>().map_err(|_| ValidationError::InvalidFormat {
        field: "usage".to_string(),
        reason: format!("'{}' is not a number", text),
    })
}

/// Parses usage text, degrading to zero.
///
/// Empty or non-numeric text becomes `0` so the pricing view never breaks
/// on bad input. Negative values are returned as-is; the calculator
/// treats them like zero.
///
/// ## Example
/// ```rust
/// use driverhire_core::validation::parse_usage;
/// use driverhire_core::Quantity;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(parse_usage("1.5"), Quantity::whole(dec!(1.5)));
/// assert_eq!(parse_usage("5/6"), Quantity::ratio(50, 60));
/// assert_eq!(parse_usage(""), Quantity::zero());
/// assert_eq!(parse_usage("ten"), Quantity::zero());
/// ```
pub fn parse_usage(raw: &str) -> Quantity {
    parse_usage_checked(raw).unwrap_or_default()
}

/// A parsed usage value plus whether the text actually was a number.
///
/// `value` is what pricing uses. `is_valid` tells "typed 0" apart from
/// "typed nothing/garbage" for callers that want stricter behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsageValue {
    pub value: Quantity,
    pub is_valid: bool,
}

impl UsageValue {
    pub fn parse(raw: &str) -> Self {
        match parse_usage_checked(raw) {
            Ok(value) => UsageValue {
                value,
                is_valid: true,
            },
            Err(_) => UsageValue {
                value: Quantity::zero(),
                is_valid: false,
            },
        }
    }
}

// =============================================================================
// Free-Entry Counts
// =============================================================================

fn validate_count(raw: &str, field: &str) -> ValidationResult<u64> {
    let text = raw.trim();

    if text.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if let Some(digits) = text.strip_prefix('-') {
        if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::MustBePositive {
                field: field.to_string(),
            });
        }
    }

    let count = text
        .parse::<u64>()
        .map_err(|_| ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: format!("'{}' is not a whole number", text),
        })?;

    if count == 0 {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }

    Ok(count)
}

/// Validates the free-entry month count of a monthly booking.
///
/// ## Rules
/// - Whole number ≥ 1
/// - No upper bound beyond `u64`
pub fn validate_month_count(raw: &str) -> ValidationResult<u64> {
    validate_count(raw, "month count")
}

/// Validates the free-entry day/week count of a weekly booking.
///
/// ## Rules
/// - Whole number ≥ 1
/// - No upper bound beyond `u64`
pub fn validate_period_count(raw: &str) -> ValidationResult<u64> {
    validate_count(raw, "period count")
}

// =============================================================================
// Reference Data Validators
// =============================================================================

/// Validates a price-category rate.
///
/// ## Rules
/// - Must be non-negative (>= 0); zero is a free category
pub fn validate_rate(rate: Decimal) -> ValidationResult<()> {
    if rate.is_sign_negative() && !rate.is_zero() {
        return Err(ValidationError::MustNotBeNegative {
            field: "rate per unit".to_string(),
        });
    }

    Ok(())
}

/// Validates a price-category name.
///
/// ## Rules
/// - Must not be blank
/// - At most 100 characters
///
/// The name itself is matched exactly (no trimming) at lookup time.
pub fn validate_category_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "category".to_string(),
        });
    }

    if name.chars().count() > MAX_CATEGORY_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "category".to_string(),
            max: MAX_CATEGORY_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates admin and tax rates in basis points.
///
/// ## Rules
/// - Each between 0 and 10000 (0% to 100%)
pub fn validate_policy(policy: &PricingPolicy) -> ValidationResult<()> {
    for (field, bps) in [
        ("admin rate", policy.admin_rate.bps()),
        ("tax rate", policy.tax_rate.bps()),
    ] {
        if bps > 10000 {
            return Err(ValidationError::OutOfRange {
                field: field.to_string(),
                min: 0,
                max: 10000,
            });
        }
    }

    Ok(())
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
    fn test_parse_usage() {
        assert_eq!(parse_usage("10"), Quantity::whole(dec!(10)));
        assert_eq!(parse_usage(" 1.5 "), Quantity::whole(dec!(1.5)));
        assert_eq!(parse_usage("-2"), Quantity::whole(dec!(-2)));
        assert_eq!(parse_usage("11/6"), Quantity::ratio(110, 60));

        // Silent degradation
        assert_eq!(parse_usage(""), Quantity::zero());
        assert_eq!(parse_usage("abc"), Quantity::zero());
        assert_eq!(parse_usage("12km"), Quantity::zero());
        assert_eq!(parse_usage("1/0"), Quantity::zero());
    }

    #[test]
    fn test_parse_usage_checked() {
        assert!(matches!(
            parse_usage_checked(""),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            parse_usage_checked("abc"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert_eq!(parse_usage_checked("0").unwrap(), Quantity::zero());
    }

    #[test]
    fn test_usage_value_validity_flag() {
        let typed_zero = UsageValue::parse("0");
        assert_eq!(typed_zero.value, Quantity::zero());
        assert!(typed_zero.is_valid);

        let garbage = UsageValue::parse("ten");
        assert_eq!(garbage.value, Quantity::zero());
        assert!(!garbage.is_valid);
    }

    #[test]
    fn test_validate_month_count() {
        assert_eq!(validate_month_count("1").unwrap(), 1);
        assert_eq!(validate_month_count(" 36 ").unwrap(), 36);
        assert_eq!(
            validate_month_count("18446744073709551615").unwrap(),
            u64::MAX
        );

        assert!(matches!(
            validate_month_count("0"),
            Err(ValidationError::MustBePositive { .. })
        ));
        assert!(matches!(
            validate_month_count("-3"),
            Err(ValidationError::MustBePositive { .. })
        ));
        assert!(matches!(
            validate_month_count("two"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            validate_month_count(""),
            Err(ValidationError::Required { .. })
        ));
    }

    #[test]
    fn test_validate_period_count() {
        assert_eq!(validate_period_count("2").unwrap(), 2);
        assert!(validate_period_count("1.5").is_err());
    }

    #[test]
    fn test_validate_rate() {
        assert!(validate_rate(dec!(0)).is_ok());
        assert!(validate_rate(dec!(12.5)).is_ok());
        assert!(validate_rate(dec!(-1)).is_err());
    }

    #[test]
    fn test_validate_category_name() {
        assert!(validate_category_name("Premium").is_ok());
        assert!(validate_category_name("").is_err());
        assert!(validate_category_name("   ").is_err());
        assert!(validate_category_name(&"A".repeat(101)).is_err());
    }

    #[test]
    fn test_validate_policy() {
        assert!(validate_policy(&PricingPolicy::default()).is_ok());

        let policy = PricingPolicy {
            admin_rate: RateBps::from_bps(10001),
            tax_rate: RateBps::from_bps(1800),
        };
        assert!(validate_policy(&policy).is_err());
    }
}
