//! `quote` command: drive a booking form and price the result.
//!
//! ## Flow
//! ```text
//! args ──► UsageSelector edits ──► BookingDraft.apply_usage()
//!                                        │
//!                         set_category(--category)
//!                                        │
//!               ┌────────────────────────┴───────────────────────┐
//!               ▼ (default)                                      ▼ (--strict)
//!        draft.quote() ─ None ─► PRICING_UNAVAILABLE      draft.checked_quote()
//!               │ Some                                           │
//!               └──────────────────► QuoteReport ◄───────────────┘
//! ```

use std::fmt::Write;

use driverhire_core::validation::UsageValue;
use driverhire_core::{
    BookingDraft, CostBreakdown, PriceCategoryRecord, UsageChoice, UsageInput, UsageSelection,
};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::cli::QuoteArgs;
use crate::commands::build_selector;
use crate::config::QuoteConfig;
use crate::error::AppError;

/// Everything shown for a priced booking.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteReport {
    pub category: String,
    pub rate_per_unit: Decimal,
    pub usage: UsageSelection,
    pub breakdown: CostBreakdown,
}

impl QuoteReport {
    fn new(record: &PriceCategoryRecord, usage: UsageSelection, breakdown: CostBreakdown) -> Self {
        QuoteReport {
            category: record.name.clone(),
            rate_per_unit: record.rate_per_unit,
            usage,
            breakdown,
        }
    }

    /// Text rendering with the configured currency symbol.
    pub fn render(&self, config: &QuoteConfig) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{:<16}{} ({} per unit)",
            "Category",
            self.category,
            config.format_rate(self.rate_per_unit)
        );
        let _ = writeln!(out, "{:<16}{}", "Usage", self.usage.describe());
        for (label, amount) in self.breakdown.lines() {
            let _ = writeln!(out, "{:<16}{}", label, config.format_currency(amount));
        }
        out
    }
}

/// Builds the draft exactly as the booking form would.
pub fn build_draft(args: &QuoteArgs, config: &QuoteConfig) -> BookingDraft {
    let mut selector = build_selector(args.mode, &args.minutes, config);
    let mut draft = BookingDraft::new();

    if let Some(option) = args.option.as_deref() {
        if !selector.options().iter().any(|o| o.raw() == option) {
            warn!(option, "Option is not one the form offers, passing it through");
        }
        draft.apply_usage(selector.select(option));
    }
    if let Some(custom) = args.custom.as_deref() {
        draft.apply_usage(selector.set_custom(custom));
    }
    if let Some(months) = args.months.as_deref() {
        draft.apply_usage(selector.set_month_count(months));
    }
    if let Some(count) = args.period_count.as_deref() {
        draft.apply_usage(selector.set_period_count(count));
    }
    if let Some(unit) = args.period {
        draft.apply_usage(selector.set_period_unit(unit));
    }

    draft.apply_usage(selector.emit());
    draft.set_category(args.category.as_str());
    debug!(usage = ?draft.usage, category = %args.category, "Booking draft built");
    draft
}

/// Prices the booking described by `args`.
pub fn price(args: &QuoteArgs, config: &QuoteConfig) -> Result<QuoteReport, AppError> {
    let draft = build_draft(args, config);
    let choice = draft.usage.as_ref().map(UsageInput::choice);
    if let Some(text) = choice.as_ref().and_then(UsageChoice::text) {
        if !args.strict && !UsageValue::parse(text).is_valid {
            warn!(usage = %text, "Usage is not a number, pricing it as 0");
        }
    }

    let table = config.price_table();
    let policy = config.policy();

    let breakdown = if args.strict {
        draft.checked_quote(&table, &policy)?
    } else {
        match draft.quote(&table, &policy) {
            Some(breakdown) => breakdown,
            None => {
                warn!(category = %args.category, "No price category match, pricing unavailable");
                return Err(AppError::pricing_unavailable(&args.category));
            }
        }
    };

    let record = draft
        .matched_category(&table)
        .ok_or_else(|| AppError::pricing_unavailable(&args.category))?;
    let usage = draft
        .usage_selection()
        .ok_or_else(|| AppError::internal("usage missing after pricing"))?;

    info!(
        category = %record.name,
        usage = %usage.value,
        total = breakdown.total.units(),
        "Booking priced"
    );
    Ok(QuoteReport::new(record, usage, breakdown))
}

pub fn run(args: &QuoteArgs, config: &QuoteConfig) -> Result<String, AppError> {
    let report = price(args, config)?;
    if args.json {
        Ok(format!("{}\n", serde_json::to_string_pretty(&report)?))
    } else {
        Ok(report.render(config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Mode;
    use crate::config::CategoryConfig;
    use crate::error::ErrorCode;
    use driverhire_core::{PeriodUnit, Quantity};

    fn args(mode: Mode, category: &str) -> QuoteArgs {
        QuoteArgs {
            mode,
            category: category.to_string(),
            option: None,
            custom: None,
            months: None,
            period_count: None,
            period: None,
            minutes: Vec::new(),
            strict: false,
            json: false,
        }
    }

    #[test]
    fn test_distance_quote_text() {
        let mut quote_args = args(Mode::Distance, "Standard");
        quote_args.option = Some("10".to_string());

        let out = run(&quote_args, &QuoteConfig::default()).unwrap();
        assert!(out.contains("Usage           10 Km"));
        assert!(out.contains("Driver charge   ₹120"));
        assert!(out.contains("Admin charge    ₹12"));
        assert!(out.contains("Tax             ₹2"));
        assert!(out.contains("Total           ₹134"));
    }

    #[test]
    fn test_weekly_minutes_quote_json() {
        let mut quote_args = args(Mode::Weekly, "Premium");
        quote_args.minutes = vec![60, 90, 120];
        quote_args.option = Some("1.5".to_string());
        quote_args.period_count = Some("2".to_string());
        quote_args.period = Some(PeriodUnit::Week);
        quote_args.json = true;

        let out = run(&quote_args, &QuoteConfig::default()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["category"], "Premium");
        assert_eq!(json["usage"]["value"], "1.5");
        assert_eq!(json["usage"]["multiplier"]["count"], 2);
        assert_eq!(json["usage"]["multiplier"]["unit"], "week");
        assert_eq!(json["breakdown"]["total"], 84);
    }

    #[test]
    fn test_listed_minute_option_prices_exactly() {
        let mut config = QuoteConfig::default();
        config.categories.push(CategoryConfig {
            name: "Std".to_string(),
            rate_per_unit: Decimal::from(3),
            unit_kind: None,
        });

        let mut quote_args = args(Mode::Weekly, "Std");
        quote_args.minutes = vec![50, 110];
        for (option, expected) in [("5/6", 3), ("11/6", 6)] {
            quote_args.option = Some(option.to_string());
            let report = price(&quote_args, &config).unwrap();
            assert_eq!(report.breakdown.driver_charge.units(), expected);
        }

        quote_args.option = Some("5/6".to_string());
        quote_args.json = true;
        let out = run(&quote_args, &config).unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["usage"]["value"], "5/6");
    }

    #[test]
    fn test_custom_distance_wins() {
        let mut quote_args = args(Mode::Distance, "Standard");
        quote_args.option = Some("10".to_string());
        quote_args.custom = Some("20".to_string());

        let report = price(&quote_args, &QuoteConfig::default()).unwrap();
        assert_eq!(report.usage.value, Quantity::whole(Decimal::from(20)));
        assert_eq!(report.breakdown.driver_charge.units(), 240);
    }

    #[test]
    fn test_unknown_category_is_unavailable() {
        let mut quote_args = args(Mode::Hourly, "premium");
        quote_args.option = Some("2".to_string());

        let err = run(&quote_args, &QuoteConfig::default()).unwrap_err();
        assert_eq!(err.code, ErrorCode::PricingUnavailable);
    }

    #[test]
    fn test_garbage_usage_prices_zero_unless_strict() {
        let mut quote_args = args(Mode::Distance, "Standard");
        quote_args.custom = Some("far".to_string());

        let report = price(&quote_args, &QuoteConfig::default()).unwrap();
        assert_eq!(report.breakdown, CostBreakdown::zero());

        quote_args.strict = true;
        let err = price(&quote_args, &QuoteConfig::default()).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_monthly_report_carries_months() {
        let mut quote_args = args(Mode::Monthly, "Premium");
        quote_args.option = Some("8".to_string());
        quote_args.months = Some("3".to_string());

        let report = price(&quote_args, &QuoteConfig::default()).unwrap();
        assert_eq!(report.usage.months, Some(3));
        assert_eq!(report.usage.describe(), "8 Hours × 3 Months");
        assert_eq!(report.breakdown.driver_charge.units(), 400);
    }
}
