//! # Booking Draft
//!
//! The booking record that consumes usage emissions and decides what gets
//! priced.
//!
//! ## Responsibilities
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Booking Draft Operations                             │
//! │                                                                         │
//! │  Form Event               Draft Method             Draft Change         │
//! │  ──────────               ────────────             ────────────         │
//! │                                                                         │
//! │  Any usage edit ────────► apply_usage() ─────────► usage = input        │
//! │                                                                         │
//! │  Pick driver category ──► set_category() ────────► category = label     │
//! │                                                                         │
//! │  Show price ────────────► quote() ───────────────► (read only)          │
//! │                                                                         │
//! │  Submit ────────────────► checked_quote() ───────► (read only, strict)  │
//! │                                                                         │
//! │  Start over ────────────► clear() ───────────────► everything reset     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Coercion Rules
//! - Custom entry wins over the preset when it is not blank
//! - Unparsable usage text prices as `0`; negative text is clamped to `0`
//! - Unparsable month / period counts fall back to `1` for display pricing,
//!   and fail [`BookingDraft::validate`]

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::pricing::{self, CostBreakdown, PriceTable};
use crate::types::{PeriodMultiplier, PriceCategoryRecord, PricingPolicy, UsageSelection};
use crate::usage::{UsageChoice, UsageInput};
use crate::validation::{
    parse_usage, parse_usage_checked, validate_category_name, validate_month_count,
    validate_period_count,
};

/// A booking being configured.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDraft {
    /// Selected driver category label, matched exactly.
    pub category: Option<String>,

    /// Latest emission of the usage form.
    pub usage: Option<UsageInput>,
}

impl BookingDraft {
    /// Creates a new empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the latest usage emission, replacing the previous one.
    pub fn apply_usage(&mut self, input: UsageInput) {
        self.usage = Some(input);
    }

    pub fn set_category(&mut self, label: impl Into<String>) {
        self.category = Some(label.into());
    }

    /// Clears usage and category.
    pub fn clear(&mut self) {
        self.category = None;
        self.usage = None;
    }

    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.usage.is_none()
    }

    /// Canonical usage of the draft, coerced leniently.
    ///
    /// Returns `None` only when no usage was ever applied. An applied but
    /// empty or garbage entry yields a zero-valued selection.
    pub fn usage_selection(&self) -> Option<UsageSelection> {
        let input = self.usage.as_ref()?;

        let value = input.choice().text().map(parse_usage).unwrap_or_default();
        let mut selection = UsageSelection::new(input.unit_kind, value);

        selection.multiplier = input.period.as_ref().map(|period| {
            PeriodMultiplier::new(validate_period_count(&period.count).unwrap_or(1), period.unit)
        });
        selection.months = input
            .month_count
            .as_deref()
            .map(|raw| validate_month_count(raw).unwrap_or(1));

        Some(selection)
    }

    /// The price record for the selected category, if the table has one.
    pub fn matched_category<'a>(&self, table: &'a PriceTable) -> Option<&'a PriceCategoryRecord> {
        self.category.as_deref().and_then(|name| table.find(name))
    }

    /// Breakdown for display.
    ///
    /// `None` (no breakdown at all) when usage was never applied, no
    /// category is set, or the category has no exact match in `table`.
    pub fn quote(&self, table: &PriceTable, policy: &PricingPolicy) -> Option<CostBreakdown> {
        let record = self.matched_category(table)?;
        let selection = self.usage_selection()?;
        Some(pricing::quote(selection.value, record, policy))
    }

    /// Strict submission checks.
    ///
    /// ## Rules
    /// - A category label is set and well-formed
    /// - Usage was applied, is numeric and > 0
    /// - Month count and period count, where present, are whole numbers ≥ 1
    pub fn validate(&self) -> CoreResult<()> {
        let category = self.category.as_deref().ok_or(ValidationError::Required {
            field: "category".to_string(),
        })?;
        validate_category_name(category)?;

        let input = self.usage.as_ref().ok_or(CoreError::UsageMissing)?;
        let text = match input.choice() {
            UsageChoice::Preset(text) | UsageChoice::Custom(text) => text,
            UsageChoice::Empty => return Err(CoreError::UsageMissing),
        };

        let value = parse_usage_checked(&text)?;
        if !value.is_positive() {
            return Err(ValidationError::MustBePositive {
                field: "usage".to_string(),
            }
            .into());
        }

        if let Some(raw) = input.month_count.as_deref() {
            validate_month_count(raw)?;
        }
        if let Some(period) = input.period.as_ref() {
            validate_period_count(&period.count)?;
        }

        Ok(())
    }

    /// Validates the draft and prices it, failing instead of returning
    /// `None`.
    pub fn checked_quote(
        &self,
        table: &PriceTable,
        policy: &PricingPolicy,
    ) -> CoreResult<CostBreakdown> {
        self.validate()?;

        let category = self.category.clone().unwrap_or_default();
        let record = table
            .find(&category)
            .ok_or(CoreError::CategoryNotFound(category.clone()))?;
        let selection = self.usage_selection().ok_or(CoreError::UsageMissing)?;

        Ok(pricing::quote(selection.value, record, policy))
    }
}
