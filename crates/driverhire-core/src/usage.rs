//! # Usage Input Resolver
//!
//! Turns a unit-specific booking form into a raw usage emission.
//!
//! ## One Selector, Four Variants
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Variant    Options              Emits        Free entry               │
//! │  ─────────  ───────────────────  ───────────  ───────────────────────  │
//! │  Hourly     1..12 hours          HoursCount   -                        │
//! │  Monthly    1..12 hours          HoursCount   month count              │
//! │  Distance   10, 25, 50, 100 km   Kilometers   custom distance          │
//! │  Weekly     1..12 hours, or      HoursCount   period count + Day/Week  │
//! │             minutes ÷ 60                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Contract
//! Every edit is synchronous and returns the current [`UsageInput`]. The
//! selector never rejects anything: option text and free-entry text pass
//! through unmodified. The only reshaping is the minute → hour conversion,
//! done once while the option list is built. A converted option keeps its
//! exact fraction of an hour: 90 minutes submits `"1.5"`, 50 minutes submits
//! `"5/6"`. Numeric coercion and precedence belong to the booking record.
//!
//! ## Usage
//! ```rust
//! use driverhire_core::usage::UsageSelector;
//! use driverhire_core::UnitKind;
//!
//! let mut weekly = UsageSelector::weekly_in_minutes(&[60, 90, 120]);
//! assert_eq!(weekly.options()[1].label, "1.5 Hours");
//!
//! let raw = weekly.options()[1].raw();
//! let input = weekly.select(&raw);
//! assert_eq!(input.unit_kind, UnitKind::HoursCount);
//! assert_eq!(input.selected.as_deref(), Some("1.5"));
//!
//! let odd = UsageSelector::weekly_in_minutes(&[50]);
//! assert_eq!(odd.describe_options(), vec!["5/6: 0.83 Hours".to_string()]);
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{PeriodUnit, Quantity, UnitKind};
use crate::{DISTANCE_OPTIONS_KM, HOUR_OPTIONS};

// =============================================================================
// Variant Configuration
// =============================================================================

/// Which of the four booking forms a selector implements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum SelectorVariant {
    Hourly,
    Weekly,
    Monthly,
    Distance,
}

impl SelectorVariant {
    /// The unit every emission of this variant carries.
    pub const fn unit_kind(&self) -> UnitKind {
        match self {
            SelectorVariant::Distance => UnitKind::KilometersCount,
            _ => UnitKind::HoursCount,
        }
    }

    pub const fn has_custom_entry(&self) -> bool {
        matches!(self, SelectorVariant::Distance)
    }

    pub const fn has_month_count(&self) -> bool {
        matches!(self, SelectorVariant::Monthly)
    }

    pub const fn has_period(&self) -> bool {
        matches!(self, SelectorVariant::Weekly)
    }
}

/// How collaborator-supplied option values map to the base unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Conversion {
    Identity,
    MinutesToHours,
}

impl Conversion {
    fn apply(self, value: u32) -> Quantity {
        match self {
            Conversion::Identity => Quantity::whole(Decimal::from(value)),
            Conversion::MinutesToHours => Quantity::ratio(u64::from(value), 60),
        }
    }
}

// =============================================================================
// Options & Emissions
// =============================================================================

/// One entry of a selector's option list, already in base units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UsageOption {
    #[ts(type = "string")]
    pub value: Quantity,
    pub label: String,
}

impl UsageOption {
    fn new(value: Quantity, unit_kind: UnitKind) -> Self {
        UsageOption {
            value,
            label: unit_kind.describe(value.to_decimal()),
        }
    }

    /// The text a form submits back when this option is picked.
    pub fn raw(&self) -> String {
        self.value.to_string()
    }
}

/// Raw period multiplier fields of the weekly form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RawPeriod {
    /// Free-entry count, untouched.
    pub count: String,
    pub unit: PeriodUnit,
}

/// What a selector hands to the booking record on every edit.
///
/// All text is exactly what the user picked or typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct UsageInput {
    pub unit_kind: UnitKind,
    pub selected: Option<String>,
    pub custom: Option<String>,
    pub month_count: Option<String>,
    pub period: Option<RawPeriod>,
}

/// Selected preset vs. typed custom value, as one tagged choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsageChoice {
    Preset(String),
    Custom(String),
    Empty,
}

impl UsageChoice {
    /// The winning text, if any.
    pub fn text(&self) -> Option<&str> {
        match self {
            UsageChoice::Preset(text) | UsageChoice::Custom(text) => Some(text.as_str()),
            UsageChoice::Empty => None,
        }
    }
}

impl UsageInput {
    /// Resolves preset vs. custom entry.
    ///
    /// ## Precedence
    /// ```text
    /// custom non-blank?  ──yes──► Custom(custom)
    ///        │no
    /// preset picked?     ──yes──► Preset(selected)
    ///        │no
    ///        └──────────────────► Empty
    /// ```
    pub fn choice(&self) -> UsageChoice {
        if let Some(custom) = self.custom.as_deref() {
            if !custom.trim().is_empty() {
                return UsageChoice::Custom(custom.to_string());
            }
        }
        match self.selected.as_deref() {
            Some(selected) => UsageChoice::Preset(selected.to_string()),
            None => UsageChoice::Empty,
        }
    }
}

// =============================================================================
// Usage Selector
// =============================================================================

/// A booking form for one usage kind.
///
/// ## Invariants
/// - `options` are in base units and never change after construction
/// - free-entry fields only exist for the variants that declare them
#[derive(Debug, Clone)]
pub struct UsageSelector {
    variant: SelectorVariant,
    options: Vec<UsageOption>,
    selected: Option<String>,
    custom: String,
    month_count: String,
    period_count: String,
    period_unit: PeriodUnit,
}

impl UsageSelector {
    fn build(variant: SelectorVariant, domain: &[u32], conversion: Conversion) -> Self {
        let unit_kind = variant.unit_kind();
        let options = domain
            .iter()
            .map(|&raw| UsageOption::new(conversion.apply(raw), unit_kind))
            .collect();

        UsageSelector {
            variant,
            options,
            selected: None,
            custom: String::new(),
            month_count: "1".to_string(),
            period_count: "1".to_string(),
            period_unit: PeriodUnit::default(),
        }
    }

    /// Hourly form: 1 to 12 hours.
    pub fn hourly() -> Self {
        Self::build(SelectorVariant::Hourly, &HOUR_OPTIONS, Conversion::Identity)
    }

    /// Monthly form: 1 to 12 hours a day, plus a month count.
    pub fn monthly() -> Self {
        Self::build(SelectorVariant::Monthly, &HOUR_OPTIONS, Conversion::Identity)
    }

    /// One-way distance form: preset kilometers plus a custom distance.
    pub fn distance() -> Self {
        Self::build(SelectorVariant::Distance, &DISTANCE_OPTIONS_KM, Conversion::Identity)
    }

    /// Weekly form: 1 to 12 hours, plus a Day/Week period multiplier.
    pub fn weekly() -> Self {
        Self::build(SelectorVariant::Weekly, &HOUR_OPTIONS, Conversion::Identity)
    }

    /// Weekly form whose options arrive in minutes. Each option is offered
    /// and emitted in hours (`90` → `1.5`).
    pub fn weekly_in_minutes(minutes: &[u32]) -> Self {
        Self::build(SelectorVariant::Weekly, minutes, Conversion::MinutesToHours)
    }

    pub fn variant(&self) -> SelectorVariant {
        self.variant
    }

    pub fn unit_kind(&self) -> UnitKind {
        self.variant.unit_kind()
    }

    pub fn options(&self) -> &[UsageOption] {
        &self.options
    }

    /// Records the picked option text.
    pub fn select(&mut self, raw: &str) -> UsageInput {
        self.selected = Some(raw.to_string());
        self.emit()
    }

    /// Records the custom distance text. No-op for other variants.
    pub fn set_custom(&mut self, raw: &str) -> UsageInput {
        if self.variant.has_custom_entry() {
            self.custom = raw.to_string();
        }
        self.emit()
    }

    /// Records the month count text. No-op for other variants.
    pub fn set_month_count(&mut self, raw: &str) -> UsageInput {
        if self.variant.has_month_count() {
            self.month_count = raw.to_string();
        }
        self.emit()
    }

    /// Records the period count text. No-op for other variants.
    pub fn set_period_count(&mut self, raw: &str) -> UsageInput {
        if self.variant.has_period() {
            self.period_count = raw.to_string();
        }
        self.emit()
    }

    pub fn set_period_unit(&mut self, unit: PeriodUnit) -> UsageInput {
        if self.variant.has_period() {
            self.period_unit = unit;
        }
        self.emit()
    }

    pub fn toggle_period_unit(&mut self) -> UsageInput {
        let next = self.period_unit.toggled();
        self.set_period_unit(next)
    }

    /// Snapshot of the form for the booking record.
    pub fn emit(&self) -> UsageInput {
        UsageInput {
            unit_kind: self.unit_kind(),
            selected: self.selected.clone(),
            custom: self
                .variant
                .has_custom_entry()
                .then(|| self.custom.clone()),
            month_count: self
                .variant
                .has_month_count()
                .then(|| self.month_count.clone()),
            period: self.variant.has_period().then(|| RawPeriod {
                count: self.period_count.clone(),
                unit: self.period_unit,
            }),
        }
    }

    /// Option list rendered as `raw: label` lines, in display order. The
    /// left side is exactly what [`UsageSelector::select`] expects back.
    pub fn describe_options(&self) -> Vec<String> {
        self.options
            .iter()
            .map(|option| format!("{}: {}", option.raw(), option.label))
            .collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
