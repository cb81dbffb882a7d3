//! # Commands
//!
//! Each command takes parsed arguments plus the loaded configuration and
//! returns the text to print, so commands stay testable without a terminal.
//!
//! ```text
//! options ────► UsageSelector::options()
//! categories ─► QuoteConfig::price_table()
//! quote ──────► UsageSelector ──► BookingDraft ──► CostBreakdown
//! ```

pub mod categories;
pub mod options;
pub mod quote;

use driverhire_core::usage::{SelectorVariant, UsageSelector};

use crate::cli::Mode;
use crate::config::QuoteConfig;

/// Builds the booking form for `mode`.
///
/// Weekly forms use minute options when the command line or the config
/// supplies them; the command line wins.
pub fn build_selector(mode: Mode, minutes: &[u32], config: &QuoteConfig) -> UsageSelector {
    match SelectorVariant::from(mode) {
        SelectorVariant::Hourly => UsageSelector::hourly(),
        SelectorVariant::Monthly => UsageSelector::monthly(),
        SelectorVariant::Distance => UsageSelector::distance(),
        SelectorVariant::Weekly => {
            let minutes = if minutes.is_empty() {
                config.weekly_minute_options.as_slice()
            } else {
                minutes
            };
            if minutes.is_empty() {
                UsageSelector::weekly()
            } else {
                UsageSelector::weekly_in_minutes(minutes)
            }
        }
    }
}
