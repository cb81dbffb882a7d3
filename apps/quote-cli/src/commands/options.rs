//! `options` command: show what a booking form offers.

use std::fmt::Write;

use tracing::debug;

use crate::cli::OptionsArgs;
use crate::commands::build_selector;
use crate::config::QuoteConfig;

pub fn run(args: &OptionsArgs, config: &QuoteConfig) -> String {
    let selector = build_selector(args.mode, &args.minutes, config);
    debug!(variant = ?selector.variant(), count = selector.options().len(), "Listing options");

    let mut out = String::new();
    for line in selector.describe_options() {
        let _ = writeln!(out, "{}", line);
    }

    let variant = selector.variant();
    if variant.has_custom_entry() {
        let _ = writeln!(out, "(or --custom <km>)");
    }
    if variant.has_month_count() {
        let _ = writeln!(out, "(plus --months <count>, default 1)");
    }
    if variant.has_period() {
        let _ = writeln!(out, "(plus --period-count <count> --period day|week, default 1 day)");
    }
    out
}
