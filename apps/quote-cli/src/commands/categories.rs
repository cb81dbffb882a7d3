//! `categories` command: list the price table.

use std::fmt::Write;

use crate::config::QuoteConfig;

pub fn run(config: &QuoteConfig) -> String {
    let table = config.price_table();
    if table.is_empty() {
        return "No price categories configured\n".to_string();
    }

    let mut out = String::new();
    for record in table.records() {
        let per = record
            .unit_kind
            .map(|kind| format!(" per {}", kind.label(rust_decimal::Decimal::ONE)))
            .unwrap_or_default();
        let _ = writeln!(
            out,
            "{:<16}{}{}",
            record.name,
            config.format_rate(record.rate_per_unit),
            per
        );
    }
    out
}
