//! # Quote Configuration
//!
//! Currency display, pricing policy and the price-category table.
//!
//! ## Configuration Sources (Priority Order)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Environment Variables (highest priority)                           │
//! │     DRIVERHIRE__CURRENCY_SYMBOL=$                                      │
//! │     DRIVERHIRE__TAX_RATE_BPS=1800                                      │
//! │                                                                         │
//! │  2. --config <file> (TOML)                                             │
//! │                                                                         │
//! │  3. quote.toml in the platform config directory                        │
//! │     ~/.config/driverhire/quote.toml (Linux)                            │
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                   │
//! │     ₹, 10% admin, 18% tax, sample categories                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! currency_symbol = "₹"
//! admin_rate_bps = 1000
//! tax_rate_bps = 1800
//! weekly_minute_options = [60, 90, 120]
//!
//! [[categories]]
//! name = "Standard"
//! rate_per_unit = 12
//! unit_kind = "kilometers_count"
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use config::builder::DefaultState;
use config::{ConfigBuilder, Environment, File, FileFormat};
use directories::ProjectDirs;
use driverhire_core::validation::{validate_category_name, validate_policy, validate_rate};
use driverhire_core::{
    Money, PriceCategoryRecord, PriceTable, PricingPolicy, RateBps, UnitKind, ValidationError,
    DEFAULT_ADMIN_RATE_BPS, DEFAULT_TAX_RATE_BPS,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Environment variable prefix, e.g. `DRIVERHIRE__CURRENCY_SYMBOL`.
pub const ENV_PREFIX: &str = "DRIVERHIRE";

/// One configured price category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryConfig {
    pub name: String,
    pub rate_per_unit: Decimal,
    #[serde(default)]
    pub unit_kind: Option<UnitKind>,
}

impl From<&CategoryConfig> for PriceCategoryRecord {
    fn from(category: &CategoryConfig) -> Self {
        PriceCategoryRecord {
            name: category.name.clone(),
            rate_per_unit: category.rate_per_unit,
            unit_kind: category.unit_kind,
        }
    }
}

/// Quote CLI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QuoteConfig {
    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Admin margin in basis points (1000 = 10%)
    pub admin_rate_bps: u32,

    /// Tax on the admin margin in basis points (1800 = 18%)
    pub tax_rate_bps: u32,

    /// Weekly options supplied in minutes; empty means 1..12 hours
    pub weekly_minute_options: Vec<u32>,

    /// Price table
    pub categories: Vec<CategoryConfig>,
}

impl Default for QuoteConfig {
    fn default() -> Self {
        QuoteConfig {
            currency_symbol: "₹".to_string(),
            admin_rate_bps: DEFAULT_ADMIN_RATE_BPS,
            tax_rate_bps: DEFAULT_TAX_RATE_BPS,
            weekly_minute_options: Vec::new(),
            categories: vec![
                CategoryConfig {
                    name: "Standard".to_string(),
                    rate_per_unit: Decimal::from(12),
                    unit_kind: Some(UnitKind::KilometersCount),
                },
                CategoryConfig {
                    name: "Premium".to_string(),
                    rate_per_unit: Decimal::from(50),
                    unit_kind: Some(UnitKind::HoursCount),
                },
                CategoryConfig {
                    name: "Chauffeur".to_string(),
                    rate_per_unit: Decimal::from(150),
                    unit_kind: Some(UnitKind::HoursCount),
                },
            ],
        }
    }
}

impl QuoteConfig {
    /// Loads configuration from the platform file, an optional explicit
    /// file, and the environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = config::Config::builder();

        if let Some(default_path) = default_config_path() {
            debug!(path = %default_path.display(), "Checking default config file");
            builder = builder.add_source(File::from(default_path).required(false));
        }

        if let Some(path) = path {
            debug!(path = %path.display(), "Loading config file");
            builder = builder.add_source(File::from(path).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        );

        Self::finish(builder)
    }

    /// Parses a TOML document on top of the defaults.
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        Self::finish(config::Config::builder().add_source(File::from_str(toml, FileFormat::Toml)))
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let config: QuoteConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Checks policy bounds, rates, names and duplicate names.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_policy(&self.policy()).map_err(|source| ConfigError::InvalidValue {
            field: "policy".to_string(),
            source,
        })?;

        let mut seen = HashSet::new();
        for category in &self.categories {
            validate_category_name(&category.name).map_err(|source| {
                ConfigError::InvalidValue {
                    field: "categories.name".to_string(),
                    source,
                }
            })?;
            validate_rate(category.rate_per_unit).map_err(|source| ConfigError::InvalidValue {
                field: format!("categories.{}.rate_per_unit", category.name),
                source,
            })?;
            if !seen.insert(category.name.as_str()) {
                return Err(ConfigError::DuplicateCategory(category.name.clone()));
            }
        }

        Ok(())
    }

    pub fn policy(&self) -> PricingPolicy {
        PricingPolicy {
            admin_rate: RateBps::from_bps(self.admin_rate_bps),
            tax_rate: RateBps::from_bps(self.tax_rate_bps),
        }
    }

    /// The price table as the core sees it.
    pub fn price_table(&self) -> PriceTable {
        self.categories.iter().map(PriceCategoryRecord::from).collect()
    }

    /// Formats a whole-unit amount, e.g. `₹134`.
    pub fn format_currency(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }

    /// Formats a decimal rate, e.g. `₹12.5`.
    pub fn format_rate(&self, rate: Decimal) -> String {
        format!("{}{}", self.currency_symbol, rate.normalize())
    }
}

/// Platform location of `quote.toml`, if a home directory is known.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "driverhire", "driverhire")
        .map(|dirs| dirs.config_dir().join("quote.toml"))
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid value for {field}: {source}")]
    InvalidValue {
        field: String,
        #[source]
        source: ValidationError,
    },

    #[error("Duplicate price category: {0}")]
    DuplicateCategory(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_defaults_are_valid() {
        let config = QuoteConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.policy(), PricingPolicy::default());
        assert_eq!(config.price_table().len(), 3);
    }

    #[test]
    fn test_from_toml_overrides() {
        let config = QuoteConfig::from_toml_str(
            r#"
            currency_symbol = "$"
            tax_rate_bps = 500

            [[categories]]
            name = "Economy"
            rate_per_unit = 8.5
            "#,
        )
        .unwrap();

        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.admin_rate_bps, 1000);
        assert_eq!(config.tax_rate_bps, 500);

        let table = config.price_table();
        assert_eq!(table.len(), 1);
        assert_eq!(table.find("Economy").map(|r| r.rate_per_unit), Some(dec!(8.5)));
    }

    #[test]
    fn test_unit_kind_parsed() {
        let config = QuoteConfig::from_toml_str(
            r#"
            [[categories]]
            name = "Outstation"
            rate_per_unit = 14
            unit_kind = "kilometers_count"
            "#,
        )
        .unwrap();
        assert_eq!(config.categories[0].unit_kind, Some(UnitKind::KilometersCount));
    }

    #[test]
    fn test_negative_rate_rejected() {
        let result = QuoteConfig::from_toml_str(
            r#"
            [[categories]]
            name = "Broken"
            rate_per_unit = -1
            "#,
        );
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }

    #[test]
    fn test_duplicate_category_rejected() {
        let result = QuoteConfig::from_toml_str(
            r#"
            [[categories]]
            name = "Standard"
            rate_per_unit = 12

            [[categories]]
            name = "Standard"
            rate_per_unit = 14
            "#,
        );
        assert!(matches!(result, Err(ConfigError::DuplicateCategory(name)) if name == "Standard"));
    }

    #[test]
    fn test_policy_out_of_range_rejected() {
        let result = QuoteConfig::from_toml_str("admin_rate_bps = 20000");
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }

    #[test]
    fn test_format_currency() {
        let config = QuoteConfig::default();
        assert_eq!(config.format_currency(Money::from_units(134)), "₹134");
        assert_eq!(config.format_rate(dec!(12.50)), "₹12.5");
    }
}
