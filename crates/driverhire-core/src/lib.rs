//! # driverhire-core: Pure Pricing Logic for DriverHire
//!
//! This crate turns a vehicle-hire booking form into an itemized price. It
//! contains all business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       DriverHire Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Booking forms / quote-cli (display)                │   │
//! │  │   Hourly ─┐                                                     │   │
//! │  │   Weekly ─┼──► usage edits          price categories (fetched)  │   │
//! │  │   Monthly ┤                                                     │   │
//! │  │   Distance┘                                                     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ driverhire-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   usage   │─►│  booking  │─►│  pricing  │  │ validation│  │   │
//! │  │   │ Selector  │  │  Draft    │  │ Breakdown │  │   rules   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`usage`] - Usage input resolver (four booking forms, one selector)
//! - [`pricing`] - Cost breakdown calculator and price table
//! - [`booking`] - Booking draft: coercion, precedence, category lookup
//! - [`types`] - Domain types (UsageSelection, PriceCategoryRecord, ...)
//! - [`money`] - Whole-unit Money with half-up rounding
//! - [`validation`] - Parsing and boundary validation
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use driverhire_core::{BookingDraft, PriceCategoryRecord, PriceTable, PricingPolicy};
//! use driverhire_core::usage::UsageSelector;
//! use rust_decimal_macros::dec;
//!
//! let table = PriceTable::new(vec![PriceCategoryRecord::new("Standard", dec!(12))]);
//!
//! let mut distance = UsageSelector::distance();
//! let mut draft = BookingDraft::new();
//! draft.apply_usage(distance.select("10"));
//! draft.set_category("Standard");
//!
//! let breakdown = draft.quote(&table, &PricingPolicy::default()).unwrap();
//! assert_eq!(breakdown.driver_charge.units(), 120);
//! assert_eq!(breakdown.admin_charge.units(), 12);
//! assert_eq!(breakdown.tax_charge.units(), 2);
//! assert_eq!(breakdown.total.units(), 134);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod booking;
pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod usage;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use booking::BookingDraft;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use pricing::{CostBreakdown, PriceTable};
pub use types::*;
pub use usage::{UsageChoice, UsageInput, UsageSelector};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Hour options offered by the hourly, weekly and monthly forms.
pub const HOUR_OPTIONS: [u32; 12] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];

/// Kilometer presets of the one-way distance form.
pub const DISTANCE_OPTIONS_KM: [u32; 4] = [10, 25, 50, 100];

/// Platform margin on the driver charge: 10%.
pub const DEFAULT_ADMIN_RATE_BPS: u32 = 1000;

/// Tax on the platform margin: 18%.
pub const DEFAULT_TAX_RATE_BPS: u32 = 1800;

/// Longest accepted price-category name.
pub const MAX_CATEGORY_NAME_LEN: usize = 100;
