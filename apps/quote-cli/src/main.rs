//! # DriverHire Quote Entry Point
//!
//! ```text
//! $ driverhire-quote options weekly --minutes 60,90,120
//! 1: 1 Hour
//! 1.5: 1.5 Hours
//! 2: 2 Hours
//!
//! $ driverhire-quote quote distance --option 10 --category Standard
//! Category        Standard (₹12 per unit)
//! Usage           10 Km
//! Driver charge   ₹120
//! Admin charge    ₹12
//! Tax             ₹2
//! Total           ₹134
//! ```

use std::process::ExitCode;

fn main() -> ExitCode {
    driverhire_quote::run()
}
