//! # DriverHire Quote Library
//!
//! Wiring for the `driverhire-quote` binary.
//!
//! ## Module Organization
//! ```text
//! driverhire_quote/
//! ├── lib.rs          ◄─── You are here (logging, config, dispatch)
//! ├── cli.rs          ◄─── clap argument definitions
//! ├── config.rs       ◄─── QuoteConfig (file + env)
//! ├── error.rs        ◄─── AppError and exit codes
//! └── commands/
//!     ├── options.rs     ◄─── list form options
//!     ├── categories.rs  ◄─── list price categories
//!     └── quote.rs       ◄─── price a booking
//! ```
//!
//! ## Startup Sequence
//! 1. Parse arguments
//! 2. Initialize tracing (stderr)
//! 3. Load configuration
//! 4. Run the command, print its output to stdout

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};
use config::QuoteConfig;
use error::AppError;

/// Runs the CLI and maps failures to exit codes.
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match execute(&cli) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(code = ?err.code, "{}", err.message);
            if wants_json(&cli) {
                match serde_json::to_string(&err) {
                    Ok(json) => eprintln!("{}", json),
                    Err(_) => eprintln!("error: {}", err),
                }
            } else {
                eprintln!("error: {}", err);
            }
            ExitCode::from(err.code.exit_code())
        }
    }
}

/// Loads configuration and runs the selected command.
pub fn execute(cli: &Cli) -> Result<String, AppError> {
    let config = QuoteConfig::load(cli.config.as_deref())?;
    debug!(
        categories = config.categories.len(),
        admin_rate_bps = config.admin_rate_bps,
        tax_rate_bps = config.tax_rate_bps,
        "Configuration loaded"
    );

    match &cli.command {
        Command::Options(args) => Ok(commands::options::run(args, &config)),
        Command::Categories => Ok(commands::categories::run(&config)),
        Command::Quote(args) => commands::quote::run(args, &config),
    }
}

fn wants_json(cli: &Cli) -> bool {
    matches!(&cli.command, Command::Quote(args) if args.json)
}

/// Initializes the tracing subscriber on stderr.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `--verbose` - Debug for driverhire crates
/// - Default: warnings only, info for driverhire crates
fn init_tracing(verbose: bool) {
    let default = if verbose {
        "warn,driverhire=debug"
    } else {
        "warn,driverhire=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
