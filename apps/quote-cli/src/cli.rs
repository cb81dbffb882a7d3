//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use driverhire_core::usage::SelectorVariant;
use driverhire_core::PeriodUnit;

/// DriverHire quote - price a driver booking from the command line
#[derive(Debug, Parser)]
#[command(name = "driverhire-quote")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (TOML)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the options a booking form offers
    Options(OptionsArgs),

    /// List the configured price categories
    Categories,

    /// Price a booking
    Quote(QuoteArgs),
}

/// Booking form to drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    Hourly,
    Weekly,
    Monthly,
    Distance,
}

impl From<Mode> for SelectorVariant {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Hourly => SelectorVariant::Hourly,
            Mode::Weekly => SelectorVariant::Weekly,
            Mode::Monthly => SelectorVariant::Monthly,
            Mode::Distance => SelectorVariant::Distance,
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct OptionsArgs {
    pub mode: Mode,

    /// Weekly options in minutes, comma separated (overrides config)
    #[arg(long, value_delimiter = ',')]
    pub minutes: Vec<u32>,
}

#[derive(Debug, Clone, Args)]
pub struct QuoteArgs {
    pub mode: Mode,

    /// Driver price category, matched exactly
    #[arg(long)]
    pub category: String,

    /// Picked option, as listed by `options`
    #[arg(long)]
    pub option: Option<String>,

    /// Custom distance in km (distance mode)
    #[arg(long)]
    pub custom: Option<String>,

    /// Month count (monthly mode)
    #[arg(long)]
    pub months: Option<String>,

    /// Number of days or weeks (weekly mode)
    #[arg(long)]
    pub period_count: Option<String>,

    /// day or week (weekly mode)
    #[arg(long, value_parser = parse_period_unit)]
    pub period: Option<PeriodUnit>,

    /// Weekly options in minutes, comma separated (overrides config)
    #[arg(long, value_delimiter = ',')]
    pub minutes: Vec<u32>,

    /// Reject bad input instead of pricing it as zero
    #[arg(long)]
    pub strict: bool,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

fn parse_period_unit(raw: &str) -> Result<PeriodUnit, String> {
    raw.parse::<PeriodUnit>().map_err(|err| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quote_args() {
        let cli = Cli::try_parse_from([
            "driverhire-quote",
            "quote",
            "weekly",
            "--category",
            "Premium",
            "--option",
            "1.5",
            "--period",
            "week",
            "--minutes",
            "60,90,120",
        ])
        .unwrap();

        match cli.command {
            Command::Quote(args) => {
                assert_eq!(args.mode, Mode::Weekly);
                assert_eq!(args.category, "Premium");
                assert_eq!(args.option.as_deref(), Some("1.5"));
                assert_eq!(args.period, Some(PeriodUnit::Week));
                assert_eq!(args.minutes, vec![60, 90, 120]);
                assert!(!args.json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_rejects_unknown_period() {
        let result = Cli::try_parse_from([
            "driverhire-quote",
            "quote",
            "weekly",
            "--category",
            "Premium",
            "--period",
            "month",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags() {
        let cli =
            Cli::try_parse_from(["driverhire-quote", "categories", "--verbose", "--config", "q.toml"])
                .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("q.toml")));
        assert!(matches!(cli.command, Command::Categories));
    }
}
