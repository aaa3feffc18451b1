//! Command-line arguments for the outcome probe.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::{Parser, ValueEnum};
use strum_macros::{Display, EnumString};

use crate::scenario::Scenario;

/// Which entry point runs the scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Mode {
    /// The synchronous entry point.
    Sync,
    /// The async entry point, driven by a blocking executor.
    Async,
}

/// How the outcome is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Format {
    /// One human-readable line.
    Text,
    /// `{"data": ..., "err": ...}`.
    Json,
}

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Scenario to run.
    #[clap(long, value_enum)]
    pub scenario: Scenario,

    /// Entry point used to run the scenario.
    #[clap(long, value_enum, default_value_t = Mode::Sync)]
    pub mode: Mode,

    /// Output format.
    #[clap(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Keep deliberately raised failures off stderr.
    #[clap(long)]
    pub quiet_hook: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_sync_text() {
        let args = Args::try_parse_from(["outcome_probe", "--scenario", "return-data"]).unwrap();
        assert_eq!(args.scenario, Scenario::ReturnData);
        assert_eq!(args.mode, Mode::Sync);
        assert_eq!(args.format, Format::Text);
        assert!(!args.quiet_hook);
    }

    #[test]
    fn parses_all_flags() {
        let args = Args::try_parse_from([
            "outcome_probe",
            "--scenario",
            "raise-zero",
            "--mode",
            "async",
            "--format",
            "json",
            "--quiet-hook",
        ])
        .unwrap();
        assert_eq!(args.scenario, Scenario::RaiseZero);
        assert_eq!(args.mode, Mode::Async);
        assert_eq!(args.format, Format::Json);
        assert!(args.quiet_hook);
    }

    #[test]
    fn rejects_unknown_scenario() {
        assert!(Args::try_parse_from(["outcome_probe", "--scenario", "nope"]).is_err());
    }

    #[test]
    fn mode_round_trips_through_strum() {
        assert_eq!("ASYNC".parse::<Mode>().unwrap(), Mode::Async);
        assert_eq!(Format::Json.to_string(), "json");
    }
}
