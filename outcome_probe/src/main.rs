//! Outcome Probe — runs one canned scenario through the `outcome_core` entry points and
//! prints the resulting outcome.
//!
//! Usage example (CLI):
//! ```bash
//! outcome_probe --scenario raise-zero --mode async --format json --quiet-hook
//! ```
//!
//! A failed scenario is reported, not propagated: the process exits successfully as long
//! as the outcome could be printed. Log verbosity follows `RUST_LOG`.
#![warn(missing_docs)]
mod args;
mod error;
mod scenario;

use crate::args::{Args, Format, Mode};
use crate::error::ProbeError;
use clap::Parser;
use futures::executor::block_on;
use log::{debug, info};
use outcome_core::{Outcome, hook};
use serde_json::Value;

fn main() -> Result<(), ProbeError> {
    init_logger();
    let args = Args::parse();
    debug!("Parsed arguments: {:?}", args);

    if args.quiet_hook {
        hook::install_quiet();
        debug!("Quiet panic hook installed");
    }

    info!("Running scenario {} in {} mode", args.scenario, args.mode);
    let outcome = match args.mode {
        Mode::Sync => args.scenario.run_sync(),
        Mode::Async => block_on(args.scenario.run_async()),
    };

    println!("{}", render(&outcome, args.format)?);
    Ok(())
}

/// Formats an outcome for stdout.
fn render(outcome: &Outcome<Value>, format: Format) -> Result<String, ProbeError> {
    let rendered = match format {
        Format::Json => serde_json::to_string(outcome)?,
        Format::Text => match outcome {
            Outcome::Success(data) => format!("success: data={}", data),
            Outcome::Failure(err) => format!("failure: err={}", err),
        },
    };
    Ok(rendered)
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
