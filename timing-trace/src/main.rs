//! # timing-trace - Main Entry Point
//!
//! `timing-trace <RESULTS>` converts the results file's timing entries and
//! writes `<RESULTS>.run-timing.trace.json` next to it.

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;

use timing_trace::cli::Args;
use timing_trace::domain::CliError;
use timing_trace::export::{save_trace_of_timings, trace_path_for};
use timing_trace::timing::RunResults;

// Exit codes
const EXIT_SUCCESS: i32 = 0;
const EXIT_ERROR: i32 = 1;

fn main() {
    env_logger::init();
    std::process::exit(match run() {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            report_error(&e);
            EXIT_ERROR
        }
    });
}

/// Print an error in the same block layout as the success message.
///
/// Usage errors also show an example invocation.
fn report_error(err: &anyhow::Error) {
    eprintln!("ERROR:\n  > {err:#}");
    if err.downcast_ref::<CliError>().is_some() {
        eprintln!("  > Example:\n  >     timing-trace results.json");
    }
    eprintln!();
}

fn run() -> Result<()> {
    let args = Args::parse();

    let results_path = args.results_path()?;
    debug!("Reading results from {}", results_path.display());

    let results = RunResults::from_file(&results_path)
        .with_context(|| format!("Failed to read results from {}", results_path.display()))?;

    let trace_path = trace_path_for(&results_path);
    let saved = save_trace_of_timings(results.entries(), Some(&trace_path))
        .with_context(|| format!("Failed to write trace file {}", trace_path.display()))?;

    println!();
    println!("  > Timing trace file saved to: {}", saved.display());
    println!("  > Open this file in chrome://tracing");
    println!();

    Ok(())
}
