//! # timing-trace - User Timing to Chrome Trace Converter
//!
//! Reads the user timing entries recorded in a results JSON file and writes
//! them out as a Chrome Trace Event Format file, so a run's marks and measures
//! can be inspected in `chrome://tracing` or Perfetto.
//!
//! ## Pipeline
//!
//! ```text
//!  results.json                                     results.json.run-timing.trace.json
//! ┌──────────────┐   ┌────────────────┐   ┌───────────────┐   ┌──────────────┐
//! │    timing    │──▶│ classification │──▶│  trace_event  │──▶│ chrome_trace │
//! │ (RunResults) │   │ (lanes, phase) │   │ (event mapper)│   │  (exporter)  │
//! └──────────────┘   └────────────────┘   └───────────────┘   └──────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - [`timing`]: Results document loading and the [`timing::TimingEntry`] record
//! - [`classification`]: Entry type, process/thread lane and phase rules
//! - [`export`]: Mapping entries to trace events and writing the trace file
//! - [`cli`]: Command-line argument parsing
//! - [`domain`]: Lane, phase and id types plus structured errors
//!
//! ## Lanes
//!
//! | entryType  | pid            | tid                                         |
//! |------------|----------------|---------------------------------------------|
//! | `mark`     | `Marks`        | -                                           |
//! | `measure`  | `Measurements` | `Audits` / `Gatherers` / `TopLevelMeasures` |
//! | other      | `Primary`      | -                                           |
//!
//! Resource entries are renamed to `resource` with their original name kept in
//! `args.url`. Zero-duration entries become instant (`n`) events, everything
//! else a complete (`X`) event.
//!
//! ## Typical Usage
//!
//! ```bash
//! timing-trace results.json
//! RUST_LOG=info timing-trace ./runs/latest.json
//! ```

pub mod classification;
pub mod cli;
pub mod domain;
pub mod export;
pub mod timing;
