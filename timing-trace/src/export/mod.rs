//! Trace export functionality
//!
//! Maps timing entries to Chrome Trace Event Format events and writes them
//! out for visualization in chrome://tracing or Perfetto.

pub mod chrome_trace;
pub mod trace_event;

pub use chrome_trace::{save_trace_of_timings, trace_path_for, TraceEventExporter};
pub use trace_event::{generate_trace_events, TraceEvent};
