use std::ffi::OsString;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use super::trace_event::{generate_trace_events, TraceEvent};
use crate::domain::ExportError;
use crate::timing::TimingEntry;

/// File name used when no output path is given
pub const DEFAULT_TRACE_FILE_NAME: &str = "run-timing.trace.json";

/// Suffix appended to a results path to name its trace file
pub const TRACE_FILE_SUFFIX: &str = ".run-timing.trace.json";

/// Chrome trace exporter for timing entries
pub struct TraceEventExporter {
    events: Vec<TraceEvent>,
}

impl TraceEventExporter {
    /// Map the entries to trace events, ready for export
    #[must_use]
    pub fn from_entries(entries: &[TimingEntry]) -> Self {
        Self { events: generate_trace_events(entries) }
    }

    /// Export the trace to any writer (file, stdout, buffer, etc.)
    ///
    /// Each event is written as compact JSON on its own line inside the
    /// `traceEvents` array, so large traces stay diffable and greppable.
    ///
    /// # Example
    /// ```
    /// use timing_trace::export::TraceEventExporter;
    /// use timing_trace::timing::RunResults;
    ///
    /// # fn example() -> anyhow::Result<()> {
    /// let results = RunResults::from_reader(
    ///     r#"{"timing": {"entries": [{"name": "a", "entryType": "mark", "startTime": 1, "duration": 0}]}}"#
    ///         .as_bytes(),
    /// )?;
    /// let exporter = TraceEventExporter::from_entries(results.entries());
    ///
    /// let mut buffer = Vec::new();
    /// exporter.export(&mut buffer)?;
    /// let parsed: serde_json::Value = serde_json::from_slice(&buffer)?;
    /// assert_eq!(parsed["traceEvents"][0]["pid"], "Marks");
    /// # Ok(())
    /// # }
    /// # example().unwrap();
    /// ```
    ///
    /// # Errors
    /// Returns an error if an event cannot be serialized or the writer fails
    pub fn export<W: Write>(&self, mut writer: W) -> Result<(), ExportError> {
        writeln!(writer)?;
        writeln!(writer, "  {{ \"traceEvents\": [")?;
        for (idx, event) in self.events.iter().enumerate() {
            if idx > 0 {
                writeln!(writer, ",")?;
            }
            write!(writer, "    ")?;
            serde_json::to_writer(&mut writer, event)?;
        }
        if !self.events.is_empty() {
            writeln!(writer)?;
        }
        writeln!(writer, "  ]}}")?;
        writer.flush()?;
        Ok(())
    }

    /// Get the mapped events
    #[must_use]
    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    /// Get the number of events collected
    #[must_use]
    pub fn event_count(&self) -> usize {
        self.events.len()
    }
}

/// Path of the trace file written next to a results file
///
/// `results.json` becomes `results.json.run-timing.trace.json`.
#[must_use]
pub fn trace_path_for(results_path: &Path) -> PathBuf {
    let mut path = OsString::from(results_path.as_os_str());
    path.push(TRACE_FILE_SUFFIX);
    PathBuf::from(path)
}

/// Write a trace of the timing entries to disk and return where it went
///
/// Without an explicit path the trace lands in the current directory as
/// [`DEFAULT_TRACE_FILE_NAME`].
///
/// # Errors
/// Returns an error if the current directory is unavailable or the file
/// cannot be written
pub fn save_trace_of_timings(
    entries: &[TimingEntry],
    trace_path: Option<&Path>,
) -> Result<PathBuf, ExportError> {
    let trace_path = match trace_path {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir()?.join(DEFAULT_TRACE_FILE_NAME),
    };

    let exporter = TraceEventExporter::from_entries(entries);
    let file = File::create(&trace_path)?;
    exporter.export(BufWriter::new(file))?;

    log::info!("Wrote {} trace events to {}", exporter.event_count(), trace_path.display());
    Ok(trace_path)
}
