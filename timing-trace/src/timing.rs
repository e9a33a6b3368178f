//! Timing entries and the results document they are read from
//!
//! A results file is a JSON object with a `timing.entries` array. Each entry
//! is kept as an ordered JSON object so fields the converter knows nothing
//! about survive unchanged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::domain::ResultsError;

/// One user-timing entry (mark, measure, resource load, ...)
///
/// Fields are not validated: accessors return `None` when a field is missing
/// or has an unexpected JSON type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimingEntry {
    fields: Map<String, Value>,
}

impl TimingEntry {
    #[must_use]
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Raw `name` value
    #[must_use]
    pub fn name(&self) -> Option<&Value> {
        self.fields.get("name")
    }

    /// Raw `entryType` value
    #[must_use]
    pub fn entry_type(&self) -> Option<&Value> {
        self.fields.get("entryType")
    }

    /// Offset from the time origin, in milliseconds
    #[must_use]
    pub fn start_time(&self) -> Option<f64> {
        self.fields.get("startTime").and_then(Value::as_f64)
    }

    /// Duration in milliseconds
    #[must_use]
    pub fn duration(&self) -> Option<f64> {
        self.fields.get("duration").and_then(Value::as_f64)
    }

    /// All fields in input order
    #[must_use]
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}

impl From<Map<String, Value>> for TimingEntry {
    fn from(fields: Map<String, Value>) -> Self {
        Self::new(fields)
    }
}

#[derive(Debug, Clone, Deserialize)]
struct Timing {
    entries: Vec<TimingEntry>,
}

/// The parts of a results document this tool reads
///
/// Only `timing.entries` is required; everything else in the document is
/// ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RunResults {
    timing: Timing,
}

impl RunResults {
    /// Parse a results file from disk
    ///
    /// # Errors
    /// Returns [`ResultsError::NotFound`] if the path does not exist, and a
    /// parse or I/O error if the file cannot be read as a results document
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ResultsError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ResultsError::NotFound(path.to_path_buf()));
        }

        let file = File::open(path)?;
        let results = Self::from_reader(BufReader::new(file))?;
        log::info!("Read {} timing entries from {}", results.entries().len(), path.display());
        Ok(results)
    }

    /// Parse a results document from any reader
    ///
    /// # Errors
    /// Returns an error if the input is not JSON or lacks `timing.entries`
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ResultsError> {
        Ok(serde_json::from_reader(reader)?)
    }

    #[must_use]
    pub fn entries(&self) -> &[TimingEntry] {
        &self.timing.entries
    }

    #[must_use]
    pub fn into_entries(self) -> Vec<TimingEntry> {
        self.timing.entries
    }
}
