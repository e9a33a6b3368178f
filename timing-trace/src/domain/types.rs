//! Domain types providing compile-time safety and self-documentation
//!
//! Trace viewers only care about the string labels these types serialize to,
//! but keeping them as enums and newtypes stops a thread lane from being
//! passed where a process lane is expected.

use serde::{Serialize, Serializer};
use std::fmt;

/// Largest integer an `f64` represents exactly (2^53 - 1)
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Process lane (`pid`) a trace event is drawn in
///
/// Not a real OS process, just the top-level swim lane label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ProcessLane {
    /// Fallback lane for resources and unrecognised entry types
    Primary,
    /// User timing marks
    Marks,
    /// User timing measures
    Measurements,
}

impl ProcessLane {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ProcessLane::Primary => "Primary",
            ProcessLane::Marks => "Marks",
            ProcessLane::Measurements => "Measurements",
        }
    }
}

impl fmt::Display for ProcessLane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Thread lane (`tid`) inside the `Measurements` process lane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ThreadLane {
    /// Measures named `audit-*`
    Audits,
    /// Measures named `gather-*`
    Gatherers,
    /// Every other measure
    TopLevelMeasures,
}

impl ThreadLane {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ThreadLane::Audits => "Audits",
            ThreadLane::Gatherers => "Gatherers",
            ThreadLane::TopLevelMeasures => "TopLevelMeasures",
        }
    }
}

impl fmt::Display for ThreadLane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trace event phase marker (`ph`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Phase {
    /// Zero-length event, rendered as an instant
    #[serde(rename = "n")]
    NestableInstant,
    /// Event with a begin timestamp and a duration
    #[serde(rename = "X")]
    Complete,
}

impl Phase {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::NestableInstant => "n",
            Phase::Complete => "X",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scope marker (`s`), only emitted alongside [`Phase::NestableInstant`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Scope {
    #[serde(rename = "t")]
    Thread,
}

/// Sequential event identifier, serialized as `0x<hex>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EventId(pub u64);

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:x}", self.0)
    }
}

impl Serialize for EventId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Timestamp or duration in microseconds
///
/// `None` stands for a value that could not be computed (missing or
/// non-numeric input) and serializes as `null`. Integral values serialize as
/// JSON integers so `5ms` becomes `5000` rather than `5000.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Microseconds(Option<f64>);

impl Microseconds {
    /// Convert a millisecond value, passing through anything non-finite as unknown
    #[must_use]
    pub fn from_millis(millis: Option<f64>) -> Self {
        Self(millis.map(|ms| ms * 1000.0).filter(|us| us.is_finite()))
    }

    #[must_use]
    pub fn value(self) -> Option<f64> {
        self.0
    }
}

impl Serialize for Microseconds {
    #[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            Some(us) if us.fract() == 0.0 && us.abs() <= MAX_EXACT_INTEGER => {
                serializer.serialize_i64(us as i64)
            }
            Some(us) => serializer.serialize_f64(us),
            None => serializer.serialize_none(),
        }
    }
}
