use serde::Serialize;
use serde_json::{Map, Value};

use crate::classification::{phase_for_duration, thread_lane, EntryKind};
use crate::domain::{EventId, Microseconds, Phase, ProcessLane, Scope, ThreadLane};
use crate::timing::TimingEntry;

/// Entry fields never copied into `args`. `toJSON` is a serialization hook on
/// browser `PerformanceEntry` objects, not data.
const EXCLUDED_ARG_KEYS: [&str; 3] = ["entryType", "name", "toJSON"];

/// Event name used for every resource entry; the real name moves to `args.url`
const RESOURCE_EVENT_NAME: &str = "resource";

/// Chrome Trace Event produced from one timing entry
/// Format reference: https://docs.google.com/document/d/1CvAClvFfyA5R-PhYUmn5OOQtYMH4h6I0nSsKchNAySU/preview
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraceEvent {
    /// Event label, copied from the entry (`resource` for resource entries)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    /// Category, copied from `entryType`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cat: Option<Value>,
    /// Start timestamp in microseconds
    pub ts: Microseconds,
    /// Duration in microseconds
    pub dur: Microseconds,
    pub pid: ProcessLane,
    /// Only set for measures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tid: Option<ThreadLane>,
    pub ph: Phase,
    /// Only set for instant events
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s: Option<Scope>,
    pub id: EventId,
    /// Every other field of the entry, in input order
    pub args: Map<String, Value>,
}

impl TraceEvent {
    /// Build the trace event for a single entry
    #[must_use]
    pub fn from_entry(entry: &TimingEntry, id: EventId) -> Self {
        let kind = EntryKind::from_entry_type(entry.entry_type().and_then(Value::as_str));
        let mut name = entry.name().cloned();

        let mut args: Map<String, Value> = entry
            .fields()
            .iter()
            .filter(|(key, _)| !EXCLUDED_ARG_KEYS.contains(&key.as_str()))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        // Lane is picked from the original name, before the resource rename
        let tid = thread_lane(kind, name.as_ref().and_then(Value::as_str));

        if kind == EntryKind::Resource {
            match name.replace(Value::from(RESOURCE_EVENT_NAME)) {
                Some(url) => {
                    args.insert("url".to_string(), url);
                }
                // an unnamed resource has no url, even if the entry carried one
                None => args.retain(|key, _| key != "url"),
            }
        }

        let (ph, s) = phase_for_duration(entry.duration());

        Self {
            name,
            cat: entry.entry_type().cloned(),
            ts: Microseconds::from_millis(entry.start_time()),
            dur: Microseconds::from_millis(entry.duration()),
            pid: kind.process_lane(),
            tid,
            ph,
            s,
            id,
            args,
        }
    }
}

/// Map timing entries to trace events, one per entry and in the same order.
///
/// Ids count up from `0x0` within a single call.
#[must_use]
pub fn generate_trace_events(entries: &[TimingEntry]) -> Vec<TraceEvent> {
    entries
        .iter()
        .zip(0u64..)
        .map(|(entry, id)| TraceEvent::from_entry(entry, EventId(id)))
        .collect()
}
