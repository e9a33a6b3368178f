//! Lane and phase classification for timing entries.
//!
//! Trace viewers group events by `pid` and `tid`. Timing entries carry no such
//! information, so lanes are derived from the entry type and, for measures,
//! from the measure's name prefix.
//!
//! # Classification Rules
//!
//! 1. **Entry type** picks the process lane
//!    - `mark` → `Marks`
//!    - `measure` → `Measurements`
//!    - anything else (including `resource` and a missing type) → `Primary`
//!
//! 2. **Name prefix** picks the thread lane, for measures only
//!    - `audit-` → `Audits`
//!    - `gather-` → `Gatherers`
//!    - otherwise → `TopLevelMeasures`
//!
//! 3. **Duration** picks the phase: zero-length entries become instants

use crate::domain::{Phase, ProcessLane, Scope, ThreadLane};

/// Kind of timing entry, parsed from its `entryType` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryKind {
    /// `performance.mark()` entry
    Mark,
    /// `performance.measure()` entry
    Measure,
    /// Resource load timing entry
    Resource,
    /// Any other or missing entry type
    #[default]
    Other,
}

impl EntryKind {
    #[must_use]
    pub fn from_entry_type(entry_type: Option<&str>) -> Self {
        match entry_type {
            Some("mark") => EntryKind::Mark,
            Some("measure") => EntryKind::Measure,
            Some("resource") => EntryKind::Resource,
            _ => EntryKind::Other,
        }
    }

    /// Process lane for entries of this kind.
    ///
    /// Resource entries share the `Primary` lane with unrecognised types.
    #[must_use]
    pub fn process_lane(self) -> ProcessLane {
        match self {
            EntryKind::Mark => ProcessLane::Marks,
            EntryKind::Measure => ProcessLane::Measurements,
            EntryKind::Resource | EntryKind::Other => ProcessLane::Primary,
        }
    }
}

/// Thread lane for an entry, `None` for everything except measures.
///
/// A measure with no usable name falls into `TopLevelMeasures`.
#[must_use]
pub fn thread_lane(kind: EntryKind, name: Option<&str>) -> Option<ThreadLane> {
    if kind != EntryKind::Measure {
        return None;
    }

    let name = name.unwrap_or_default();
    let lane = if name.starts_with("audit-") {
        ThreadLane::Audits
    } else if name.starts_with("gather-") {
        ThreadLane::Gatherers
    } else {
        ThreadLane::TopLevelMeasures
    };
    Some(lane)
}

/// Phase and scope for an entry's duration in milliseconds.
///
/// Only an exact zero makes an instant; a missing or non-numeric duration is
/// treated as a complete event.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn phase_for_duration(duration: Option<f64>) -> (Phase, Option<Scope>) {
    match duration {
        Some(ms) if ms == 0.0 => (Phase::NestableInstant, Some(Scope::Thread)),
        _ => (Phase::Complete, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_kind_from_type() {
        assert_eq!(EntryKind::from_entry_type(Some("mark")), EntryKind::Mark);
        assert_eq!(EntryKind::from_entry_type(Some("measure")), EntryKind::Measure);
        assert_eq!(EntryKind::from_entry_type(Some("resource")), EntryKind::Resource);
        assert_eq!(EntryKind::from_entry_type(Some("navigation")), EntryKind::Other);
        assert_eq!(EntryKind::from_entry_type(Some("Mark")), EntryKind::Other);
        assert_eq!(EntryKind::from_entry_type(None), EntryKind::Other);
    }

    #[test]
    fn test_process_lanes() {
        assert_eq!(EntryKind::Mark.process_lane(), ProcessLane::Marks);
        assert_eq!(EntryKind::Measure.process_lane(), ProcessLane::Measurements);
        assert_eq!(EntryKind::Other.process_lane(), ProcessLane::Primary);
    }

    #[test]
    fn test_resource_shares_primary_lane() {
        assert_eq!(EntryKind::Resource.process_lane(), ProcessLane::Primary);
    }

    #[test]
    fn test_measure_thread_lanes_by_prefix() {
        let lane = |name| thread_lane(EntryKind::Measure, Some(name));
        assert_eq!(lane("audit-first-contentful-paint"), Some(ThreadLane::Audits));
        assert_eq!(lane("gather-loadPage"), Some(ThreadLane::Gatherers));
        assert_eq!(lane("lh:runner:run"), Some(ThreadLane::TopLevelMeasures));
        // prefix match is exact, not a substring search
        assert_eq!(lane("pre-audit-x"), Some(ThreadLane::TopLevelMeasures));
        assert_eq!(lane("audit"), Some(ThreadLane::TopLevelMeasures));
    }

    #[test]
    fn test_unnamed_measure_is_top_level() {
        assert_eq!(thread_lane(EntryKind::Measure, None), Some(ThreadLane::TopLevelMeasures));
    }

    #[test]
    fn test_non_measures_have_no_thread_lane() {
        assert_eq!(thread_lane(EntryKind::Mark, Some("audit-foo")), None);
        assert_eq!(thread_lane(EntryKind::Resource, Some("gather-foo")), None);
        assert_eq!(thread_lane(EntryKind::Other, None), None);
    }

    #[test]
    fn test_phase_for_duration() {
        assert_eq!(phase_for_duration(Some(0.0)), (Phase::NestableInstant, Some(Scope::Thread)));
        assert_eq!(phase_for_duration(Some(-0.0)), (Phase::NestableInstant, Some(Scope::Thread)));
        assert_eq!(phase_for_duration(Some(0.001)), (Phase::Complete, None));
        assert_eq!(phase_for_duration(None), (Phase::Complete, None));
    }
}
