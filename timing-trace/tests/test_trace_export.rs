use serde_json::Value;
use timing_trace::export::{save_trace_of_timings, TraceEventExporter};
use timing_trace::timing::RunResults;

const FIXTURE: &str = "tests/fixtures/results.json";

fn export_fixture() -> Value {
    let results = RunResults::from_file(FIXTURE).expect("Failed to load fixture");
    let exporter = TraceEventExporter::from_entries(results.entries());

    let mut buffer = Vec::new();
    exporter.export(&mut buffer).expect("Failed to export trace");

    let json_str = String::from_utf8(buffer).expect("Invalid UTF-8");
    serde_json::from_str(&json_str).expect("Invalid JSON")
}

#[test]
fn test_export_creates_valid_json() {
    let parsed = export_fixture();

    assert!(parsed.get("traceEvents").is_some());
    assert_eq!(parsed["traceEvents"].as_array().unwrap().len(), 7);
}

#[test]
fn test_export_preserves_order_and_ids() {
    let parsed = export_fixture();
    let events = parsed["traceEvents"].as_array().unwrap();

    let ids: Vec<&str> = events.iter().map(|e| e["id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["0x0", "0x1", "0x2", "0x3", "0x4", "0x5", "0x6"]);

    assert_eq!(events[0]["name"], "lh:init:config");
    assert_eq!(events[6]["name"], "navigation");
}

#[test]
fn test_export_lanes() {
    let parsed = export_fixture();
    let events = parsed["traceEvents"].as_array().unwrap();

    assert_eq!(events[0]["pid"], "Measurements");
    assert_eq!(events[0]["tid"], "TopLevelMeasures");
    assert_eq!(events[2]["tid"], "Gatherers");
    assert_eq!(events[3]["pid"], "Marks");
    assert!(events[3].get("tid").is_none());
    assert_eq!(events[4]["pid"], "Primary");
    assert_eq!(events[5]["tid"], "Audits");
    assert_eq!(events[6]["pid"], "Primary");
    assert_eq!(events[6]["cat"], "navigation");
}

#[test]
fn test_export_timestamps_in_microseconds() {
    let parsed = export_fixture();
    let events = parsed["traceEvents"].as_array().unwrap();

    assert_eq!(events[1]["ts"], 12500);
    assert_eq!(events[1]["dur"], 10_400_250);
    assert_eq!(events[4]["ts"], 512_750);
    assert_eq!(events[4]["dur"], 48500);
}

#[test]
fn test_export_phases() {
    let parsed = export_fixture();
    let events = parsed["traceEvents"].as_array().unwrap();

    assert_eq!(events[3]["ph"], "n");
    assert_eq!(events[3]["s"], "t");
    for (idx, event) in events.iter().enumerate().filter(|(idx, _)| *idx != 3) {
        assert_eq!(event["ph"], "X", "event {idx} should be complete");
        assert!(event.get("s").is_none(), "event {idx} should have no scope");
    }
}

#[test]
fn test_export_resource_and_metadata() {
    let parsed = export_fixture();
    let resource = &parsed["traceEvents"][4];

    assert_eq!(resource["name"], "resource");
    assert_eq!(resource["cat"], "resource");
    assert_eq!(resource["args"]["url"], "https://example.com/app.js");
    assert_eq!(resource["args"]["initiatorType"], "script");
    assert_eq!(resource["args"]["transferSize"], 10240);
    assert!(resource["args"].get("name").is_none());
    assert!(resource["args"].get("entryType").is_none());

    let audit = &parsed["traceEvents"][5];
    assert_eq!(audit["args"]["detail"]["gatherMode"], false);
    assert_eq!(audit["args"]["startTime"], 9000);
    assert_eq!(audit["args"]["duration"], 3);
}

#[test]
fn test_save_trace_writes_file() {
    let results = RunResults::from_file(FIXTURE).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("fixture.trace.json");

    let saved = save_trace_of_timings(results.entries(), Some(&target)).unwrap();
    assert_eq!(saved, target);

    let content = std::fs::read_to_string(&target).unwrap();
    let parsed: Value = serde_json::from_str(&content).unwrap();
    assert_eq!(parsed["traceEvents"].as_array().unwrap().len(), 7);
}
