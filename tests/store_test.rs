//! Report store tests.
//!
//! Persistence round-trips, recency windows, and tolerance of a damaged
//! collection file.

use event_report_rust::model::Report;
use event_report_rust::store::{ReportStore, STORE_FILE_NAME};
use tempfile::tempdir;

fn report(id: &str, name: &str) -> Report {
    Report {
        id: id.to_string(),
        name: name.to_string(),
        created_at: "2024-05-01T10:00:00.000Z".to_string(),
        ..Default::default()
    }
}

/// A store over a missing file starts empty.
#[test]
fn test_store_empty() {
    let dir = tempdir().expect("Failed to create temp dir");
    let store = ReportStore::open(dir.path().join(STORE_FILE_NAME));

    assert_eq!(store.len(), 0);
    assert!(store.is_empty());
    assert!(store.all().is_empty());
}

/// Appends survive a reopen in the same order.
#[test]
fn test_store_append_and_reload() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join(STORE_FILE_NAME);

    let mut store = ReportStore::open(&path);
    store.append(report("1", "first")).expect("append failed");
    store.append(report("2", "second")).expect("append failed");
    store.append(report("3", "third")).expect("append failed");

    // simulated restart
    let reloaded = ReportStore::open(&path);
    assert_eq!(reloaded.len(), 3);

    let ids: Vec<&str> = reloaded.all().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3"]);
    assert_eq!(reloaded.all()[0].name, "first");
}

/// Every append rewrites the persisted file.
#[test]
fn test_store_rewrites_file_on_append() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join(STORE_FILE_NAME);

    let mut store = ReportStore::open(&path);
    store.append(report("1", "first")).expect("append failed");
    assert!(path.exists());

    let after_one = std::fs::read_to_string(&path).unwrap();
    assert!(after_one.contains("\"id\": \"1\""));

    store.append(report("2", "second")).expect("append failed");
    let after_two = std::fs::read_to_string(&path).unwrap();
    assert!(after_two.contains("\"id\": \"1\""));
    assert!(after_two.contains("\"id\": \"2\""));
}

/// recent(n) returns the last min(n, len) reports in insertion order.
#[test]
fn test_store_recent_window() {
    let dir = tempdir().expect("Failed to create temp dir");
    let mut store = ReportStore::open(dir.path().join(STORE_FILE_NAME));

    for i in 1..=8 {
        store
            .append(report(&i.to_string(), &format!("report {}", i)))
            .expect("append failed");
    }

    let recent = store.recent(5);
    assert_eq!(recent.len(), 5);
    let ids: Vec<&str> = recent.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["4", "5", "6", "7", "8"]);

    // smaller collections return everything
    assert_eq!(store.recent(100).len(), 8);
}

/// A damaged collection file loads as empty, not as an error.
#[test]
fn test_store_corrupted_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join(STORE_FILE_NAME);

    std::fs::write(&path, "[{\"id\": \"1\", trunc").unwrap();

    let store = ReportStore::open(&path);
    assert!(store.is_empty());
}

/// Non-array JSON is also treated as no data.
#[test]
fn test_store_wrong_shape() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join(STORE_FILE_NAME);

    std::fs::write(&path, "{\"reports\": 3}").unwrap();

    let store = ReportStore::open(&path);
    assert!(store.is_empty());
}

/// Records with missing fields load with defaults.
#[test]
fn test_store_partial_records() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join(STORE_FILE_NAME);

    std::fs::write(&path, r#"[{"id": "9", "name": "only a name"}]"#).unwrap();

    let store = ReportStore::open(&path);
    assert_eq!(store.len(), 1);
    assert_eq!(store.get("9").unwrap().name, "only a name");
    assert_eq!(store.get("9").unwrap().email, "");
}

/// Lookup by id.
#[test]
fn test_store_get() {
    let dir = tempdir().expect("Failed to create temp dir");
    let mut store = ReportStore::open(dir.path().join(STORE_FILE_NAME));

    store.append(report("10", "found")).expect("append failed");

    assert_eq!(store.get("10").unwrap().name, "found");
    assert!(store.get("11").is_none());
}
