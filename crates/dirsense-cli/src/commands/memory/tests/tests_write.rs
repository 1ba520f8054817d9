//! Tests for memory inspection output

#![allow(clippy::expect_used)]

use crate::commands::memory::{write_list, write_record};
use chrono::NaiveDate;
use dirsense_core::{MemoryStore, Record};
use tempfile::TempDir;

fn record(folder_path: &str, day: u32) -> Record {
    Record {
        folder_path: folder_path.to_string(),
        timestamp: NaiveDate::from_ymd_opt(2025, 3, day)
            .and_then(|d| d.and_hms_opt(9, 30, 0))
            .expect("valid timestamp"),
        description: format!("Description of {folder_path}"),
        ..Record::default()
    }
}

fn render(f: impl FnOnce(&mut Vec<u8>)) -> String {
    let mut out = Vec::new();
    f(&mut out);
    String::from_utf8(out).expect("utf-8 output")
}

#[test]
fn test_list_empty_memory() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = MemoryStore::new(temp_dir.path().join("folder_memory.json"));

    let output = render(|out| write_list(&store, out).expect("list written"));

    assert!(output.starts_with("No folders remembered in "));
}

#[test]
fn test_list_records() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = MemoryStore::new(temp_dir.path().join("folder_memory.json"));
    store.put("/b", record("/b", 2)).expect("put");
    store.put("/a", record("/a", 1)).expect("put");

    let output = render(|out| write_list(&store, out).expect("list written"));

    assert_eq!(
        output,
        "2025-03-01 09:30:00  /a\n2025-03-02 09:30:00  /b\n\n2 folders remembered\n"
    );
}

#[test]
fn test_show_record_as_json() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = MemoryStore::new(temp_dir.path().join("folder_memory.json"));
    store.put("/a", record("/a", 1)).expect("put");

    let output = render(|out| write_record(&store, "'/a'", out).expect("record written"));
    let shown: Record = serde_json::from_str(&output).expect("valid json");

    assert_eq!(shown, record("/a", 1));
}

#[test]
fn test_show_missing_record() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = MemoryStore::new(temp_dir.path().join("folder_memory.json"));

    let output = render(|out| write_record(&store, "/nowhere", out).expect("record written"));

    assert_eq!(output, "No cached record for /nowhere\n");
}
