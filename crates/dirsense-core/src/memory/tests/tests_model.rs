//! Tests for memory model serialization

#![allow(clippy::expect_used)]

use crate::memory::{FileContents, Record, Summary};
use chrono::NaiveDate;

fn sample_record() -> Record {
    let timestamp = NaiveDate::from_ymd_opt(2024, 5, 1)
        .and_then(|d| d.and_hms_micro_opt(10, 11, 12, 123_456))
        .expect("valid timestamp");
    Record {
        folder_path: "/data/reports".to_string(),
        timestamp,
        summary: Summary {
            total_files: 2,
            total_folders: 1,
            file_types: [("text/plain".to_string(), 1)].into_iter().collect(),
            largest_file: Some("/data/reports/a.txt".to_string()),
            largest_size: 2048,
        },
        details: vec!["a.txt (text/plain, 2.00 KB)".to_string()],
        file_contents: [("/data/reports/a.txt", "hello")].into_iter().collect(),
        description: "Quarterly reports.".to_string(),
        reasoning: None,
    }
}

#[test]
fn test_file_contents_preserve_document_order() {
    let json = r#"{"/z": "last letter", "/a": "first letter", "/m": "middle"}"#;

    let contents: FileContents = serde_json::from_str(json).expect("deserialize");
    let paths: Vec<&str> = contents.iter().map(|(p, _)| p).collect();

    assert_eq!(paths, vec!["/z", "/a", "/m"]);
    let back = serde_json::to_string(&contents).expect("serialize");
    assert_eq!(back, r#"{"/z":"last letter","/a":"first letter","/m":"middle"}"#);
}

#[test]
fn test_file_contents_insert_replaces_in_place() {
    let mut contents = FileContents::new();
    contents.insert("/a", "one");
    contents.insert("/b", "two");
    contents.insert("/a", "three");

    assert_eq!(contents.len(), 2);
    assert_eq!(contents.get("/a"), Some("three"));
    assert_eq!(contents.snippets().collect::<Vec<_>>(), vec!["three", "two"]);
}

#[test]
fn test_record_timestamp_is_naive_iso8601() {
    let value = serde_json::to_value(sample_record()).expect("serialize");

    assert_eq!(value["timestamp"], "2024-05-01T10:11:12.123456");
    assert!(value.get("reasoning").is_none());
}

#[test]
fn test_record_reads_legacy_entry_without_reasoning() {
    let json = r#"{
        "folder_path": "C:\\docs",
        "timestamp": "2024-12-30T18:04:05.000001",
        "summary": {
            "total_files": 1,
            "total_folders": 0,
            "file_types": {},
            "largest_file": null,
            "largest_size": 0
        },
        "details": ["x.bin (Unknown, 0.00 KB)"],
        "file_contents": {"C:\\docs\\x.bin": "Content reading not supported for this file type."},
        "description": "One empty binary."
    }"#;

    let record: Record = serde_json::from_str(json).expect("deserialize");

    assert_eq!(record.folder_path, "C:\\docs");
    assert_eq!(record.summary.largest_file, None);
    assert_eq!(record.reasoning, None);
    assert_eq!(record.description, "One empty binary.");
}

#[test]
fn test_record_tolerates_missing_and_unknown_fields() {
    let json = r#"{"description": "partial", "future_field": [1, 2, 3]}"#;

    let record: Record = serde_json::from_str(json).expect("deserialize");

    assert_eq!(record.description, "partial");
    assert_eq!(record.summary, Summary::default());
    assert!(record.file_contents.is_empty());
}

#[test]
fn test_with_reasoning() {
    let record = sample_record().with_reasoning("Looks like finance data.");
    assert_eq!(record.reasoning.as_deref(), Some("Looks like finance data."));

    let value = serde_json::to_value(&record).expect("serialize");
    assert_eq!(value["reasoning"], "Looks like finance data.");
}

#[test]
fn test_summary_largest_size_kb() {
    let summary = Summary {
        largest_size: 3072,
        ..Summary::default()
    };
    assert!((summary.largest_size_kb() - 3.0).abs() < f64::EPSILON);
}
