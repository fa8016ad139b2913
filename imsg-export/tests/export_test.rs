//! Integration tests for [`imsg_export::export_messages`].
//!
//! Feeds NDJSON through the exporter with filters built from ISO-8601 strings and checks the
//! emitted records, including attachment resolution against real files.

use std::fs::File;

use imsg_core::MessageFilter;
use imsg_export::{export_messages, ExportConfig, ExportStats};
use serde_json::Value;
use tempfile::tempdir;

fn run(input: &str, filter: &MessageFilter) -> (ExportStats, Vec<Value>) {
    let mut out = Vec::new();
    let stats = export_messages(input.as_bytes(), &mut out, filter).expect("export succeeds");
    let records = String::from_utf8(out)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    (stats, records)
}

/// **Test: Date range and participants both apply, order is preserved.**
///
/// **Setup:** Five messages across two days from three senders; filter `alice,bob` on
/// `[2024-06-01T00:00:00Z, 2024-06-02T00:00:00Z)`.
/// **Action:** `export_messages`.
/// **Expected:** Only in-range alice/bob messages are written, in input order; the message exactly
/// at the end bound is dropped.
#[test]
fn test_export_applies_range_and_participants() {
    let input = [
        r#"{"rowid":1,"sender":"Alice","date":"2024-06-01T00:00:00Z","text":"first"}"#,
        r#"{"rowid":2,"sender":"carol","date":"2024-06-01T08:00:00Z"}"#,
        r#"{"rowid":3,"sender":"BOB","date":"2024-06-01T23:59:59.999Z"}"#,
        r#"{"rowid":4,"sender":"alice","date":"2024-06-02T00:00:00Z"}"#,
        r#"{"rowid":5,"sender":"bob","date":"2024-05-31T23:59:59Z"}"#,
    ]
    .join("\n");
    let filter = MessageFilter::from_iso(
        vec!["alice".to_string(), "bob".to_string()],
        Some("2024-06-01T00:00:00Z"),
        Some("2024-06-02T00:00:00Z"),
    )
    .unwrap();

    let (stats, records) = run(&input, &filter);

    assert_eq!(stats.read, 5);
    assert_eq!(stats.written, 2);
    assert_eq!(stats.skipped, 0);
    let rowids: Vec<i64> = records.iter().map(|r| r["rowid"].as_i64().unwrap()).collect();
    assert_eq!(rowids, vec![1, 3]);
    assert_eq!(records[0]["date"], "2024-06-01T00:00:00.000Z");
    assert_eq!(records[0]["text"], "first");
    assert_eq!(records[1]["date"], "2024-06-01T23:59:59.999Z");
}

/// **Test: Attachments are resolved against the filesystem.**
///
/// **Setup:** Temp dir holding one file and one subdirectory; a message with three attachments
/// (the file, the directory, a missing path).
/// **Action:** `export_messages` with an unrestricted filter.
/// **Expected:** Only the real file is reported present; display names follow transfer name,
/// filename, then `(unknown)`.
#[test]
fn test_export_resolves_attachments() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("IMG_0001.HEIC");
    File::create(&file_path).unwrap();
    let sub_dir = dir.path().join("folder");
    std::fs::create_dir(&sub_dir).unwrap();

    let message = serde_json::json!({
        "sender": "alice",
        "date": "2024-06-01T10:00:00Z",
        "attachments": [
            {"filename": "IMG_0001.HEIC", "transfer_name": "Beach.heic", "path": file_path.to_string_lossy(), "mime_type": "image/heic", "total_bytes": 2048},
            {"filename": "folder", "path": sub_dir.to_string_lossy()},
            {"path": dir.path().join("gone.pdf").to_string_lossy()}
        ]
    });

    let (stats, records) = run(&message.to_string(), &MessageFilter::default());

    assert_eq!(stats.written, 1);
    let attachments = records[0]["attachments"].as_array().unwrap();
    assert_eq!(attachments.len(), 3);

    assert_eq!(attachments[0]["display_name"], "Beach.heic");
    assert_eq!(attachments[0]["original_path"], &*file_path.to_string_lossy());
    assert_eq!(attachments[0]["mime_type"], "image/heic");
    assert_eq!(attachments[0]["total_bytes"], 2048);
    assert_eq!(attachments[0]["missing"], false);

    assert_eq!(attachments[1]["display_name"], "folder");
    assert_eq!(attachments[1]["missing"], true);

    assert_eq!(attachments[2]["display_name"], "(unknown)");
    assert_eq!(attachments[2]["missing"], true);
}

/// **Test: Config-built filter drives the export.**
///
/// **Setup:** `ExportConfig` from a lookup with IMSG_PARTICIPANTS and IMSG_START.
/// **Action:** `config.filter()` then `export_messages`.
/// **Expected:** Only the matching sender at or after the start bound is written.
#[test]
fn test_export_with_config_filter() {
    let config = ExportConfig::from_lookup(|key| match key {
        "IMSG_PARTICIPANTS" => Some("+15551234567".to_string()),
        "IMSG_START" => Some("2024-06-01T12:00:00+02:00".to_string()),
        _ => None,
    });
    let filter = config.filter().unwrap();
    let input = [
        r#"{"rowid":1,"sender":"+15551234567","date":"2024-06-01T09:59:59Z"}"#,
        r#"{"rowid":2,"sender":"+15551234567","date":"2024-06-01T10:00:00Z"}"#,
        r#"{"rowid":3,"sender":"+15550000000","date":"2024-06-01T11:00:00Z"}"#,
    ]
    .join("\n");

    let (stats, records) = run(&input, &filter);

    assert_eq!(stats.written, 1);
    assert_eq!(records[0]["rowid"], 2);
}
