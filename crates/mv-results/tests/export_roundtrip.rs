use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use mv_results::*;
use mv_sizing::{DelugeValve, SizingInputs};

fn unique_temp_path(prefix: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    dir.push(format!("{}_{}", prefix, nanos));
    dir.join(EXPORT_FILE_NAME)
}

#[test]
fn write_and_read_export() {
    let path = unique_temp_path("mv_results_export");
    let inputs = SizingInputs {
        length_m: 45.0,
        belt_count: 1.0,
        ..SizingInputs::default()
    };
    let doc = build_export(&inputs, "0.1.0");

    write_export(&path, &doc).unwrap();
    let loaded = read_export(&path).unwrap();

    assert_eq!(loaded, doc);
    assert_eq!(loaded.inputs.length_m, 45.0);
}

#[test]
fn export_json_layout() {
    let doc = build_export(&SizingInputs::default(), "0.1.0");
    let value: serde_json::Value = serde_json::from_str(&to_json(&doc).unwrap()).unwrap();

    assert_eq!(value["inputs"]["length_m"], 172.0);
    assert_eq!(value["results"]["nozzle_qty"], 122);
    assert_eq!(value["results"]["k_selected"], 18);
    assert_eq!(value["results"]["deluge_valve"]["type"], "Selected");
    assert_eq!(value["results"]["deluge_valve"]["size_mm"], 100);
    assert_eq!(value["results"]["k_calc"], doc.results.k_calc);
}

#[test]
fn not_found_valve_serializes_without_size() {
    let doc = build_export(
        &SizingInputs {
            length_m: 1.0,
            ..SizingInputs::default()
        },
        "0.1.0",
    );
    assert_eq!(doc.results.deluge_valve, DelugeValve::NotFound);

    let value: serde_json::Value = serde_json::from_str(&to_json(&doc).unwrap()).unwrap();
    assert_eq!(value["results"]["deluge_valve"]["type"], "NotFound");
    assert!(value["results"]["deluge_valve"].get("size_mm").is_none());
}

#[test]
fn missing_export_is_reported() {
    let path = unique_temp_path("mv_results_missing");
    assert!(matches!(
        read_export(&path),
        Err(ResultsError::ExportNotFound { .. })
    ));
}
