//! End-to-end checks of the mv-cli binary output.

use std::path::PathBuf;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

fn unique_temp_dir(prefix: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    dir.push(format!("{}_{}", prefix, nanos));
    dir
}

fn mv_cli() -> Command {
    Command::new(env!("CARGO_BIN_EXE_mv-cli"))
}

#[test]
fn calc_json_stays_parseable_with_corrupt_state() {
    let dir = unique_temp_dir("mv_cli_corrupt_state");
    std::fs::create_dir_all(&dir).unwrap();
    let state = dir.join("state.json");
    std::fs::write(&state, "{ not json").unwrap();

    let output = mv_cli()
        .args(["calc", "--json", "--no-save", "--state"])
        .arg(&state)
        .output()
        .unwrap();
    assert!(output.status.success());

    let doc: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(doc["inputs"]["length_m"], 172.0);
    assert_eq!(doc["results"]["nozzle_qty"], 122);
    assert!(String::from_utf8_lossy(&output.stderr).contains("saved inputs unreadable"));
}

#[test]
fn malformed_set_entry_is_skipped() {
    let dir = unique_temp_dir("mv_cli_bad_set");
    let state = dir.join("state.json");

    let output = mv_cli()
        .args(["calc", "--json", "--no-save", "--set", "D3_belts=one", "--set", "D3_belts=1"])
        .arg("--state")
        .arg(&state)
        .output()
        .unwrap();
    assert!(output.status.success());

    let doc: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(doc["inputs"]["belt_count"], 1.0);
}

#[test]
fn reset_removes_state_file() {
    let dir = unique_temp_dir("mv_cli_reset");
    let state = dir.join("state.json");

    let saved = mv_cli()
        .args(["calc", "--length", "60", "--state"])
        .arg(&state)
        .output()
        .unwrap();
    assert!(saved.status.success());
    assert!(state.exists());

    let reset = mv_cli().arg("reset").arg("--state").arg(&state).output().unwrap();
    assert!(reset.status.success());
    assert!(!state.exists());
}
