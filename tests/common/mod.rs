//! Common Test Utilities
//!
//! Shared helpers for the unit and integration test binaries.

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use std::path::Path;
use std::process::{Command, Output};

/// The concrete timestamp used throughout the tests (2023-11-14T22:13:20Z)
pub const SAMPLE_SECONDS: i64 = 1_700_000_000;

/// Bucket containing SAMPLE_SECONDS
pub const SAMPLE_BUCKET: i64 = 28_333_333;

/// UTC date-time for whole Unix seconds
pub fn utc(seconds: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(seconds, 0).single().unwrap()
}

/// Run the minute-bucket binary with a clean MINUTE_BUCKET_* environment
pub fn run_cli(args: &[&str]) -> Output {
    cli_command(args).output().expect("failed to run minute-bucket")
}

/// Like run_cli, but from `dir` so ./config.toml resolves there
pub fn run_cli_in(dir: &Path, args: &[&str]) -> Output {
    cli_command(args)
        .current_dir(dir)
        .output()
        .expect("failed to run minute-bucket")
}

fn cli_command(args: &[&str]) -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_minute-bucket"));
    command.args(args);
    for (key, _) in std::env::vars() {
        if key.starts_with("MINUTE_BUCKET_") {
            command.env_remove(key);
        }
    }
    command.env_remove("RUST_LOG");
    command
}

/// Stdout of a successful run, trimmed
pub fn run_cli_ok(args: &[&str]) -> String {
    let output = run_cli(args);
    assert!(
        output.status.success(),
        "minute-bucket {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// Parse JSON stdout of a successful run
pub fn run_cli_json(args: &[&str]) -> serde_json::Value {
    let mut full = vec!["--format", "json"];
    full.extend_from_slice(args);
    serde_json::from_str(&run_cli_ok(&full)).expect("stdout is not JSON")
}
