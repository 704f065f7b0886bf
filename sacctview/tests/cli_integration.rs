//! Integration tests for sacctview CLI

use std::io::Write;
use std::process::{Command, Stdio};

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/sacct_sample.txt");

fn run_sacctview(args: &[&str]) -> (String, String, bool) {
    let output = Command::new(env!("CARGO_BIN_EXE_sacctview"))
        .args(args)
        .env_remove("SACCTVIEW_LOG")
        .env_remove("SACCTVIEW_REMOTE")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

/// Run against the fixture and return the admitted roots from JSON output
fn roots(args: &[&str]) -> Vec<String> {
    let mut all = vec!["--input", FIXTURE, "--output", "json"];
    all.extend(args);
    let (stdout, stderr, success) = run_sacctview(&all);

    assert!(success, "sacctview failed: {stderr}");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("Invalid JSON output");
    parsed
        .as_array()
        .unwrap()
        .iter()
        .map(|job| job["root"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_cli_help() {
    let (stdout, _, success) = run_sacctview(&["--help"]);

    assert!(success);
    assert!(stdout.contains("sacctview"));
    assert!(stdout.contains("--starttime"));
    assert!(stdout.contains("--endtime"));
    assert!(stdout.contains("--name"));
    assert!(stdout.contains("--include"));
    assert!(stdout.contains("--exclude"));
    assert!(stdout.contains("--remote"));
}

#[test]
fn test_cli_version() {
    let (stdout, _, success) = run_sacctview(&["--version"]);

    assert!(success);
    assert!(stdout.contains("sacctview"));
}

#[test]
fn test_text_output_numbers_jobs() {
    let (stdout, _, success) = run_sacctview(&["--input", FIXTURE]);

    assert!(success);
    assert!(stdout.contains("--[ 1. job ]"));
    assert!(stdout.contains("--[ 3. job ]"));
    assert!(!stdout.contains("--[ 4. job ]"));
    assert!(stdout.contains("JobID"));
    assert!(stdout.contains("CANCELLED by 1000"));
    // PREEMPTED is outside the default include states
    assert!(!stdout.contains("hifi_diff_tiny"));
}

#[test]
fn test_default_states_keep_table_order() {
    assert_eq!(roots(&[]), vec!["9", "5", "123"]);
}

#[test]
fn test_name_filter() {
    assert_eq!(roots(&["-n", "hifi_diff"]), vec!["9", "5"]);
}

#[test]
fn test_exclude_suppresses_job_with_cancelled_step() {
    assert_eq!(roots(&["-n", "hifi_diff", "-x", "CANC"]), vec!["9"]);
}

#[test]
fn test_include_override() {
    assert_eq!(roots(&["-i", "PREEMPT"]), vec!["12"]);
}

#[test]
fn test_ignore_case() {
    assert!(roots(&["-n", "HIFI_DIFF"]).is_empty());
    assert_eq!(roots(&["-n", "HIFI_DIFF", "--ignore-case"]), vec!["9", "5"]);
}

#[test]
fn test_job_rows_are_complete_and_anchored() {
    let (stdout, _, success) =
        run_sacctview(&["--input", FIXTURE, "-o", "json", "-n", "^prep$"]);

    assert!(success);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let rows = parsed[0]["rows"].as_array().unwrap();
    let ids: Vec<&str> = rows.iter().map(|r| r["JobID"].as_str().unwrap()).collect();

    assert_eq!(ids, vec!["123", "123.batch"]);
}

#[test]
fn test_no_match_is_silent() {
    let (stdout, _, success) = run_sacctview(&["--input", FIXTURE, "-n", "nomatch"]);

    assert!(success);
    assert!(stdout.trim().is_empty());
}

#[test]
fn test_invalid_pattern() {
    let (stdout, stderr, success) = run_sacctview(&["--input", FIXTURE, "-x", "(CANC"]);

    assert!(!success);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("(CANC"));
}

#[test]
fn test_end_before_start() {
    let (_, stderr, success) = run_sacctview(&[
        "--input",
        FIXTURE,
        "-s",
        "2020-11-21",
        "-e",
        "2020-11-20T12:00",
    ]);

    assert!(!success);
    assert!(stderr.contains("before the starttime"));
}

#[test]
fn test_invalid_date() {
    let (_, stderr, success) = run_sacctview(&["--input", FIXTURE, "-s", "20.11.2020"]);

    assert!(!success);
    assert!(stderr.contains("YYYY-MM-DD"));
}

#[test]
fn test_malformed_table() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"JobID|User\n5|alice\n").unwrap();
    let path = file.path().to_string_lossy().to_string();

    let (_, stderr, success) = run_sacctview(&["--input", &path]);

    assert!(!success);
    assert!(stderr.contains("malformed accounting table"));
}

#[test]
fn test_missing_input_file() {
    let (_, stderr, success) = run_sacctview(&["--input", "/nonexistent/sacct.txt"]);

    assert!(!success);
    assert!(stderr.contains("Error:"));
}

#[test]
fn test_stdin_input() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_sacctview"))
        .args(["--input", "-", "-o", "json", "-n", "hifi"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("Failed to spawn sacctview");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(std::fs::read(FIXTURE).unwrap().as_slice())
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 2);
}
