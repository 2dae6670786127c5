//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run and verify outputs. Every
//! invocation gets its own HOME so config and log table land in a
//! throwaway directory.

use std::process::Command;
use tempfile::TempDir;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(home: &TempDir, args: &[&str]) -> (String, String, i32) {
    // Overriding HOME must not move cargo's own state.
    let cargo_home = std::env::var_os("CARGO_HOME").unwrap_or_else(|| {
        let mut dir = std::env::var_os("HOME").unwrap_or_default();
        dir.push("/.cargo");
        dir
    });

    let output = Command::new("cargo")
        .args(["run", "-p", "ironmind-cli", "--"])
        .args(args)
        .env("HOME", home.path())
        .env("CARGO_HOME", cargo_home)
        .output()
        .expect("failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn help_lists_all_subcommands() {
    let home = TempDir::new().unwrap();
    let (stdout, _stderr, code) = run_cli(&home, &["--help"]);
    assert_eq!(code, 0, "help failed");
    for name in ["log", "stats", "predict", "best", "config"] {
        assert!(stdout.contains(name), "missing subcommand: {name}");
    }
}

#[test]
fn log_add_then_view_round_trips() {
    let home = TempDir::new().unwrap();

    let (stdout, stderr, code) = run_cli(
        &home,
        &[
            "log", "add", "--weight", "30", "--workout", "push", "--protein", "120",
            "--leetcode", "2", "--hours", "4.5", "--commits", "3", "--focus", "8", "--fog", "2",
        ],
    );
    assert_eq!(code, 0, "log add failed: {stderr}");
    assert!(stdout.contains("Push"), "got: {stdout}");

    let (stdout, stderr, code) = run_cli(&home, &["log", "view", "--last", "5"]);
    assert_eq!(code, 0, "log view failed: {stderr}");

    let records: serde_json::Value = serde_json::from_str(&stdout).expect("view output is JSON");
    let rows = records.as_array().expect("view output is an array");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["workout_type"], "Push");
    assert_eq!(rows[0]["coding_hours"], 4.5);
    assert_eq!(rows[0]["focus_score"], 8.0);
}

#[test]
fn add_rejects_out_of_domain_focus() {
    let home = TempDir::new().unwrap();
    let (_stdout, stderr, code) = run_cli(
        &home,
        &[
            "log", "add", "--weight", "30", "--workout", "push", "--protein", "120",
            "--focus", "11",
        ],
    );
    assert_ne!(code, 0);
    assert!(stderr.contains("11"), "got: {stderr}");
}

#[test]
fn stats_hints_at_minimum_history_when_too_short() {
    let home = TempDir::new().unwrap();
    let (_stdout, stderr, code) = run_cli(&home, &["stats", "summary"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("at least 7 days"), "got: {stderr}");
}
