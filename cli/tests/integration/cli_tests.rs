//! Integration tests for argument parsing and input validation

#![allow(clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;

fn wplaunch() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("wplaunch"));
    cmd.env("NO_COLOR", "1").env_remove("WPLAUNCH_AMI");
    cmd
}

// --- Help and version tests ---

#[test]
fn test_cli_help_flag_shows_help() {
    wplaunch()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("--ami"));
}

#[test]
fn test_help_lists_operational_flags() {
    wplaunch()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--timeout"))
        .stdout(predicate::str::contains("--poll-interval"))
        .stdout(predicate::str::contains("--no-browser"));
}

#[test]
fn test_cli_version_flag_shows_version() {
    wplaunch()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("wplaunch"));
}

// --- Image validation ---

#[test]
fn test_missing_ami_exits_one_with_message() {
    wplaunch()
        .assert()
        .code(1)
        .stderr(predicate::str::contains("You must supply an AMI"));
}

#[test]
fn test_failed_run_still_reports_start_up_time() {
    wplaunch()
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Start-up time: 0s"));
}

#[test]
fn test_quiet_failed_run_prints_nothing_to_stdout() {
    wplaunch()
        .arg("--quiet")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_blank_ami_is_rejected() {
    wplaunch()
        .args(["--ami", "   "])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("You must supply an AMI"));
}

#[test]
fn test_blank_ami_from_env_is_rejected() {
    wplaunch()
        .env("WPLAUNCH_AMI", "")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("You must supply an AMI"));
}

#[test]
fn test_missing_ami_json_reports_error_code() {
    let output = wplaunch()
        .arg("--json")
        .output()
        .expect("binary should run");

    assert_eq!(output.status.code(), Some(1));
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(value["error"], true);
    assert_eq!(value["code"], "MISSING_IMAGE");
}

// --- Usage errors ---

#[test]
fn test_zero_poll_interval_is_a_usage_error() {
    wplaunch()
        .args(["--ami", "ami-123", "--poll-interval", "0"])
        .assert()
        .code(2);
}

#[test]
fn test_non_numeric_timeout_is_a_usage_error() {
    wplaunch()
        .args(["--ami", "ami-123", "--timeout", "soon"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--timeout"));
}

#[test]
fn test_unknown_flag_is_a_usage_error() {
    wplaunch().arg("--instances").assert().code(2);
}
