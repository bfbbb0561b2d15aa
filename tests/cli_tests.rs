//! End-to-end integration tests for the keydash CLI.
//!
//! These run the actual compiled binary. Every test in this file fails
//! before any network I/O would happen, so none of them needs a server.

use assert_cmd::Command;
use predicates::prelude::*;

/// Fresh keydash command with a clean environment.
#[allow(deprecated)]
fn keydash() -> Command {
    let mut cmd = Command::cargo_bin("keydash").unwrap();
    cmd.env_remove("KEYDASH_TOKEN");
    cmd.env("NO_COLOR", "1");
    cmd
}

#[test]
fn version_and_help_work() {
    keydash().arg("--version").assert().success();
    keydash()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("trigger"))
        .stdout(predicate::str::contains("fetch"));
}

#[test]
fn trigger_with_blank_owner_fails_validation() {
    keydash()
        .args([
            "trigger",
            "--owner", "   ",
            "--repo", "keys",
            "--token", "tkn",
            "--unit", "days",
            "--amount", "30",
            "--count", "5",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing required field: owner"));
}

#[test]
fn trigger_with_blank_repo_fails_validation() {
    keydash()
        .args([
            "trigger",
            "--owner", "alice",
            "--repo", "",
            "--token", "tkn",
            "--unit", "days",
            "--amount", "30",
            "--count", "5",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing required field: repo"));
}

#[test]
fn trigger_without_token_fails_with_hint() {
    // stdin is not a terminal here, so no prompt happens: the token stays
    // empty and validation names it.
    keydash()
        .args([
            "trigger",
            "--owner", "alice",
            "--repo", "keys",
            "--unit", "days",
            "--amount", "30",
            "--count", "5",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing required field: token"))
        .stdout(predicate::str::contains("KEYDASH_TOKEN"));
}

#[test]
fn trigger_requires_workflow_inputs() {
    keydash()
        .args(["trigger", "--owner", "alice", "--repo", "keys"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--unit"));
}

#[test]
fn fetch_with_blank_url_fails_validation() {
    keydash()
        .args(["fetch", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing required field: url"));
}

#[test]
fn completions_generate() {
    keydash()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("keydash"));
}
