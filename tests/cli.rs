//! CLI surface tests that work without AWS credentials (argument parsing
//! only; anything touching the API belongs to manual testing).

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("sg-audit").unwrap()
}

#[test]
fn test_help_lists_all_flags() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--profile"))
        .stdout(predicate::str::contains("--region"))
        .stdout(predicate::str::contains("--no-color"))
        .stdout(predicate::str::contains("--csv"));
}

#[test]
fn test_help_mentions_override_markers() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("sgaudit:checked"))
        .stdout(predicate::str::contains("sgaudit:skip"));
}

#[test]
fn test_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("sg-audit"));
}

#[test]
fn test_unknown_flag_is_rejected() {
    cmd()
        .arg("--frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"));
}
