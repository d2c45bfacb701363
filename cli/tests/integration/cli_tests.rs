//! Integration tests for the CLI surface: help, version, and flags.

#![allow(clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;

fn deployctl() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("deployctl"));
    cmd.env("NO_COLOR", "1");
    cmd
}

// --- Help and version tests ---

#[test]
fn test_cli_no_args_shows_help_and_exits_two() {
    // An env-supplied flag counts as an argument, so NO_COLOR would suppress the help.
    deployctl()
        .env_remove("NO_COLOR")
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "Inspect and configure serverless deployments",
        ));
}

#[test]
fn test_no_color_env_accepts_conventional_values() {
    for value in ["1", "yes", "true", "0", ""] {
        deployctl()
            .env("NO_COLOR", value)
            .arg("version")
            .assert()
            .success()
            .stdout(predicate::str::contains("deployctl v0.1.0"));
    }
}

#[test]
fn test_cli_help_lists_commands() {
    deployctl()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("info"))
        .stdout(predicate::str::contains("bucket"))
        .stdout(predicate::str::contains("version"));
}

#[test]
fn test_cli_version_flag_shows_version() {
    deployctl()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("deployctl"));
}

#[test]
fn test_version_command_shows_version() {
    deployctl()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("deployctl v0.1.0"));
}

#[test]
fn test_version_command_json_outputs_valid_json() {
    let out = deployctl()
        .args(["version", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&out).expect("valid json");
    assert_eq!(value["version"], "0.1.0");
}

// --- Argument parsing ---

#[test]
fn test_info_help_shows_target_options() {
    deployctl()
        .args(["info", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--stage"))
        .stdout(predicate::str::contains("--region"))
        .stdout(predicate::str::contains("--aws-profile"));
}

#[test]
fn test_config_credentials_help_shows_options() {
    deployctl()
        .args(["config", "credentials", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--provider"))
        .stdout(predicate::str::contains("--key"))
        .stdout(predicate::str::contains("--secret"))
        .stdout(predicate::str::contains("--profile"))
        .stdout(predicate::str::contains("--overwrite"));
}

#[test]
fn test_config_credentials_requires_provider() {
    deployctl()
        .args(["config", "credentials", "-k", "a", "-s", "b"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--provider"));
}

#[test]
fn test_unknown_command_fails() {
    deployctl().arg("deploy-everything").assert().code(2);
}
