//! Integration tests for commands that read the service file.
//!
//! These only exercise failures raised before any provider call.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn deployctl() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("deployctl"));
    cmd.env("NO_COLOR", "1").env_remove("DEPLOYCTL_SERVICE_CONFIG");
    cmd
}

#[test]
fn test_info_without_service_file_fails() {
    let dir = TempDir::new().unwrap();

    deployctl()
        .current_dir(dir.path())
        .arg("info")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No service file found at serverless.yml"));
}

#[test]
fn test_bucket_missing_service_file_json_code() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.yml");

    let out = deployctl()
        .args(["bucket", "--json", "--config"])
        .arg(&missing)
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&out).expect("valid json");
    assert_eq!(value["code"], "SERVICE_CONFIG_NOT_FOUND");
}

#[test]
fn test_service_file_without_name_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("serverless.yml");
    std::fs::write(&path, "provider:\n  name: aws\n").unwrap();

    deployctl()
        .env("DEPLOYCTL_SERVICE_CONFIG", &path)
        .arg("info")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("does not declare a \"service\" name"));
}
