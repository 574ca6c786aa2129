//! Integration tests for client-side upload validation
//!
//! The backend URL points at a closed port, so these tests also verify
//! that rejected files never reach the network: a connection error would
//! produce a different message than the validation one asserted here.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn logged_in_cmd(config_dir: &TempDir) -> Command {
    let mut login = Command::cargo_bin("graphbook").unwrap();
    login
        .env("GRAPHBOOK_CONFIG_DIR", config_dir.path())
        .env("GRAPHBOOK_API_URL", "http://127.0.0.1:1")
        .args(["login", "admin", "--password", "admin123"]);
    login.assert().success();

    let mut cmd = Command::cargo_bin("graphbook").unwrap();
    cmd.env("GRAPHBOOK_CONFIG_DIR", config_dir.path())
        .env("GRAPHBOOK_API_URL", "http://127.0.0.1:1");
    cmd
}

#[test]
fn rejects_disallowed_file_type_before_any_request() {
    let config_dir = TempDir::new().unwrap();
    let files = TempDir::new().unwrap();
    let png = files.path().join("image.png");
    fs::write(&png, b"not a document").unwrap();

    logged_in_cmd(&config_dir)
        .arg("upload")
        .arg(&png)
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("unsupported file type"));
}

#[test]
fn rejects_oversized_file_before_any_request() {
    let config_dir = TempDir::new().unwrap();
    let files = TempDir::new().unwrap();
    let big = files.path().join("big.pdf");
    fs::write(&big, vec![0u8; 10 * 1024 * 1024 + 1]).unwrap();

    logged_in_cmd(&config_dir)
        .arg("upload")
        .arg(&big)
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("10 MiB upload limit"));
}

#[test]
fn valid_file_reaches_the_network_layer() {
    let config_dir = TempDir::new().unwrap();
    let files = TempDir::new().unwrap();
    let pdf = files.path().join("small.pdf");
    fs::write(&pdf, b"%PDF-1.4 minimal").unwrap();

    // Validation passes, so the failure is the dead backend, not the file.
    logged_in_cmd(&config_dir)
        .arg("upload")
        .arg(&pdf)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported file type").not());
}
