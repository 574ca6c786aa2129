//! Integration tests for login/logout and session gating

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn graphbook_cmd(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("graphbook").unwrap();
    cmd.env("GRAPHBOOK_CONFIG_DIR", config_dir.path());
    // Point at a port nothing listens on so any accidental network call fails loudly.
    cmd.env("GRAPHBOOK_API_URL", "http://127.0.0.1:1");
    cmd
}

#[test]
fn help_runs_without_a_session() {
    let dir = TempDir::new().unwrap();
    graphbook_cmd(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("knowledge-graph platform"));
}

#[test]
fn login_with_valid_credentials_persists_session() {
    let dir = TempDir::new().unwrap();
    graphbook_cmd(&dir)
        .args(["login", "admin", "--password", "admin123"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged in as admin"));

    assert!(dir.path().join("session.yml").exists());
}

#[test]
fn login_with_wrong_password_is_generic_and_nonzero() {
    let dir = TempDir::new().unwrap();
    graphbook_cmd(&dir)
        .args(["login", "admin", "--password", "nope"])
        .assert()
        .failure()
        .code(5)
        .stderr(predicate::str::contains("Invalid username or password"));

    assert!(!dir.path().join("session.yml").exists());
}

#[test]
fn logout_clears_the_session() {
    let dir = TempDir::new().unwrap();
    graphbook_cmd(&dir)
        .args(["login", "admin", "--password", "admin123"])
        .assert()
        .success();

    graphbook_cmd(&dir).arg("logout").assert().success();
    assert!(!dir.path().join("session.yml").exists());
}

#[test]
fn verbose_flag_logs_requests() {
    let dir = TempDir::new().unwrap();
    graphbook_cmd(&dir)
        .args(["login", "admin", "--password", "admin123"])
        .assert()
        .success();

    // Without --verbose, request logging stays off.
    graphbook_cmd(&dir)
        .env_remove("RUST_LOG")
        .arg("ls")
        .assert()
        .failure()
        .stdout(predicate::str::contains("GET http://127.0.0.1:1").not());

    graphbook_cmd(&dir)
        .env_remove("RUST_LOG")
        .args(["--verbose", "ls"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("GET http://127.0.0.1:1"));
}

#[test]
fn commands_require_a_session() {
    let dir = TempDir::new().unwrap();
    graphbook_cmd(&dir)
        .arg("ls")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not logged in"));
}
