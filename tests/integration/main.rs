//! Integration tests for the monthwatch CLI
//!
//! These tests run the binary in a scratch directory and walk through the
//! full cycle: init → import → register providers → schedule → report

mod lifecycle_test;

use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Helper function to create a monthwatch command
fn monthwatch() -> assert_cmd::Command {
    assert_cmd::Command::new(cargo::cargo_bin!("monthwatch"))
}

/// Orders for two people; Ana has two orders
const ORDERS_CSV: &str = "\
Orden,SIAF,Area,Compromiso,RUC,Nombre
OS-1,0001,Logistica,1000,20123456789,Ana Torres
OS-2,0002,Logistica,500,20123456789,Ana Torres
OS-3,0003,Sistemas,700,20987654321,Luis Rojas
";

/// Initialized project with orders imported
fn setup() -> TempDir {
    let temp = TempDir::new().unwrap();
    monthwatch().arg("init").current_dir(temp.path()).assert().success();
    fs::write(temp.path().join("orders.csv"), ORDERS_CSV).unwrap();
    monthwatch().args(["import", "orders.csv"]).current_dir(temp.path()).assert().success();
    temp
}

fn register(dir: &Path, ruc: &str, classification: &str) {
    monthwatch()
        .args(["provider", "add", "--ruc", ruc, "--name", "ACME", "--contact", "Ana"])
        .args(["--type", classification])
        .current_dir(dir)
        .assert()
        .success();
}

// =============================================================================
// BASIC CLI
// =============================================================================

#[test]
fn test_version() {
    monthwatch()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("monthwatch"));
}

#[test]
fn test_help() {
    monthwatch()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("consecutive-month limit"));
}

#[test]
fn test_no_args_shows_info() {
    monthwatch().assert().success().stdout(predicate::str::contains("monthwatch init"));
}

#[test]
fn test_version_json() {
    monthwatch()
        .args(["--json", "version"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"version\""));
}

// =============================================================================
// INIT / STATUS
// =============================================================================

#[test]
fn test_init_creates_layout() {
    let temp = TempDir::new().unwrap();

    monthwatch()
        .arg("init")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Created .monthwatch.toml"));

    assert!(temp.path().join(".monthwatch.toml").is_file());
    assert!(temp.path().join(".monthwatch/orders.json").is_file());
    assert!(temp.path().join(".monthwatch/providers.json").is_file());
    assert!(temp.path().join(".monthwatch/schedule.json").is_file());

    monthwatch()
        .arg("init")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Already initialized"));
}

#[test]
fn test_commands_require_init() {
    let temp = TempDir::new().unwrap();

    monthwatch()
        .arg("people")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("monthwatch init"));
}

#[test]
fn test_status_before_and_after_init() {
    let temp = TempDir::new().unwrap();
    monthwatch()
        .arg("status")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Not initialized"));

    let temp = setup();
    let output = monthwatch()
        .args(["--json", "status"])
        .current_dir(temp.path())
        .output()
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["initialized"], true);
    assert_eq!(json["persons"], 2);
    assert_eq!(json["orders"], 3);
}

// =============================================================================
// IMPORT / PROVIDERS
// =============================================================================

#[test]
fn test_import_twice_reports_duplicates() {
    let temp = setup();

    let output = monthwatch()
        .args(["--json", "import", "orders.csv"])
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["added"], 0);
    assert_eq!(json["duplicates"], 3);
    assert_eq!(json["total"], 3);
}

#[test]
fn test_import_rejects_unsupported_file() {
    let temp = setup();
    fs::write(temp.path().join("orders.pdf"), "binary").unwrap();

    monthwatch()
        .args(["import", "orders.pdf"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported file type"));
}

#[test]
fn test_provider_validation() {
    let temp = setup();

    monthwatch()
        .args(["provider", "add", "--ruc", "123", "--name", "X", "--contact", "Y"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid RUC"));

    monthwatch()
        .args(["provider", "add", "--ruc", "20123456789", "--name", "X", "--contact", "Y"])
        .args(["--type", "manager"])
        .current_dir(temp.path())
        .assert()
        .failure();
}

#[test]
fn test_provider_add_list_remove() {
    let temp = setup();
    register(temp.path(), "20123456789", "technician");

    monthwatch()
        .args(["provider", "list"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("20123456789"))
        .stdout(predicate::str::contains("Technician"));

    monthwatch()
        .args(["provider", "remove", "20123456789"])
        .current_dir(temp.path())
        .assert()
        .success();

    monthwatch()
        .args(["provider", "remove", "20123456789"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("provider not found"));
}
