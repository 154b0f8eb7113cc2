//! Integration tests for the scheduling lifecycle
//!
//! Tests the complete flow:
//! 1. Orders are imported and providers classified
//! 2. Months are toggled until the classification limit
//! 3. A change past the limit is rejected and nothing is stored
//! 4. Reports reflect the committed schedule

use predicates::prelude::*;
use std::fs;

use super::{monthwatch, register, setup};

fn schedule_json(dir: &std::path::Path) -> serde_json::Value {
    let raw = fs::read_to_string(dir.join(".monthwatch/schedule.json")).unwrap();
    serde_json::from_str(&raw).unwrap()
}

#[test]
fn test_professional_limit_enforced_across_orders() {
    let temp = setup();
    register(temp.path(), "20123456789", "professional");

    monthwatch()
        .args(["schedule", "toggle", "OS-1", "jan", "feb", "mar"])
        .current_dir(temp.path())
        .assert()
        .success();
    monthwatch()
        .args(["schedule", "toggle", "OS-2", "4", "5"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("[warning]"));

    monthwatch()
        .args(["schedule", "toggle", "OS-2", "june"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("[danger]"));

    let before = schedule_json(temp.path());
    monthwatch()
        .args(["schedule", "toggle", "OS-2", "july"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("limit exceeded"));
    assert_eq!(schedule_json(temp.path()), before);

    // Removing a month is always allowed
    monthwatch()
        .args(["schedule", "toggle", "OS-1", "jan"])
        .current_dir(temp.path())
        .assert()
        .success();
}

#[test]
fn test_batch_toggle_is_all_or_nothing() {
    let temp = setup();
    register(temp.path(), "20987654321", "technician-short");

    monthwatch()
        .args(["schedule", "toggle", "OS-3", "1", "2", "3", "4"])
        .current_dir(temp.path())
        .assert()
        .failure();

    assert_eq!(schedule_json(temp.path()), serde_json::json!({}));
}

#[test]
fn test_unclassified_people_are_not_limited() {
    let temp = setup();

    monthwatch()
        .args(["schedule", "set", "OS-3", "1", "2", "3", "4", "5", "6", "7", "8"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("[unassigned]"));
}

#[test]
fn test_show_and_reports() {
    let temp = setup();
    register(temp.path(), "20123456789", "technician-short");
    monthwatch()
        .args(["schedule", "set", "OS-1", "march", "april"])
        .current_dir(temp.path())
        .assert()
        .success();

    let output = monthwatch()
        .args(["--json", "schedule", "show", "20123456789"])
        .current_dir(temp.path())
        .output()
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["status"], "warning");
    assert_eq!(json["consecutive_months"], 2);
    assert_eq!(json["orders"][0]["months"], serde_json::json!([2, 3]));
    assert_eq!(json["orders"][0]["status"], "warning");
    assert_eq!(json["orders"][1]["months"], serde_json::json!([]));
    assert_eq!(json["orders"][1]["status"], "unassigned");

    let output = monthwatch()
        .args(["--json", "report", "summary"])
        .current_dir(temp.path())
        .output()
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["warning"].as_array().unwrap().len(), 1);
    assert_eq!(json["unassigned"].as_array().unwrap().len(), 1);

    let output = monthwatch()
        .args(["--json", "report", "month", "april"])
        .current_dir(temp.path())
        .output()
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["orders"], 1);
    assert_eq!(json["total_amount"], 1000.0);

    monthwatch()
        .args(["report", "consolidated", "--csv", "out.csv"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported to out.csv"));
    let csv = fs::read_to_string(temp.path().join("out.csv")).unwrap();
    assert!(csv.contains("Near limit"));
    assert!(csv.contains("March; April"));
}

#[test]
fn test_people_search() {
    let temp = setup();

    monthwatch()
        .args(["people", "--search", "luis"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Luis Rojas"))
        .stdout(predicate::str::contains("Ana Torres").not());
}

#[test]
fn test_show_requires_name_for_shared_ruc() {
    let temp = setup();
    fs::write(temp.path().join("more.csv"), "Orden,RUC,Nombre\nOS-9,20123456789,Ana T. Torres\n")
        .unwrap();
    monthwatch().args(["import", "more.csv"]).current_dir(temp.path()).assert().success();

    monthwatch()
        .args(["schedule", "show", "20123456789"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("ambiguous RUC").and(predicate::str::contains("--name")));

    monthwatch()
        .args(["schedule", "show", "20123456789", "--name", "ana t. torres"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("OS-9"));
}
