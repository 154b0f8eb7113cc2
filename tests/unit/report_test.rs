//! Tests for reports built from imported orders

use monthwatch::core::models::{Classification, ComplianceStatus, Order, Schedule};
use monthwatch::core::services::report::{consolidated, summary};
use monthwatch::core::services::{group_by_person, merge_orders, registry_rows};
use monthwatch::ingest::Importer;

use crate::common::{months, provider};

fn imported() -> Vec<Order> {
    let rows: Vec<Vec<String>> = [
        ["RUC", "Nombre", "Orden", "Monto"],
        ["20000000001", "Ana", "OS-1", "1000"],
        ["20000000001", "Ana", "OS-2", "500"],
        ["20000000001", "ANA M.", "OS-3", "50"],
        ["20000000002", "Luis", "OS-4", "700"],
    ]
    .iter()
    .map(|row| row.iter().map(|c| (*c).to_string()).collect())
    .collect();

    let mut stored = Vec::new();
    merge_orders(&mut stored, Importer::default().orders_from_rows(&rows));
    stored
}

#[test]
fn test_same_ruc_different_name_is_a_different_person() {
    let orders = imported();
    let persons = group_by_person(&orders, &Schedule::new());

    assert_eq!(persons.len(), 3);
    assert_eq!(persons[0].total_orders(), 2);
    assert_eq!(persons[0].pending_orders, 2);
}

#[test]
fn test_registry_rows_follow_schedule() {
    let orders = imported();
    let providers = vec![provider("20000000001", Classification::TechnicianShort)];
    let mut schedule = Schedule::new();
    schedule.set(1, months(&[0, 1]));

    let persons = group_by_person(&orders, &schedule);
    let rows = registry_rows(&persons, &providers, &schedule, Some("ana"));

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].run, 2);
    assert_eq!(rows[0].status, ComplianceStatus::Warning);
    assert_eq!(rows[0].assigned_orders, 1);
    assert_eq!(rows[1].status, ComplianceStatus::Unassigned);
}

#[test]
fn test_summary_puts_unscheduled_classified_people_in_available() {
    let orders = imported();
    let providers = vec![
        provider("20000000001", Classification::Professional),
        provider("20000000002", Classification::Technician),
    ];
    let schedule = Schedule::new();
    let persons = group_by_person(&orders, &schedule);

    let s = summary(&persons, &providers, &schedule);
    assert_eq!(s.available.len(), 3);
    assert!(s.unassigned.is_empty());

    let rows = consolidated(&persons, &providers, &schedule);
    assert!(rows.iter().all(|r| r.status_text == "Not assigned"));
}
