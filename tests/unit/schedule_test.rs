//! Tests for per-person schedule editing
//!
//! Exercises the load, draft, commit, save cycle against in-memory ports.

use monthwatch::core::models::{Classification, ComplianceStatus, Schedule};
use monthwatch::core::ports::{OrderRepository, ProviderRepository, ScheduleRepository};
use monthwatch::core::services::{
    ScheduleDraft, ScheduleError, Toggle, classification_for, group_by_person, person_for_order,
};

use crate::common::mocks::MockStore;
use crate::common::{m, months, order, provider};

const RUC: &str = "20123456789";

fn store(classification: Classification) -> MockStore {
    MockStore::with_orders(vec![order(1, RUC, "Ana"), order(2, RUC, "Ana")])
        .with_providers(vec![provider(RUC, classification)])
}

/// Open a draft for the owner of order 1
fn draft_for(store: &MockStore) -> (ScheduleDraft, Schedule) {
    let orders = store.load_orders().unwrap();
    let schedule = store.load_schedule().unwrap();
    let persons = group_by_person(&orders, &schedule);
    let person = person_for_order(&persons, 1).unwrap();
    let classification = classification_for(&store.load_providers().unwrap(), person.ruc());
    (ScheduleDraft::begin(person, classification, &schedule), schedule)
}

/// Toggle `indices` on one order and persist, saving only if all succeed
fn toggle_and_save(store: &MockStore, order: u64, indices: &[u32]) -> Result<(), ScheduleError> {
    let (mut draft, mut schedule) = draft_for(store);
    for &i in indices {
        draft.toggle(order, m(i))?;
    }
    draft.commit(&mut schedule);
    store.save_schedule(&schedule).unwrap();
    Ok(())
}

#[test]
fn test_professional_sixth_month_allowed_seventh_rejected() {
    let store = store(Classification::Professional);
    let (mut draft, mut schedule) = draft_for(&store);

    for i in 0..5 {
        draft.toggle(1, m(i)).unwrap();
    }
    assert_eq!(draft.evaluation().status, ComplianceStatus::Warning);

    assert_eq!(draft.toggle(1, m(5)), Ok(Toggle::Added));
    assert_eq!(draft.evaluation().status, ComplianceStatus::Danger);

    let err = draft.toggle(1, m(6)).unwrap_err();
    assert!(matches!(err, ScheduleError::LimitExceeded { limit: 6, run: 7, .. }));
    assert_eq!(draft.months(1), Some(&months(&[0, 1, 2, 3, 4, 5])));

    draft.commit(&mut schedule);
    store.save_schedule(&schedule).unwrap();
    assert_eq!(store.load_schedule().unwrap().months(1), months(&[0, 1, 2, 3, 4, 5]));
}

#[test]
fn test_limit_spans_orders() {
    let store = store(Classification::TechnicianShort);
    let (mut draft, _) = draft_for(&store);

    draft.toggle(1, m(3)).unwrap();
    draft.toggle(1, m(4)).unwrap();
    assert_eq!(draft.toggle(2, m(5)), Ok(Toggle::Added));
    assert_eq!(draft.evaluation().status, ComplianceStatus::Danger);
    assert_eq!(draft.order_status(2), ComplianceStatus::Danger);

    assert!(draft.toggle(2, m(6)).is_err());
    assert!(draft.toggle(2, m(2)).is_err());
    assert_eq!(draft.person_months(), months(&[3, 4, 5]));
}

#[test]
fn test_removal_always_succeeds() {
    let store = store(Classification::TechnicianShort);
    let (mut draft, _) = draft_for(&store);
    draft.toggle(1, m(0)).unwrap();
    draft.toggle(1, m(1)).unwrap();

    assert_eq!(draft.toggle(1, m(1)), Ok(Toggle::Removed));
    assert_eq!(draft.months(1), Some(&months(&[0])));
}

#[test]
fn test_rejected_batch_is_never_saved() {
    let store = store(Classification::TechnicianShort);

    toggle_and_save(&store, 1, &[0, 1, 2]).unwrap();
    assert_eq!(store.saves(), 1);

    let err = toggle_and_save(&store, 2, &[4, 3]).unwrap_err();
    assert!(matches!(err, ScheduleError::LimitExceeded { limit: 3, run: 5, .. }));
    assert_eq!(store.saves(), 1);

    let stored = store.load_schedule().unwrap();
    assert_eq!(stored.months(1), months(&[0, 1, 2]));
    assert!(!stored.is_assigned(2));
}

#[test]
fn test_unregistered_provider_is_never_limited() {
    let store = MockStore::with_orders(vec![order(1, RUC, "Ana")]);
    let (mut draft, _) = draft_for(&store);

    for i in 0..12 {
        draft.toggle(1, m(i)).unwrap();
    }
    assert_eq!(draft.evaluation().status, ComplianceStatus::Unassigned);
    assert_eq!(draft.evaluation().run, 12);
}
