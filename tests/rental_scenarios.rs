//! End-to-end rental scenarios against the public API.

use carrental::config::BatchPolicy;
use carrental::events::RecordingNotifier;
use carrental::transactions::{self, SelectCar, Transaction, TransactionOutcome};
use carrental::{
    Car, CarStatus, EntityKind, LicenseStatus, Participant, RentalConfig, RentalError,
    RentalLedger, Role,
};
use std::sync::Arc;
use stillwater::prelude::*;

fn ledger() -> (RentalLedger, Arc<RecordingNotifier>) {
    let config = RentalConfig::default();
    let notifier = Arc::new(RecordingNotifier::new(config.namespace.clone()));
    let ledger = RentalLedger::builder()
        .config(config)
        .notifier(notifier.clone())
        .build();
    (ledger, notifier)
}

fn add_car(ledger: &RentalLedger, car_id: &str, rate: f64) -> Car {
    ledger
        .create_car(car_id, "Toyota", "Camry", "Blue", 2022, rate)
        .unwrap()
}

#[test]
fn license_review_for_alice() {
    let (ledger, notifier) = ledger();

    let license = ledger.upload_license("L1", "alice").unwrap();
    assert_eq!(license.status, LicenseStatus::Pending);

    let approved = ledger.approve_license("L1").unwrap();
    assert_eq!(approved.status, LicenseStatus::Approved);

    let err = ledger.reject_license("L1", "late").unwrap_err();
    assert!(err.is_invalid_state());
    assert_eq!(ledger.get_license("L1").unwrap().status, LicenseStatus::Approved);

    assert_eq!(notifier.names(), vec!["LicenseUploaded", "LicenseApproved"]);
}

#[test]
fn selection_waits_for_license_approval() {
    let (ledger, _) = ledger();
    ledger.upload_license("L1", "alice").unwrap();
    add_car(&ledger, "C1", 50.0);

    let err = ledger.select_car("alice", "C1").unwrap_err();
    assert!(matches!(
        err,
        RentalError::InvalidState {
            kind: EntityKind::License,
            ..
        }
    ));
    assert_eq!(ledger.get_car("C1").unwrap().status, CarStatus::Available);

    ledger.approve_license("L1").unwrap();
    let car = ledger.select_car("alice", "C1").unwrap();
    assert_eq!(car.status, CarStatus::Selected);
    assert!(!car.available());
}

#[test]
fn customer_without_license_cannot_select() {
    let (ledger, _) = ledger();
    add_car(&ledger, "C1", 50.0);

    assert_eq!(
        ledger.select_car("nobody", "C1").unwrap_err(),
        RentalError::not_found(EntityKind::License, "nobody")
    );
}

#[test]
fn malformed_input_is_refused_at_the_ledger() {
    let (ledger, notifier) = ledger();

    assert!(matches!(
        ledger.create_car("", "", "", "", 0, f64::NAN),
        Err(RentalError::InvalidArgument { .. })
    ));
    assert!(matches!(
        ledger.upload_license("", ""),
        Err(RentalError::InvalidArgument { .. })
    ));

    let report = ledger.remove_cars_above_rate(0.0).unwrap();
    assert!(report.removed.is_empty());
    assert!(ledger.available_cars().unwrap().is_empty());
    assert!(notifier.names().is_empty());
}

#[test]
fn strict_ledger_only_rents_to_registered_customers() {
    let ledger = RentalLedger::in_memory(
        RentalConfig::builder()
            .require_registered_customer(true)
            .build(),
    );
    ledger
        .register_participant(Participant::new("alice", "Alice", "Hamilton", "UK", Role::Customer))
        .unwrap();
    ledger
        .register_participant(Participant::new("matias", "Matias", "Manager", "UK", Role::Manager))
        .unwrap();
    ledger.upload_license("L1", "alice").unwrap();
    ledger.approve_license("L1").unwrap();
    add_car(&ledger, "C1", 50.0);

    assert_eq!(
        ledger.select_car("ghost", "C1").unwrap_err(),
        RentalError::not_found(EntityKind::Participant, "ghost")
    );
    assert!(matches!(
        ledger.select_car("matias", "C1"),
        Err(RentalError::InvalidArgument { .. })
    ));
    assert_eq!(ledger.get_car("C1").unwrap().status, CarStatus::Available);

    assert_eq!(
        ledger.select_car("alice", "C1").unwrap().status,
        CarStatus::Selected
    );
}

#[test]
fn full_cycle_returns_car_to_the_pool() {
    let (ledger, notifier) = ledger();
    ledger.upload_license("L1", "alice").unwrap();
    ledger.approve_license("L1").unwrap();
    add_car(&ledger, "C1", 50.0);
    notifier.clear();

    ledger.select_car("alice", "C1").unwrap();
    ledger.deliver_car("C1").unwrap();
    ledger.inspect_car("C1", false).unwrap();
    let car = ledger.return_car("C1").unwrap();

    assert_eq!(car.status, CarStatus::Returned);
    assert!(car.available());
    assert_eq!(
        notifier.names(),
        vec!["CarSelected", "CarDelivered", "CarInspected", "CarReturned"]
    );

    // Returned cars can be rented again.
    assert_eq!(
        ledger.select_car("alice", "C1").unwrap().status,
        CarStatus::Selected
    );
}

#[test]
fn damage_blocks_inspection() {
    let (ledger, _) = ledger();
    ledger.upload_license("L1", "alice").unwrap();
    ledger.approve_license("L1").unwrap();
    add_car(&ledger, "C1", 50.0);
    ledger.select_car("alice", "C1").unwrap();
    ledger.deliver_car("C1").unwrap();

    assert_eq!(
        ledger.inspect_car("C1", true).unwrap_err(),
        RentalError::ExtraPaymentRequired {
            car_id: "C1".to_string()
        }
    );
    assert_eq!(ledger.get_car("C1").unwrap().status, CarStatus::Delivered);

    assert_eq!(
        ledger.inspect_car("C1", false).unwrap().status,
        CarStatus::Checked
    );
}

#[test]
fn batch_removal_uses_strict_threshold() {
    let (ledger, notifier) = ledger();
    add_car(&ledger, "C1", 50.0);
    add_car(&ledger, "C2", 45.0);
    add_car(&ledger, "C3", 30.0);
    add_car(&ledger, "C4", 40.0);
    notifier.clear();

    let report = ledger.remove_cars_above_rate(40.0).unwrap();

    assert!(report.is_complete());
    assert_eq!(report.removed, vec!["C1", "C2"]);
    assert!(ledger.get_car("C1").unwrap_err().is_not_found());
    assert!(ledger.get_car("C4").is_ok());
    assert_eq!(notifier.names(), vec!["CarRemoved", "CarRemoved"]);
}

#[test]
fn abort_policy_still_removes_clean_batches() {
    let ledger = RentalLedger::in_memory(
        RentalConfig::builder()
            .batch_policy(BatchPolicy::AbortOnFirstError)
            .build(),
    );
    add_car(&ledger, "C1", 50.0);
    add_car(&ledger, "C2", 30.0);

    let report = ledger.remove_cars_above_rate(40.0).unwrap();
    assert_eq!(report.removed, vec!["C1"]);
}

#[test]
fn colour_query_ignores_case_and_mutates_nothing() {
    let (ledger, notifier) = ledger();
    add_car(&ledger, "C1", 50.0);
    ledger
        .create_car("C2", "Honda", "Accord", "Red", 2021, 45.0)
        .unwrap();
    notifier.clear();

    let blue = ledger.select_cars_by_color("BLUE").unwrap();

    assert_eq!(blue.len(), 1);
    assert_eq!(blue[0].car_id, "C1");
    assert_eq!(ledger.get_car("C1").unwrap().status, CarStatus::Available);
    assert_eq!(notifier.names(), vec!["CarsSelectedByColor"]);
}

#[test]
fn racing_selections_have_one_winner() {
    let (ledger, _) = ledger();
    for (license, customer) in [("L1", "alice"), ("L2", "bob"), ("L3", "carol"), ("L4", "dan")] {
        ledger.upload_license(license, customer).unwrap();
        ledger.approve_license(license).unwrap();
    }
    add_car(&ledger, "C1", 50.0);

    let results: Vec<Result<Car, RentalError>> = std::thread::scope(|scope| {
        let handles: Vec<_> = ["alice", "bob", "carol", "dan"]
            .into_iter()
            .map(|customer| {
                let ledger = ledger.clone();
                scope.spawn(move || ledger.select_car(customer, "C1"))
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let winners = results.iter().filter(|r| r.is_ok()).count();
    assert_eq!(winners, 1);
    for err in results.iter().filter_map(|r| r.as_ref().err()) {
        assert!(err.is_invalid_state(), "unexpected error: {err:?}");
    }
    assert_eq!(ledger.get_car("C1").unwrap().status, CarStatus::Selected);
}

#[tokio::test]
async fn transactions_run_the_cycle_as_effects() {
    let (ledger, _) = ledger();
    ledger.upload_license("L1", "alice").unwrap();
    ledger.approve_license("L1").unwrap();
    add_car(&ledger, "C1", 50.0);

    let selected = transactions::select_car(SelectCar {
        customer_id: "alice".to_string(),
        car_id: "C1".to_string(),
    })
    .run(&ledger)
    .await
    .unwrap();
    assert_eq!(selected.status, CarStatus::Selected);

    let tx: Transaction =
        serde_json::from_str(r#"{ "type": "DeliverCar", "car_id": "C1" }"#).unwrap();
    let outcome = transactions::submit(tx).run(&ledger).await.unwrap();
    assert!(matches!(
        outcome,
        TransactionOutcome::Car(Car {
            status: CarStatus::Delivered,
            ..
        })
    ));

    let tx: Transaction =
        serde_json::from_str(r#"{ "type": "ReturnCar", "car_id": "C1" }"#).unwrap();
    let err = transactions::submit(tx).run(&ledger).await.unwrap_err();
    assert!(err.is_invalid_state());
}
