//! Property-based tests for the lifecycles and the ledger.
//!
//! These tests use proptest to drive random operation sequences through
//! the rule tables and a live ledger.

use carrental::core::{Guard, State, StateHistory, StateTransition};
use carrental::lifecycle::{car_lifecycle, license_lifecycle};
use carrental::model::{CarStatus, LicenseStatus};
use carrental::{RentalConfig, RentalLedger};
use proptest::prelude::*;

prop_compose! {
    fn arbitrary_car_status()(index in 0..CarStatus::ALL.len()) -> CarStatus {
        CarStatus::ALL[index]
    }
}

prop_compose! {
    fn arbitrary_license_status()(index in 0..LicenseStatus::ALL.len()) -> LicenseStatus {
        LicenseStatus::ALL[index]
    }
}

#[derive(Clone, Debug)]
enum CarStep {
    Select,
    Deliver,
    Inspect { damaged: bool },
    Return,
}

fn arbitrary_car_step() -> impl Strategy<Value = CarStep> {
    prop_oneof![
        Just(CarStep::Select),
        Just(CarStep::Deliver),
        any::<bool>().prop_map(|damaged| CarStep::Inspect { damaged }),
        Just(CarStep::Return),
    ]
}

fn rental_ledger() -> RentalLedger {
    let ledger = RentalLedger::in_memory(RentalConfig::default());
    ledger.upload_license("L1", "alice").unwrap();
    ledger.approve_license("L1").unwrap();
    ledger
        .create_car("C1", "Toyota", "Camry", "Blue", 2022, 50.0)
        .unwrap();
    ledger
}

proptest! {
    #[test]
    fn labels_round_trip_through_json(status in arbitrary_car_status()) {
        let json = serde_json::to_string(&status).unwrap();
        prop_assert_eq!(json, format!("\"{}\"", status.name()));
        prop_assert_eq!(CarStatus::from_label(status.name()), Some(status));
    }

    #[test]
    fn advance_is_deterministic(status in arbitrary_car_status()) {
        for rule in car_lifecycle().rules() {
            let first = car_lifecycle().advance(&rule.operation, &status);
            let second = car_lifecycle().advance(&rule.operation, &status);
            prop_assert_eq!(first, second);
        }
    }

    #[test]
    fn final_statuses_accept_no_operation(status in arbitrary_license_status()) {
        let allowed = license_lifecycle().operations_from(&status);
        prop_assert_eq!(status.is_final(), allowed.is_empty());
    }

    #[test]
    fn only_damaged_is_a_dead_end(status in arbitrary_car_status()) {
        let allowed = car_lifecycle().operations_from(&status);
        prop_assert_eq!(status == CarStatus::Damaged, allowed.is_empty());
    }

    #[test]
    fn guard_is_deterministic(status in arbitrary_car_status()) {
        let guard = Guard::new(CarStatus::is_available);
        prop_assert_eq!(guard.check(&status), guard.check(&status));
    }

    #[test]
    fn history_preserves_order(steps in prop::collection::vec(
        (arbitrary_car_status(), arbitrary_car_status()), 0..20)
    ) {
        let history = steps.iter().fold(StateHistory::new(), |history, (from, to)| {
            history.record(StateTransition::now(*from, *to, "step"))
        });

        prop_assert_eq!(history.len(), steps.len());
        for (transition, (from, to)) in history.transitions().iter().zip(&steps) {
            prop_assert_eq!(&transition.from, from);
            prop_assert_eq!(&transition.to, to);
        }
    }

    #[test]
    fn availability_always_matches_status(steps in prop::collection::vec(arbitrary_car_step(), 0..24)) {
        let ledger = rental_ledger();

        for step in steps {
            let before = ledger.get_car("C1").unwrap();
            let result = match step {
                CarStep::Select => ledger.select_car("alice", "C1"),
                CarStep::Deliver => ledger.deliver_car("C1"),
                CarStep::Inspect { damaged } => ledger.inspect_car("C1", damaged),
                CarStep::Return => ledger.return_car("C1"),
            };
            let after = ledger.get_car("C1").unwrap();

            prop_assert_eq!(after.available(), after.status.is_available());
            prop_assert_ne!(after.status, CarStatus::Damaged);
            match result {
                Ok(car) => prop_assert_eq!(car, after),
                // A refused step leaves the record untouched.
                Err(_) => prop_assert_eq!(before, after),
            }
        }

        let path: Vec<CarStatus> = ledger.car_history("C1").get_path().into_iter().copied().collect();
        for pair in path.windows(2) {
            prop_assert!(car_lifecycle()
                .operations_from(&pair[0])
                .iter()
                .any(|op| car_lifecycle().advance(op, &pair[0]) == Ok(pair[1])));
        }
    }

    #[test]
    fn review_succeeds_exactly_once(approvals in prop::collection::vec(any::<bool>(), 1..8)) {
        let ledger = RentalLedger::in_memory(RentalConfig::default());
        ledger.upload_license("L1", "alice").unwrap();

        let successes = approvals
            .iter()
            .map(|approve| {
                if *approve {
                    ledger.approve_license("L1")
                } else {
                    ledger.reject_license("L1", "not valid")
                }
            })
            .filter(Result::is_ok)
            .count();

        prop_assert_eq!(successes, 1);
        let expected = if approvals[0] {
            LicenseStatus::Approved
        } else {
            LicenseStatus::Rejected
        };
        prop_assert_eq!(ledger.get_license("L1").unwrap().status, expected);
    }
}
