//! Rental Walkthrough
//!
//! Seeds the sample network and walks one car through a full rental.
//!
//! Key concepts:
//! - Transactions submitted as JSON and run as effects
//! - License review gating car selection
//! - Refused steps reported without touching the records
//! - Batch removal by rental rate
//!
//! Run with: RUST_LOG=info cargo run --example rental_walkthrough

use carrental::demo::seed_demo_data;
use carrental::transactions::{submit, Transaction, TransactionOutcome};
use carrental::{RentalConfig, RentalError, RentalLedger};
use stillwater::prelude::*;

async fn run(ledger: &RentalLedger, json: &str) -> Result<TransactionOutcome, RentalError> {
    let tx: Transaction = serde_json::from_str(json).map_err(|e| {
        RentalError::invalid_argument(format!("malformed transaction: {}", e))
    })?;
    submit(tx).run(ledger).await
}

fn describe(outcome: &TransactionOutcome) -> String {
    match outcome {
        TransactionOutcome::Participant(p) => format!("participant {}", p.participant_id),
        TransactionOutcome::License(l) => format!("license {} is {}", l.license_id, l.status),
        TransactionOutcome::Car(c) => format!(
            "car {} is {} (available: {})",
            c.car_id,
            c.status,
            c.available()
        ),
        TransactionOutcome::Cars(cars) => {
            let ids: Vec<&str> = cars.iter().map(|c| c.car_id.as_str()).collect();
            format!("cars [{}]", ids.join(", "))
        }
        TransactionOutcome::Removed(report) => format!(
            "removed [{}], {} failed",
            report.removed.join(", "),
            report.failed.len()
        ),
    }
}

#[tokio::main]
async fn main() -> Result<(), RentalError> {
    env_logger::init();

    println!("=== Rental Walkthrough ===\n");

    let ledger = RentalLedger::in_memory(
        RentalConfig::builder()
            .namespace("org.example.rental")
            .require_registered_customer(true)
            .build(),
    );
    seed_demo_data(&ledger)?;
    println!("Seeded: alice, bob, staff, license1, license2, car1, car2\n");

    println!("Selecting before the license is reviewed:");
    match run(&ledger, r#"{ "type": "SelectCar", "customer_id": "alice", "car_id": "car1" }"#).await {
        Ok(outcome) => println!("  unexpected: {}", describe(&outcome)),
        Err(e) => println!("  refused: {}", e),
    }

    println!("\nFull rental cycle:");
    let script = [
        r#"{ "type": "ApproveLicense", "license_id": "license1" }"#,
        r#"{ "type": "SelectCar", "customer_id": "alice", "car_id": "car1" }"#,
        r#"{ "type": "DeliverCar", "car_id": "car1" }"#,
        r#"{ "type": "InspectCar", "car_id": "car1", "damaged": false }"#,
        r#"{ "type": "ReturnCar", "car_id": "car1" }"#,
    ];
    for json in script {
        let outcome = run(&ledger, json).await?;
        println!("  {}", describe(&outcome));
    }

    let path: Vec<String> = ledger
        .car_history("car1")
        .get_path()
        .into_iter()
        .map(ToString::to_string)
        .collect();
    println!("  path: {}", path.join(" -> "));

    println!("\nRejecting bob's license:");
    let outcome = run(
        &ledger,
        r#"{ "type": "RejectLicense", "license_id": "license2", "reason": "expired document" }"#,
    )
    .await?;
    println!("  {}", describe(&outcome));

    println!("\nBlue cars:");
    let outcome = run(&ledger, r#"{ "type": "SelectCarsByColor", "color": "blue" }"#).await?;
    println!("  {}", describe(&outcome));

    println!("\nRemoving cars above 46.0:");
    let outcome = run(&ledger, r#"{ "type": "RemoveCarsAboveRate", "threshold": 46.0 }"#).await?;
    println!("  {}", describe(&outcome));

    let remaining: Vec<String> = ledger
        .available_cars()?
        .into_iter()
        .map(|c| c.car_id)
        .collect();
    println!("  remaining: [{}]", remaining.join(", "));

    Ok(())
}
