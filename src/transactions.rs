//! Transaction surface.
//!
//! Each transaction is a small serde record. Running one is an effect over
//! the [`RentalLedger`] environment: the record is validated, then handed to
//! the matching ledger operation. Nothing touches a registry until the
//! effect is run.
//!
//! ```rust
//! use carrental::config::RentalConfig;
//! use carrental::ledger::RentalLedger;
//! use carrental::transactions::{submit, Transaction, TransactionOutcome};
//! use stillwater::prelude::*;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let ledger = RentalLedger::in_memory(RentalConfig::default());
//! let tx: Transaction = serde_json::from_str(
//!     r#"{ "type": "UploadLicense", "license_id": "L1", "customer_id": "alice" }"#,
//! ).unwrap();
//!
//! let outcome = submit(tx).run(&ledger).await.unwrap();
//! assert!(matches!(outcome, TransactionOutcome::License(_)));
//! # }
//! ```

use crate::config::RentalConfig;
use crate::error::RentalError;
use crate::ledger::{BatchReport, RentalLedger};
use crate::model::{Car, License, Participant};
use crate::validation::{self, Checked, Validate};
use serde::{Deserialize, Serialize};
use stillwater::effect::{BoxedEffect, Effect};
use stillwater::prelude::*;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UploadLicense {
    pub license_id: String,
    pub customer_id: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApproveLicense {
    pub license_id: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RejectLicense {
    pub license_id: String,
    #[serde(default)]
    pub reason: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreateCar {
    pub car_id: String,
    pub brand: String,
    pub model: String,
    pub color: String,
    pub year: u16,
    pub rental_rate: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SelectCar {
    pub customer_id: String,
    pub car_id: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeliverCar {
    pub car_id: String,
}

/// Inspection of a delivered car; `damaged` is the inspector's finding.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InspectCar {
    pub car_id: String,
    #[serde(default)]
    pub damaged: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReturnCar {
    pub car_id: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RemoveCarsAboveRate {
    pub threshold: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SelectCarsByColor {
    pub color: String,
}

/// Any transaction, tagged by `type` on the wire.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Transaction {
    RegisterParticipant(Participant),
    UploadLicense(UploadLicense),
    ApproveLicense(ApproveLicense),
    RejectLicense(RejectLicense),
    CreateCar(CreateCar),
    SelectCar(SelectCar),
    DeliverCar(DeliverCar),
    InspectCar(InspectCar),
    ReturnCar(ReturnCar),
    RemoveCarsAboveRate(RemoveCarsAboveRate),
    SelectCarsByColor(SelectCarsByColor),
}

/// What a submitted transaction produced.
#[derive(Clone, Debug, PartialEq)]
pub enum TransactionOutcome {
    Participant(Participant),
    License(License),
    Car(Car),
    Cars(Vec<Car>),
    Removed(BatchReport),
}

impl Validate for UploadLicense {
    fn validate(&self, config: &RentalConfig) -> Checked {
        License::pending(self.license_id.as_str(), self.customer_id.as_str()).validate(config)
    }
}

impl Validate for ApproveLicense {
    fn validate(&self, _config: &RentalConfig) -> Checked {
        validation::required("license_id", &self.license_id)
    }
}

impl Validate for RejectLicense {
    fn validate(&self, _config: &RentalConfig) -> Checked {
        validation::required("license_id", &self.license_id)
    }
}

impl Validate for CreateCar {
    fn validate(&self, config: &RentalConfig) -> Checked {
        Car::new(
            self.car_id.as_str(),
            self.brand.as_str(),
            self.model.as_str(),
            self.color.as_str(),
            self.year,
            self.rental_rate,
        )
        .validate(config)
    }
}

impl Validate for SelectCar {
    fn validate(&self, _config: &RentalConfig) -> Checked {
        validation::all(vec![
            validation::required("customer_id", &self.customer_id),
            validation::required("car_id", &self.car_id),
        ])
    }
}

impl Validate for DeliverCar {
    fn validate(&self, _config: &RentalConfig) -> Checked {
        validation::required("car_id", &self.car_id)
    }
}

impl Validate for InspectCar {
    fn validate(&self, _config: &RentalConfig) -> Checked {
        validation::required("car_id", &self.car_id)
    }
}

impl Validate for ReturnCar {
    fn validate(&self, _config: &RentalConfig) -> Checked {
        validation::required("car_id", &self.car_id)
    }
}

impl Validate for SelectCarsByColor {
    fn validate(&self, _config: &RentalConfig) -> Checked {
        validation::required("color", &self.color)
    }
}

pub fn register_participant(
    participant: Participant,
) -> impl Effect<Output = Participant, Error = RentalError, Env = RentalLedger> {
    from_fn(move |ledger: &RentalLedger| {
        participant.validated(ledger.config())?;
        ledger.register_participant(participant.clone())
    })
}

pub fn upload_license(
    tx: UploadLicense,
) -> impl Effect<Output = License, Error = RentalError, Env = RentalLedger> {
    from_fn(move |ledger: &RentalLedger| {
        tx.validated(ledger.config())?;
        ledger.upload_license(&tx.license_id, &tx.customer_id)
    })
}

pub fn approve_license(
    tx: ApproveLicense,
) -> impl Effect<Output = License, Error = RentalError, Env = RentalLedger> {
    from_fn(move |ledger: &RentalLedger| {
        tx.validated(ledger.config())?;
        ledger.approve_license(&tx.license_id)
    })
}

pub fn reject_license(
    tx: RejectLicense,
) -> impl Effect<Output = License, Error = RentalError, Env = RentalLedger> {
    from_fn(move |ledger: &RentalLedger| {
        tx.validated(ledger.config())?;
        ledger.reject_license(&tx.license_id, &tx.reason)
    })
}

pub fn create_car(tx: CreateCar) -> impl Effect<Output = Car, Error = RentalError, Env = RentalLedger> {
    from_fn(move |ledger: &RentalLedger| {
        tx.validated(ledger.config())?;
        ledger.create_car(
            &tx.car_id,
            &tx.brand,
            &tx.model,
            &tx.color,
            tx.year,
            tx.rental_rate,
        )
    })
}

pub fn select_car(tx: SelectCar) -> impl Effect<Output = Car, Error = RentalError, Env = RentalLedger> {
    from_fn(move |ledger: &RentalLedger| {
        tx.validated(ledger.config())?;
        ledger.select_car(&tx.customer_id, &tx.car_id)
    })
}

pub fn deliver_car(
    tx: DeliverCar,
) -> impl Effect<Output = Car, Error = RentalError, Env = RentalLedger> {
    from_fn(move |ledger: &RentalLedger| {
        tx.validated(ledger.config())?;
        ledger.deliver_car(&tx.car_id)
    })
}

pub fn inspect_car(
    tx: InspectCar,
) -> impl Effect<Output = Car, Error = RentalError, Env = RentalLedger> {
    from_fn(move |ledger: &RentalLedger| {
        tx.validated(ledger.config())?;
        ledger.inspect_car(&tx.car_id, tx.damaged)
    })
}

pub fn return_car(tx: ReturnCar) -> impl Effect<Output = Car, Error = RentalError, Env = RentalLedger> {
    from_fn(move |ledger: &RentalLedger| {
        tx.validated(ledger.config())?;
        ledger.return_car(&tx.car_id)
    })
}

pub fn remove_cars_above_rate(
    tx: RemoveCarsAboveRate,
) -> impl Effect<Output = BatchReport, Error = RentalError, Env = RentalLedger> {
    from_fn(move |ledger: &RentalLedger| ledger.remove_cars_above_rate(tx.threshold))
}

pub fn select_cars_by_color(
    tx: SelectCarsByColor,
) -> impl Effect<Output = Vec<Car>, Error = RentalError, Env = RentalLedger> {
    from_fn(move |ledger: &RentalLedger| {
        tx.validated(ledger.config())?;
        ledger.select_cars_by_color(&tx.color)
    })
}

/// Dispatch any transaction to its effect.
pub fn submit(tx: Transaction) -> BoxedEffect<TransactionOutcome, RentalError, RentalLedger> {
    match tx {
        Transaction::RegisterParticipant(p) => register_participant(p)
            .map(TransactionOutcome::Participant)
            .boxed(),
        Transaction::UploadLicense(tx) => upload_license(tx).map(TransactionOutcome::License).boxed(),
        Transaction::ApproveLicense(tx) => {
            approve_license(tx).map(TransactionOutcome::License).boxed()
        }
        Transaction::RejectLicense(tx) => reject_license(tx).map(TransactionOutcome::License).boxed(),
        Transaction::CreateCar(tx) => create_car(tx).map(TransactionOutcome::Car).boxed(),
        Transaction::SelectCar(tx) => select_car(tx).map(TransactionOutcome::Car).boxed(),
        Transaction::DeliverCar(tx) => deliver_car(tx).map(TransactionOutcome::Car).boxed(),
        Transaction::InspectCar(tx) => inspect_car(tx).map(TransactionOutcome::Car).boxed(),
        Transaction::ReturnCar(tx) => return_car(tx).map(TransactionOutcome::Car).boxed(),
        Transaction::RemoveCarsAboveRate(tx) => remove_cars_above_rate(tx)
            .map(TransactionOutcome::Removed)
            .boxed(),
        Transaction::SelectCarsByColor(tx) => select_cars_by_color(tx)
            .map(TransactionOutcome::Cars)
            .boxed(),
    }
}
