//! Car rental cycle operations.

use super::{advance_record, RentalLedger};
use crate::core::{Guard, State, StateTransition};
use crate::error::{EntityKind, RentalError, Result};
use crate::events::RentalEvent;
use crate::lifecycle::{car_lifecycle, DELIVER, INSPECT, RETURN, SELECT};
use crate::model::{Car, CarStatus, License, LicenseStatus};
use crate::validation::Validate;
use log::*;

const LOG_TARGET: &str = "carrental::ledger::car";

impl RentalLedger {
    /// Add a car to the fleet, available for rent.
    ///
    /// Attributes are checked against the configured model year and rate
    /// bounds before anything is stored.
    pub fn create_car(
        &self,
        car_id: &str,
        brand: &str,
        model: &str,
        color: &str,
        year: u16,
        rental_rate: f64,
    ) -> Result<Car> {
        let car = Car::new(car_id, brand, model, color, year, rental_rate);
        car.validated(&self.config)?;
        self.cars
            .add(car.clone())
            .map_err(|e| RentalError::from_store(EntityKind::Car, e))?;
        // A reused id starts with a clean history.
        self.car_journal.forget(car_id);

        info!(
            target: LOG_TARGET,
            "Car {} ({} {}, {}) added at rate {}", car_id, brand, model, year, rental_rate
        );
        self.notify(RentalEvent::CarCreated {
            car_id: car.car_id.clone(),
        });
        Ok(car)
    }

    /// Reserve an available car for a customer holding an approved license.
    ///
    /// Two racing selections of the same car cannot both succeed: the
    /// write is conditional on the version the availability check read.
    pub fn select_car(&self, customer_id: &str, car_id: &str) -> Result<Car> {
        self.ensure_customer(customer_id)?;

        let mut approved: Option<License> = None;
        let (from, car) = advance_record(
            self.cars.as_ref(),
            EntityKind::Car,
            car_lifecycle(),
            SELECT,
            car_id,
            |c: &Car| c.status,
            |_| {
                approved = Some(self.approved_license(customer_id)?);
                Ok(())
            },
            Car::with_status,
        )?;
        let license = approved.ok_or_else(|| {
            RentalError::not_found(EntityKind::License, customer_id.to_string())
        })?;

        self.journal_car(car_id, from, car.status, SELECT);
        self.notify(RentalEvent::CarSelected {
            car_id: car.car_id.clone(),
            customer_id: customer_id.to_string(),
            license_id: license.license_id,
        });
        Ok(car)
    }

    /// Hand a selected car over to its renter.
    pub fn deliver_car(&self, car_id: &str) -> Result<Car> {
        let car = self.advance_car(car_id, DELIVER, |_| Ok(()))?;
        self.notify(RentalEvent::CarDelivered {
            car_id: car.car_id.clone(),
        });
        Ok(car)
    }

    /// Inspect a delivered car.
    ///
    /// A damaged car fails with `ExtraPaymentRequired` and keeps its
    /// `DELIVERED` status until the damage is settled.
    pub fn inspect_car(&self, car_id: &str, damaged: bool) -> Result<Car> {
        let car = self.advance_car(car_id, INSPECT, |car| {
            if damaged {
                warn!(
                    target: LOG_TARGET,
                    "Car {} reported damaged at inspection", car.car_id
                );
                return Err(RentalError::ExtraPaymentRequired {
                    car_id: car.car_id.clone(),
                });
            }
            Ok(())
        })?;
        self.notify(RentalEvent::CarInspected {
            car_id: car.car_id.clone(),
        });
        Ok(car)
    }

    /// Take back an inspected car; it becomes available again.
    pub fn return_car(&self, car_id: &str) -> Result<Car> {
        let car = self.advance_car(car_id, RETURN, |_| Ok(()))?;
        self.notify(RentalEvent::CarReturned {
            car_id: car.car_id.clone(),
        });
        Ok(car)
    }

    /// Cars that can currently be selected, ordered by id.
    pub fn available_cars(&self) -> Result<Vec<Car>> {
        self.cars
            .query(&Guard::new(Car::available))
            .map_err(|e| RentalError::from_store(EntityKind::Car, e))
    }

    fn advance_car(
        &self,
        car_id: &str,
        operation: &str,
        check: impl FnOnce(&Car) -> Result<()>,
    ) -> Result<Car> {
        let (from, car) = advance_record(
            self.cars.as_ref(),
            EntityKind::Car,
            car_lifecycle(),
            operation,
            car_id,
            |c: &Car| c.status,
            check,
            Car::with_status,
        )?;
        self.journal_car(car_id, from, car.status, operation);
        Ok(car)
    }

    fn journal_car(&self, car_id: &str, from: CarStatus, to: CarStatus, operation: &str) {
        self.car_journal
            .record(car_id, StateTransition::now(from, to, operation));
        info!(target: LOG_TARGET, "Car {} {} -> {}", car_id, from, to);
    }

    /// The customer's approved license.
    ///
    /// `NotFound` when the customer holds no license at all, `InvalidState`
    /// when none of their licenses is approved.
    fn approved_license(&self, customer_id: &str) -> Result<License> {
        let licenses = self.licenses_of(customer_id)?;
        if let Some(license) = licenses.iter().find(|l| l.is_approved()) {
            return Ok(license.clone());
        }
        match licenses.into_iter().next() {
            None => {
                debug!(
                    target: LOG_TARGET,
                    "Customer {} has no license on file", customer_id
                );
                Err(RentalError::not_found(EntityKind::License, customer_id))
            }
            Some(license) => Err(RentalError::InvalidState {
                kind: EntityKind::License,
                id: license.license_id,
                operation: SELECT.to_string(),
                current: license.status.name().to_string(),
                expected: LicenseStatus::Approved.name().to_string(),
            }),
        }
    }
}
