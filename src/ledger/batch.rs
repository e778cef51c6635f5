//! Fleet-wide queries and removals.

use super::RentalLedger;
use crate::config::BatchPolicy;
use crate::core::Guard;
use crate::error::{EntityKind, RentalError, Result};
use crate::events::RentalEvent;
use crate::model::Car;
use log::*;

const LOG_TARGET: &str = "carrental::ledger::batch";

/// Outcome of a batch operation.
///
/// Items are processed one at a time with no cross-item transaction, so
/// `removed` is exactly what was committed even when `failed` is not empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchReport {
    pub removed: Vec<String>,
    pub failed: Vec<(String, RentalError)>,
}

impl BatchReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

impl RentalLedger {
    /// Remove every car whose rental rate is strictly above `threshold`.
    pub fn remove_cars_above_rate(&self, threshold: f64) -> Result<BatchReport> {
        if !threshold.is_finite() {
            return Err(RentalError::invalid_argument(format!(
                "threshold must be a finite number (got {})",
                threshold
            )));
        }

        let candidates = self
            .cars
            .query(&Guard::new(move |car: &Car| car.rental_rate > threshold))
            .map_err(|e| RentalError::from_store(EntityKind::Car, e))?;

        let mut report = BatchReport::default();
        for car in candidates {
            match self.cars.remove(&car.car_id) {
                Ok(removed) => {
                    info!(
                        target: LOG_TARGET,
                        "Removed car {} (rate {} > {})", removed.car_id, removed.rental_rate, threshold
                    );
                    self.car_journal.forget(&removed.car_id);
                    self.notify(RentalEvent::CarRemoved {
                        car_id: removed.car_id.clone(),
                        rental_rate: removed.rental_rate,
                    });
                    report.removed.push(removed.car_id);
                }
                Err(e) => {
                    let err = RentalError::from_store(EntityKind::Car, e);
                    warn!(target: LOG_TARGET, "Could not remove car {}: {}", car.car_id, err);
                    match self.config.batch_policy {
                        BatchPolicy::BestEffort => report.failed.push((car.car_id, err)),
                        BatchPolicy::AbortOnFirstError => return Err(err),
                    }
                }
            }
        }
        Ok(report)
    }

    /// Cars painted `color` (ASCII case-insensitive), ordered by id.
    ///
    /// This is a read: matched cars keep their status.
    pub fn select_cars_by_color(&self, color: &str) -> Result<Vec<Car>> {
        let wanted = color.trim().to_string();
        if wanted.is_empty() {
            return Err(RentalError::invalid_argument("color is required"));
        }

        let query_color = wanted.clone();
        let cars = self
            .cars
            .query(&Guard::new(move |car: &Car| {
                car.color.eq_ignore_ascii_case(&query_color)
            }))
            .map_err(|e| RentalError::from_store(EntityKind::Car, e))?;

        debug!(
            target: LOG_TARGET,
            "{} car(s) match color {}", cars.len(), wanted
        );
        self.notify(RentalEvent::CarsSelectedByColor {
            color: wanted,
            car_ids: cars.iter().map(|car| car.car_id.clone()).collect(),
        });
        Ok(cars)
    }
}
