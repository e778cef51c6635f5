use crate::status_enum;
use crate::store::Record;
use serde::{Deserialize, Serialize};

status_enum! {
    /// Position of a car in the rental cycle.
    pub enum CarStatus {
        Available => "AVAILABLE",
        Selected => "SELECTED",
        Delivered => "DELIVERED",
        Checked => "CHECKED",
        /// Reserved for damage reports; no operation currently commits it.
        Damaged => "DAMAGED",
        Returned => "RETURNED",
    }
    final: [Damaged]
    error: [Damaged]
}

impl CarStatus {
    /// Whether a car in this status can be rented.
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available | Self::Returned)
    }
}

/// A rentable vehicle.
///
/// Descriptive attributes are fixed at creation. Availability is derived
/// from `status` rather than stored alongside it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Car {
    pub car_id: String,
    pub brand: String,
    pub model: String,
    pub color: String,
    pub year: u16,
    pub rental_rate: f64,
    pub status: CarStatus,
}

impl Car {
    /// New car, ready to rent.
    pub fn new(
        car_id: impl Into<String>,
        brand: impl Into<String>,
        model: impl Into<String>,
        color: impl Into<String>,
        year: u16,
        rental_rate: f64,
    ) -> Self {
        Self {
            car_id: car_id.into(),
            brand: brand.into(),
            model: model.into(),
            color: color.into(),
            year,
            rental_rate,
            status: CarStatus::Available,
        }
    }

    pub fn available(&self) -> bool {
        self.status.is_available()
    }

    /// Copy of this car carrying a new status.
    pub fn with_status(&self, status: CarStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }
}

impl Record for Car {
    const KIND: &'static str = "Car";

    fn key(&self) -> &str {
        &self.car_id
    }
}
