//! Accumulating validation of transaction input.
//!
//! Checks are combined with Stillwater's `Validation`, so a caller gets
//! every problem with a record in one `InvalidArgument` error instead of
//! fixing fields one at a time.

mod violations;

pub use violations::FieldViolation;

use crate::config::RentalConfig;
use crate::error::RentalError;
use crate::model::{Car, License, Participant};
use std::fmt::Display;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of one or more checks.
pub type Checked = Validation<(), NonEmptyVec<FieldViolation>>;

/// Input records that can be checked before they reach the ledger.
pub trait Validate {
    fn validate(&self, config: &RentalConfig) -> Checked;

    /// Run the checks and fold the outcome into a `RentalError`.
    fn validated(&self, config: &RentalConfig) -> Result<(), RentalError> {
        into_result(self.validate(config))
    }
}

/// Field must be present and not blank.
pub fn required(field: &'static str, value: &str) -> Checked {
    if value.trim().is_empty() {
        Validation::fail(FieldViolation::Missing { field })
    } else {
        Validation::success(())
    }
}

/// Field must be finite and strictly positive.
pub fn positive(field: &'static str, value: f64) -> Checked {
    if value.is_finite() && value > 0.0 {
        Validation::success(())
    } else {
        Validation::fail(FieldViolation::NotPositive { field, value })
    }
}

/// Field must fall inside `min..=max`.
pub fn within<T>(field: &'static str, value: T, min: T, max: T) -> Checked
where
    T: PartialOrd + Display,
{
    if value >= min && value <= max {
        Validation::success(())
    } else {
        Validation::fail(FieldViolation::OutOfRange {
            field,
            min: min.to_string(),
            max: max.to_string(),
            value: value.to_string(),
        })
    }
}

/// Combine checks, keeping ALL violations.
pub fn all(checks: Vec<Checked>) -> Checked {
    Validation::all_vec(checks).map(|_| ())
}

pub fn into_result(checked: Checked) -> Result<(), RentalError> {
    match checked {
        Validation::Success(_) => Ok(()),
        Validation::Failure(errors) => Err(RentalError::InvalidArgument {
            violations: errors.iter().map(ToString::to_string).collect(),
        }),
    }
}

impl Validate for License {
    fn validate(&self, _config: &RentalConfig) -> Checked {
        all(vec![
            required("license_id", &self.license_id),
            required("customer_id", &self.customer_id),
        ])
    }
}

impl Validate for Car {
    fn validate(&self, config: &RentalConfig) -> Checked {
        let mut checks = vec![
            required("car_id", &self.car_id),
            required("brand", &self.brand),
            required("model", &self.model),
            required("color", &self.color),
            within("year", self.year, config.min_model_year, u16::MAX),
            positive("rental_rate", self.rental_rate),
        ];
        // Only bound rates that are already known to be positive.
        if self.rental_rate.is_finite() && self.rental_rate > 0.0 {
            checks.push(within(
                "rental_rate",
                self.rental_rate,
                0.0,
                config.max_rental_rate,
            ));
        }
        all(checks)
    }
}

impl Validate for Participant {
    fn validate(&self, _config: &RentalConfig) -> Checked {
        all(vec![
            required("participant_id", &self.participant_id),
            required("first_name", &self.first_name),
            required("last_name", &self.last_name),
        ])
    }
}
