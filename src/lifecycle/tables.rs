//! The license review and car rental lifecycles.

use super::machine::Lifecycle;
use super::rule::RuleBuilder;
use crate::model::{CarStatus, LicenseStatus};
use std::sync::LazyLock;

pub const APPROVE: &str = "approve";
pub const REJECT: &str = "reject";

pub const SELECT: &str = "select";
pub const DELIVER: &str = "deliver";
pub const INSPECT: &str = "inspect";
pub const RETURN: &str = "return";

static LICENSE_LIFECYCLE: LazyLock<Lifecycle<LicenseStatus>> = LazyLock::new(|| {
    build_license_lifecycle().expect("license lifecycle rules are complete")
});

static CAR_LIFECYCLE: LazyLock<Lifecycle<CarStatus>> =
    LazyLock::new(|| build_car_lifecycle().expect("car lifecycle rules are complete"));

/// `PENDING -> APPROVED | REJECTED`; every other status is terminal.
pub fn license_lifecycle() -> &'static Lifecycle<LicenseStatus> {
    &LICENSE_LIFECYCLE
}

/// `AVAILABLE -> SELECTED -> DELIVERED -> CHECKED -> RETURNED`, and a
/// returned car can be selected again.
pub fn car_lifecycle() -> &'static Lifecycle<CarStatus> {
    &CAR_LIFECYCLE
}

fn build_license_lifecycle() -> Result<Lifecycle<LicenseStatus>, super::BuildError> {
    Lifecycle::builder("license")
        .initial(LicenseStatus::Pending)
        .rule(
            RuleBuilder::new(APPROVE)
                .from(LicenseStatus::Pending)
                .to(LicenseStatus::Approved),
        )?
        .rule(
            RuleBuilder::new(REJECT)
                .from(LicenseStatus::Pending)
                .to(LicenseStatus::Rejected),
        )?
        .build()
}

fn build_car_lifecycle() -> Result<Lifecycle<CarStatus>, super::BuildError> {
    Lifecycle::builder("car")
        .initial(CarStatus::Available)
        .rule(
            RuleBuilder::new(SELECT)
                .from(CarStatus::Available)
                .from(CarStatus::Returned)
                .to(CarStatus::Selected)
                .when(CarStatus::is_available),
        )?
        .rule(
            RuleBuilder::new(DELIVER)
                .from(CarStatus::Selected)
                .to(CarStatus::Delivered),
        )?
        .rule(
            RuleBuilder::new(INSPECT)
                .from(CarStatus::Delivered)
                .to(CarStatus::Checked),
        )?
        .rule(
            RuleBuilder::new(RETURN)
                .from(CarStatus::Checked)
                .to(CarStatus::Returned),
        )?
        .build()
}
