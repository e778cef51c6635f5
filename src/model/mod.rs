//! Records held in the registries.

mod car;
mod license;
mod participant;

pub use car::{Car, CarStatus};
pub use license::{License, LicenseStatus};
pub use participant::{Participant, Role};
