//! Sample network used by the walkthrough and integration tests.

use crate::error::Result;
use crate::ledger::RentalLedger;
use crate::model::{Participant, Role};
use log::*;

const LOG_TARGET: &str = "carrental::demo";

/// Participants, licenses and cars of the sample rental network.
///
/// Licenses are uploaded but left pending; approving them is part of the
/// walkthrough.
pub fn seed_demo_data(ledger: &RentalLedger) -> Result<()> {
    let participants = [
        Participant::new("alice", "Alice", "Hamilton", "UK", Role::Customer),
        Participant::new("bob", "Bob", "Appleton", "UK", Role::Customer),
        Participant::new("matias", "Matias", "Manager", "UK", Role::Manager),
        Participant::new("ella", "Ella", "Sales", "UK", Role::SalesManager),
        Participant::new("charlie", "Charlie", "Support", "UK", Role::CustomerSupport),
    ];
    for participant in participants {
        ledger.register_participant(participant)?;
    }

    ledger.upload_license("license1", "alice")?;
    ledger.upload_license("license2", "bob")?;

    ledger.create_car("car1", "Toyota", "Camry", "Blue", 2022, 50.0)?;
    ledger.create_car("car2", "Honda", "Accord", "Red", 2021, 45.0)?;

    info!(target: LOG_TARGET, "Demo data seeded");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RentalConfig;
    use crate::model::{CarStatus, LicenseStatus};

    #[test]
    fn seeds_pending_licenses_and_available_cars() {
        let ledger = RentalLedger::in_memory(
            RentalConfig::builder()
                .require_registered_customer(true)
                .build(),
        );
        seed_demo_data(&ledger).unwrap();

        assert_eq!(
            ledger.get_license("license1").unwrap().status,
            LicenseStatus::Pending
        );
        assert_eq!(ledger.get_license("license2").unwrap().customer_id, "bob");
        assert_eq!(ledger.available_cars().unwrap().len(), 2);
        assert_eq!(ledger.get_car("car2").unwrap().status, CarStatus::Available);
        assert_eq!(ledger.get_participant("ella").unwrap().role, Role::SalesManager);
    }

    #[test]
    fn seeding_twice_fails() {
        let ledger = RentalLedger::in_memory(RentalConfig::default());
        seed_demo_data(&ledger).unwrap();

        assert!(seed_demo_data(&ledger).is_err());
    }
}
