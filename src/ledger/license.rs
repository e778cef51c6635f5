//! License review operations.

use super::{advance_record, RentalLedger};
use crate::core::{Guard, StateTransition};
use crate::error::{EntityKind, RentalError, Result};
use crate::events::RentalEvent;
use crate::lifecycle::{license_lifecycle, APPROVE, REJECT};
use crate::model::{License, LicenseStatus};
use crate::validation::Validate;
use log::*;

const LOG_TARGET: &str = "carrental::ledger::license";

impl RentalLedger {
    /// Register a new license for `customer_id`, awaiting review.
    pub fn upload_license(&self, license_id: &str, customer_id: &str) -> Result<License> {
        let license = License::pending(license_id, customer_id);
        license.validated(&self.config)?;
        self.ensure_customer(customer_id)?;

        self.licenses
            .add(license.clone())
            .map_err(|e| RentalError::from_store(EntityKind::License, e))?;

        info!(
            target: LOG_TARGET,
            "License {} uploaded for customer {}", license_id, customer_id
        );
        self.notify(RentalEvent::LicenseUploaded {
            license_id: license.license_id.clone(),
            customer_id: license.customer_id.clone(),
        });
        Ok(license)
    }

    /// Approve a pending license.
    pub fn approve_license(&self, license_id: &str) -> Result<License> {
        let license = self.review_license(license_id, APPROVE)?;
        self.notify(RentalEvent::LicenseApproved {
            license_id: license.license_id.clone(),
            customer_id: license.customer_id.clone(),
        });
        Ok(license)
    }

    /// Reject a pending license, recording why.
    pub fn reject_license(&self, license_id: &str, reason: &str) -> Result<License> {
        let license = self.review_license(license_id, REJECT)?;
        self.notify(RentalEvent::LicenseRejected {
            license_id: license.license_id.clone(),
            customer_id: license.customer_id.clone(),
            reason: reason.to_string(),
        });
        Ok(license)
    }

    /// Licenses held by a customer, ordered by id.
    pub fn licenses_of(&self, customer_id: &str) -> Result<Vec<License>> {
        let customer = customer_id.to_string();
        self.licenses
            .query(&Guard::new(move |l: &License| l.customer_id == customer))
            .map_err(|e| RentalError::from_store(EntityKind::License, e))
    }

    fn review_license(&self, license_id: &str, operation: &str) -> Result<License> {
        let (from, license) = advance_record(
            self.licenses.as_ref(),
            EntityKind::License,
            license_lifecycle(),
            operation,
            license_id,
            |l: &License| l.status,
            |_| Ok(()),
            License::with_status,
        )?;

        self.license_journal.record(
            license_id,
            StateTransition::now(from, license.status, operation),
        );
        info!(
            target: LOG_TARGET,
            "License {} {} -> {}", license_id, from, license.status
        );
        Ok(license)
    }

    /// Current status of a license, if it exists.
    pub fn license_status(&self, license_id: &str) -> Result<LicenseStatus> {
        self.get_license(license_id).map(|l| l.status)
    }
}
