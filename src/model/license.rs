use crate::status_enum;
use crate::store::Record;
use serde::{Deserialize, Serialize};

status_enum! {
    /// Approval state of a customer's driving license.
    pub enum LicenseStatus {
        Pending => "PENDING",
        Approved => "APPROVED",
        Rejected => "REJECTED",
        Expired => "EXPIRED",
        Revoked => "REVOKED",
    }
    final: [Approved, Rejected, Expired, Revoked]
    error: [Rejected, Expired, Revoked]
}

/// A customer's driving license.
///
/// `customer_id` references a participant by key; the license does not own
/// the customer record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct License {
    pub license_id: String,
    pub customer_id: String,
    pub status: LicenseStatus,
}

impl License {
    /// New license awaiting review.
    pub fn pending(license_id: impl Into<String>, customer_id: impl Into<String>) -> Self {
        Self {
            license_id: license_id.into(),
            customer_id: customer_id.into(),
            status: LicenseStatus::Pending,
        }
    }

    pub fn is_approved(&self) -> bool {
        self.status == LicenseStatus::Approved
    }

    /// Copy of this license carrying a new status.
    pub fn with_status(&self, status: LicenseStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }
}

impl Record for License {
    const KIND: &'static str = "License";

    fn key(&self) -> &str {
        &self.license_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_license_is_pending() {
        let license = License::pending("L1", "alice");
        assert_eq!(license.status, LicenseStatus::Pending);
        assert_eq!(license.key(), "L1");
        assert!(!license.is_approved());
    }

    #[test]
    fn with_status_keeps_identity() {
        let license = License::pending("L1", "alice");
        let approved = license.with_status(LicenseStatus::Approved);

        assert_eq!(approved.license_id, "L1");
        assert_eq!(approved.customer_id, "alice");
        assert!(approved.is_approved());
        assert_eq!(license.status, LicenseStatus::Pending);
    }

    #[test]
    fn serializes_with_status_label() {
        let json = serde_json::to_value(License::pending("L1", "alice")).unwrap();
        assert_eq!(json["status"], "PENDING");
        assert_eq!(json["customer_id"], "alice");
    }
}
