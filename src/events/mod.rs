//! Notifications emitted after committed transitions.
//!
//! Emission is fire-and-forget: a notifier cannot fail an operation and
//! is only called once the registry write has succeeded.

mod notifier;

pub use notifier::{LogNotifier, Notifier, RecordingNotifier};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A completed transition, named after the event the host would emit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event")]
pub enum RentalEvent {
    LicenseUploaded {
        license_id: String,
        customer_id: String,
    },
    LicenseApproved {
        license_id: String,
        customer_id: String,
    },
    LicenseRejected {
        license_id: String,
        customer_id: String,
        reason: String,
    },
    CarCreated {
        car_id: String,
    },
    CarSelected {
        car_id: String,
        customer_id: String,
        license_id: String,
    },
    CarDelivered {
        car_id: String,
    },
    CarInspected {
        car_id: String,
    },
    CarReturned {
        car_id: String,
    },
    CarRemoved {
        car_id: String,
        rental_rate: f64,
    },
    CarsSelectedByColor {
        color: String,
        car_ids: Vec<String>,
    },
}

impl RentalEvent {
    /// Unqualified event name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::LicenseUploaded { .. } => "LicenseUploaded",
            Self::LicenseApproved { .. } => "LicenseApproved",
            Self::LicenseRejected { .. } => "LicenseRejected",
            Self::CarCreated { .. } => "CarCreated",
            Self::CarSelected { .. } => "CarSelected",
            Self::CarDelivered { .. } => "CarDelivered",
            Self::CarInspected { .. } => "CarInspected",
            Self::CarReturned { .. } => "CarReturned",
            Self::CarRemoved { .. } => "CarRemoved",
            Self::CarsSelectedByColor { .. } => "CarsSelectedByColor",
        }
    }

    /// Ids of the records the event is about.
    pub fn subjects(&self) -> Vec<&str> {
        match self {
            Self::LicenseUploaded { license_id, .. }
            | Self::LicenseApproved { license_id, .. }
            | Self::LicenseRejected { license_id, .. } => vec![license_id.as_str()],
            Self::CarSelected {
                car_id, license_id, ..
            } => vec![car_id.as_str(), license_id.as_str()],
            Self::CarCreated { car_id }
            | Self::CarDelivered { car_id }
            | Self::CarInspected { car_id }
            | Self::CarReturned { car_id }
            | Self::CarRemoved { car_id, .. } => vec![car_id.as_str()],
            Self::CarsSelectedByColor { car_ids, .. } => {
                car_ids.iter().map(String::as_str).collect()
            }
        }
    }
}

/// An emitted event as captured by a notifier.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EventRecord {
    pub id: Uuid,
    pub emitted_at: DateTime<Utc>,
    /// Namespaced name, e.g. `org.example.carrental.LicenseApproved`
    pub name: String,
    pub payload: serde_json::Value,
}

impl EventRecord {
    pub fn capture(namespace: &str, event: &RentalEvent) -> Self {
        Self {
            id: Uuid::new_v4(),
            emitted_at: Utc::now(),
            name: format!("{}.{}", namespace, event.name()),
            payload: serde_json::to_value(event).unwrap_or(serde_json::Value::Null),
        }
    }

    /// Decode the payload back into an event.
    pub fn event(&self) -> Option<RentalEvent> {
        serde_json::from_value(self.payload.clone()).ok()
    }
}
