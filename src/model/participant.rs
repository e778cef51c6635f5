use crate::store::Record;
use serde::{Deserialize, Serialize};

/// Role a participant plays in the rental network.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Customer,
    Manager,
    SalesManager,
    CustomerSupport,
}

/// A person known to the rental network.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub participant_id: String,
    pub first_name: String,
    pub last_name: String,
    pub country: String,
    pub role: Role,
}

impl Participant {
    pub fn new(
        participant_id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        country: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            participant_id: participant_id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            country: country.into(),
            role,
        }
    }

    pub fn is_customer(&self) -> bool {
        self.role == Role::Customer
    }
}

impl Record for Participant {
    const KIND: &'static str = "Participant";

    fn key(&self) -> &str {
        &self.participant_id
    }
}
