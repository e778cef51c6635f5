//! Error taxonomy for rental operations.

use crate::lifecycle::LifecycleError;
use crate::store::StoreError;
use thiserror::Error;

/// Which kind of record an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    License,
    Car,
    Participant,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::License => "License",
            Self::Car => "Car",
            Self::Participant => "Participant",
        })
    }
}

/// Errors returned by ledger operations.
///
/// Every error aborts its operation before anything is persisted.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RentalError {
    #[error("{kind} '{id}' not found")]
    NotFound { kind: EntityKind, id: String },

    #[error("{kind} '{id}' already exists")]
    AlreadyExists { kind: EntityKind, id: String },

    #[error("cannot {operation} {kind} '{id}': status is {current}, expected {expected}")]
    InvalidState {
        kind: EntityKind,
        id: String,
        operation: String,
        current: String,
        expected: String,
    },

    #[error("invalid argument: {}", .violations.join("; "))]
    InvalidArgument { violations: Vec<String> },

    #[error("car '{car_id}' is damaged: the customer must make an extra payment")]
    ExtraPaymentRequired { car_id: String },

    #[error("store failure: {0}")]
    Store(StoreError),
}

impl RentalError {
    pub fn not_found(kind: EntityKind, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }

    pub fn invalid_argument(violation: impl Into<String>) -> Self {
        Self::InvalidArgument {
            violations: vec![violation.into()],
        }
    }

    /// Translate a registry error for a record of `kind`.
    pub fn from_store(kind: EntityKind, err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => Self::NotFound { kind, id },
            StoreError::AlreadyExists(id) => Self::AlreadyExists { kind, id },
            other => Self::Store(other),
        }
    }

    /// Translate a rejected lifecycle step for record `id`.
    pub fn from_lifecycle(kind: EntityKind, id: impl Into<String>, err: LifecycleError) -> Self {
        match err {
            LifecycleError::Rejected {
                operation,
                current,
                expected,
            } => Self::InvalidState {
                kind,
                id: id.into(),
                operation,
                current,
                expected,
            },
            LifecycleError::UnknownOperation { operation } => Self::InvalidArgument {
                violations: vec![format!("unknown {kind} operation '{operation}'")],
            },
        }
    }

    pub fn is_invalid_state(&self) -> bool {
        matches!(self, Self::InvalidState { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

pub type Result<T, E = RentalError> = std::result::Result<T, E>;
