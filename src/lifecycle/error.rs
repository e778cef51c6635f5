//! Lifecycle construction and evaluation errors.

use thiserror::Error;

/// Errors raised while assembling rules and lifecycles.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("No rules defined. Add at least one rule")]
    NoRules,

    #[error("Rule '{0}' has no source state. Call .from(state)")]
    MissingFromState(String),

    #[error("Rule '{0}' has no target state. Call .to(state)")]
    MissingToState(String),

    #[error("Rule '{0}' is defined twice")]
    DuplicateOperation(String),
}

/// Errors raised when advancing a status through a lifecycle.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LifecycleError {
    #[error("No rule named '{operation}'")]
    UnknownOperation { operation: String },

    #[error("'{operation}' not allowed from {current} (expected {expected})")]
    Rejected {
        operation: String,
        current: String,
        expected: String,
    },
}
