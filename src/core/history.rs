//! Transition history for a single record.
//!
//! Histories are immutable values: `record` returns a new history and
//! leaves the original untouched.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of one committed status change.
///
/// # Example
///
/// ```rust
/// use carrental::core::StateTransition;
/// use carrental::model::LicenseStatus;
///
/// let transition = StateTransition::now(
///     LicenseStatus::Pending,
///     LicenseStatus::Approved,
///     "approve",
/// );
/// assert_eq!(transition.operation, "approve");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// Status before the operation
    pub from: S,
    /// Status after the operation
    pub to: S,
    /// Operation that produced the change (`"approve"`, `"deliver"`, ...)
    pub operation: String,
    /// When the change was committed
    pub timestamp: DateTime<Utc>,
}

impl<S: State> StateTransition<S> {
    /// Transition stamped with the current time.
    pub fn now(from: S, to: S, operation: impl Into<String>) -> Self {
        Self {
            from,
            to,
            operation: operation.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Ordered history of status changes.
///
/// # Example
///
/// ```rust
/// use carrental::core::{StateHistory, StateTransition};
/// use carrental::model::CarStatus;
///
/// let history = StateHistory::new()
///     .record(StateTransition::now(CarStatus::Available, CarStatus::Selected, "select"))
///     .record(StateTransition::now(CarStatus::Selected, CarStatus::Delivered, "deliver"));
///
/// let path = history.get_path();
/// assert_eq!(path, vec![&CarStatus::Available, &CarStatus::Selected, &CarStatus::Delivered]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// States traversed: the first `from`, then every `to`.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Status reached by the last transition, if any.
    pub fn latest(&self) -> Option<&S> {
        self.transitions.last().map(|t| &t.to)
    }

    /// Time between the first and last transition.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
