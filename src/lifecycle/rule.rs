//! A single guarded status change.

use super::error::BuildError;
use crate::core::{Guard, State};

/// One edge of a lifecycle: `operation` moves a record from any of the
/// `from` states to `to`, provided the optional guard holds.
#[derive(Clone, Debug)]
pub struct Rule<S: State> {
    pub operation: String,
    pub from: Vec<S>,
    pub to: S,
    pub guard: Option<Guard<S>>,
}

impl<S: State> Rule<S> {
    /// Check if this rule can fire from the current state (pure).
    pub fn can_fire(&self, current: &S) -> bool {
        if !self.from.contains(current) {
            return false;
        }

        self.guard.as_ref().is_none_or(|g| g.check(current))
    }

    /// Human-readable list of accepted source states.
    pub fn expected(&self) -> String {
        self.from
            .iter()
            .map(|s| s.name())
            .collect::<Vec<_>>()
            .join(" or ")
    }
}

/// Builder for constructing rules with a fluent API.
pub struct RuleBuilder<S: State> {
    operation: String,
    from: Vec<S>,
    to: Option<S>,
    guard: Option<Guard<S>>,
}

impl<S: State + 'static> RuleBuilder<S> {
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            from: Vec::new(),
            to: None,
            guard: None,
        }
    }

    /// Add an accepted source state. May be called repeatedly.
    pub fn from(mut self, state: S) -> Self {
        if !self.from.contains(&state) {
            self.from.push(state);
        }
        self
    }

    /// Set the target state (required).
    pub fn to(mut self, state: S) -> Self {
        self.to = Some(state);
        self
    }

    pub fn guard(mut self, guard: Guard<S>) -> Self {
        self.guard = Some(guard);
        self
    }

    /// Add a guard using a closure (optional).
    pub fn when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        self.guard = Some(Guard::new(predicate));
        self
    }

    pub fn build(self) -> Result<Rule<S>, BuildError> {
        if self.from.is_empty() {
            return Err(BuildError::MissingFromState(self.operation));
        }
        let Some(to) = self.to else {
            return Err(BuildError::MissingToState(self.operation));
        };

        Ok(Rule {
            operation: self.operation,
            from: self.from,
            to,
            guard: self.guard,
        })
    }
}
