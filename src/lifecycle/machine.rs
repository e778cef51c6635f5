//! Lifecycle: a named table of rules over one status type.

use super::error::{BuildError, LifecycleError};
use super::rule::{Rule, RuleBuilder};
use crate::core::State;

/// Declarative transition table for one record type.
///
/// A lifecycle holds no current state of its own; records carry their
/// status and the lifecycle decides where an operation takes them.
#[derive(Clone, Debug)]
pub struct Lifecycle<S: State> {
    name: String,
    initial: S,
    rules: Vec<Rule<S>>,
}

impl<S: State + 'static> Lifecycle<S> {
    pub fn builder(name: impl Into<String>) -> LifecycleBuilder<S> {
        LifecycleBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Status every new record starts in.
    pub fn initial(&self) -> &S {
        &self.initial
    }

    pub fn rules(&self) -> &[Rule<S>] {
        &self.rules
    }

    pub fn rule(&self, operation: &str) -> Option<&Rule<S>> {
        self.rules.iter().find(|r| r.operation == operation)
    }

    /// Status reached by applying `operation` to a record in `current` (pure).
    pub fn advance(&self, operation: &str, current: &S) -> Result<S, LifecycleError> {
        let rule = self
            .rule(operation)
            .ok_or_else(|| LifecycleError::UnknownOperation {
                operation: operation.to_string(),
            })?;

        if !rule.can_fire(current) {
            return Err(LifecycleError::Rejected {
                operation: operation.to_string(),
                current: current.name().to_string(),
                expected: rule.expected(),
            });
        }

        Ok(rule.to.clone())
    }

    /// Operations that may fire from `current`.
    pub fn operations_from(&self, current: &S) -> Vec<&str> {
        self.rules
            .iter()
            .filter(|r| r.can_fire(current))
            .map(|r| r.operation.as_str())
            .collect()
    }
}

/// Builder for constructing lifecycles with a fluent API.
pub struct LifecycleBuilder<S: State> {
    name: String,
    initial: Option<S>,
    rules: Vec<Rule<S>>,
}

impl<S: State + 'static> LifecycleBuilder<S> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            initial: None,
            rules: Vec::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Add a rule using a builder.
    pub fn rule(self, builder: RuleBuilder<S>) -> Result<Self, BuildError> {
        let rule = builder.build()?;
        self.add_rule(rule)
    }

    /// Add a pre-built rule; operation names must be unique.
    pub fn add_rule(mut self, rule: Rule<S>) -> Result<Self, BuildError> {
        if self.rules.iter().any(|r| r.operation == rule.operation) {
            return Err(BuildError::DuplicateOperation(rule.operation));
        }
        self.rules.push(rule);
        Ok(self)
    }

    pub fn build(self) -> Result<Lifecycle<S>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if self.rules.is_empty() {
            return Err(BuildError::NoRules);
        }

        Ok(Lifecycle {
            name: self.name,
            initial,
            rules: self.rules,
        })
    }
}
