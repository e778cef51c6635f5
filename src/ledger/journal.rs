//! Per-record transition journal.

use crate::core::{State, StateHistory, StateTransition};
use log::*;
use std::collections::HashMap;
use std::sync::RwLock;

const LOG_TARGET: &str = "carrental::ledger::journal";

/// Histories of committed transitions, keyed by record id.
pub struct Journal<S: State> {
    entries: RwLock<HashMap<String, StateHistory<S>>>,
}

impl<S: State> Default for Journal<S> {
    fn default() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }
}

impl<S: State> Journal<S> {
    pub fn record(&self, id: &str, transition: StateTransition<S>) {
        match self.entries.write() {
            Ok(mut entries) => {
                let history = entries.remove(id).unwrap_or_default();
                entries.insert(id.to_string(), history.record(transition));
            }
            Err(_) => warn!(
                target: LOG_TARGET,
                "Journal lock poisoned, dropped {} transition for {}",
                transition.operation,
                id
            ),
        }
    }

    /// Drop the history of `id`, e.g. once its record is removed.
    pub fn forget(&self, id: &str) {
        match self.entries.write() {
            Ok(mut entries) => {
                entries.remove(id);
            }
            Err(_) => warn!(
                target: LOG_TARGET,
                "Journal lock poisoned, could not forget {}", id
            ),
        }
    }

    /// History of `id`; empty when nothing was committed for it.
    pub fn history(&self, id: &str) -> StateHistory<S> {
        self.entries
            .read()
            .ok()
            .and_then(|entries| entries.get(id).cloned())
            .unwrap_or_default()
    }
}
