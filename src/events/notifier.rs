//! Notifier implementations.

use super::{EventRecord, RentalEvent};
use log::*;
use std::sync::Mutex;

const LOG_TARGET: &str = "carrental::events";

/// Receives events after a transition has been committed.
pub trait Notifier: Send + Sync {
    fn emit(&self, event: &RentalEvent);
}

/// Writes every event to the log as JSON.
#[derive(Debug, Clone)]
pub struct LogNotifier {
    namespace: String,
}

impl LogNotifier {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }
}

impl Notifier for LogNotifier {
    fn emit(&self, event: &RentalEvent) {
        match serde_json::to_string(event) {
            Ok(payload) => info!(
                target: LOG_TARGET,
                "{}.{} {}",
                self.namespace,
                event.name(),
                payload
            ),
            Err(e) => warn!(
                target: LOG_TARGET,
                "Could not encode {} event: {}",
                event.name(),
                e
            ),
        }
    }
}

/// Keeps every emitted event in memory.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    namespace: String,
    records: Mutex<Vec<EventRecord>>,
}

impl RecordingNotifier {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            records: Mutex::new(Vec::new()),
        }
    }

    pub fn records(&self) -> Vec<EventRecord> {
        self.records
            .lock()
            .map(|records| records.clone())
            .unwrap_or_default()
    }

    /// Unqualified names of the recorded events, oldest first.
    pub fn names(&self) -> Vec<String> {
        self.records()
            .iter()
            .filter_map(|record| record.name.rsplit('.').next().map(str::to_string))
            .collect()
    }

    pub fn events(&self) -> Vec<RentalEvent> {
        self.records()
            .iter()
            .filter_map(EventRecord::event)
            .collect()
    }

    pub fn clear(&self) {
        if let Ok(mut records) = self.records.lock() {
            records.clear();
        }
    }
}

impl Notifier for RecordingNotifier {
    fn emit(&self, event: &RentalEvent) {
        let record = EventRecord::capture(&self.namespace, event);
        debug!(target: LOG_TARGET, "Recorded {} ({})", record.name, record.id);
        if let Ok(mut records) = self.records.lock() {
            records.push(record);
        }
    }
}
