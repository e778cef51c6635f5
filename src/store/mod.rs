//! Keyed registries for licenses, cars and participants.
//!
//! The ledger never owns storage. It talks to a [`Registry`] per record
//! type, which behaves like a host asset registry: CRUD a keyed record,
//! return it or fail if absent. Every stored record carries a version so
//! that read-modify-write sequences can be committed conditionally.

mod error;
mod memory;

pub use error::StoreError;
pub use memory::InMemoryRegistry;

use crate::core::Guard;

/// A record that can be kept in a registry.
pub trait Record: Clone + Send + Sync + 'static {
    /// Record type name used in errors and logs.
    const KIND: &'static str;

    /// Unique, immutable key.
    fn key(&self) -> &str;
}

/// A record together with the version it was read at.
#[derive(Clone, Debug, PartialEq)]
pub struct Versioned<T> {
    pub record: T,
    pub version: u64,
}

/// Capability set of a keyed registry.
///
/// Implementations serialize operations against one key; `update_versioned`
/// succeeds only when the stored version still equals `expected_version`.
pub trait Registry<T: Record>: Send + Sync {
    /// Fetch a record and its current version.
    fn get(&self, id: &str) -> Result<Versioned<T>, StoreError>;

    /// Insert a new record at version 1.
    fn add(&self, record: T) -> Result<(), StoreError>;

    /// Replace a record unconditionally, returning the new version.
    fn update(&self, record: T) -> Result<u64, StoreError>;

    /// Replace a record only if nobody wrote it since `expected_version`.
    fn update_versioned(&self, record: T, expected_version: u64) -> Result<u64, StoreError>;

    /// Delete a record, returning what was stored.
    fn remove(&self, id: &str) -> Result<T, StoreError>;

    /// All records matching the predicate, ordered by key.
    fn query(&self, predicate: &Guard<T>) -> Result<Vec<T>, StoreError>;

    /// Fetch a record without its version.
    fn fetch(&self, id: &str) -> Result<T, StoreError> {
        self.get(id).map(|versioned| versioned.record)
    }
}
