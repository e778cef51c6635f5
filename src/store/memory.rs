//! In-process registry backed by an ordered map.

use super::{Record, Registry, StoreError, Versioned};
use crate::core::Guard;
use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Registry kept in memory behind a read/write lock.
///
/// Every write takes the lock exclusively, so two conditional updates
/// against the same version can never both succeed.
pub struct InMemoryRegistry<T: Record> {
    records: RwLock<BTreeMap<String, Versioned<T>>>,
}

impl<T: Record> Default for InMemoryRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> InMemoryRegistry<T> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(BTreeMap::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.read().map(|records| records.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, BTreeMap<String, Versioned<T>>>, StoreError> {
        self.records
            .read()
            .map_err(|_| StoreError::Poisoned(T::KIND))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, BTreeMap<String, Versioned<T>>>, StoreError> {
        self.records
            .write()
            .map_err(|_| StoreError::Poisoned(T::KIND))
    }
}

impl<T: Record> Registry<T> for InMemoryRegistry<T> {
    fn get(&self, id: &str) -> Result<Versioned<T>, StoreError> {
        self.read()?
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    fn add(&self, record: T) -> Result<(), StoreError> {
        let mut records = self.write()?;
        let key = record.key().to_string();
        if records.contains_key(&key) {
            return Err(StoreError::AlreadyExists(key));
        }
        records.insert(key, Versioned { record, version: 1 });
        Ok(())
    }

    fn update(&self, record: T) -> Result<u64, StoreError> {
        let mut records = self.write()?;
        let entry = records
            .get_mut(record.key())
            .ok_or_else(|| StoreError::NotFound(record.key().to_string()))?;
        entry.version += 1;
        entry.record = record;
        Ok(entry.version)
    }

    fn update_versioned(&self, record: T, expected_version: u64) -> Result<u64, StoreError> {
        let mut records = self.write()?;
        let entry = records
            .get_mut(record.key())
            .ok_or_else(|| StoreError::NotFound(record.key().to_string()))?;
        if entry.version != expected_version {
            return Err(StoreError::VersionMismatch {
                id: record.key().to_string(),
                expected: expected_version,
                actual: entry.version,
            });
        }
        entry.version += 1;
        entry.record = record;
        Ok(entry.version)
    }

    fn remove(&self, id: &str) -> Result<T, StoreError> {
        self.write()?
            .remove(id)
            .map(|versioned| versioned.record)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    fn query(&self, predicate: &Guard<T>) -> Result<Vec<T>, StoreError> {
        Ok(self
            .read()?
            .values()
            .filter(|versioned| predicate.check(&versioned.record))
            .map(|versioned| versioned.record.clone())
            .collect())
    }
}
