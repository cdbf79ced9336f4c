//! Concurrent map of string ids to records.

use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use thiserror::Error;

/// Errors from store operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("resource exists: {0}")]
    ResourceExists(String),

    #[error("not found: {0}")]
    NotFound(String),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// A cheaply cloneable handle to a shared record map.
#[derive(Debug)]
pub struct RecordStore<T> {
    inner: Arc<DashMap<String, T>>,
}

impl<T> Clone for RecordStore<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Default for RecordStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RecordStore<T> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(DashMap::new()),
        }
    }

    /// Create a store holding `records`.
    pub fn with_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = (String, T)>,
    {
        Self {
            inner: Arc::new(records.into_iter().collect()),
        }
    }

    /// Insert `data` under `id`. Fails if `id` is already present.
    pub fn create(&self, id: impl Into<String>, data: T) -> StoreResult<String> {
        let id = id.into();
        match self.inner.entry(id.clone()) {
            Entry::Occupied(_) => Err(StoreError::ResourceExists(id)),
            Entry::Vacant(slot) => {
                slot.insert(data);
                Ok(id)
            }
        }
    }

    /// Insert `data` under the next free numeric id and return that id.
    ///
    /// Allocation and insert happen under the id's entry lock; losing a race
    /// for an id just moves on to the next one.
    pub fn insert_next(&self, data: T) -> String {
        loop {
            let id = self.next_id();
            match self.inner.entry(id.clone()) {
                Entry::Occupied(_) => continue,
                Entry::Vacant(slot) => {
                    slot.insert(data);
                    return id;
                }
            }
        }
    }

    /// Replace the record under `id`. Fails if absent.
    pub fn update(&self, id: &str, data: T) -> StoreResult<()> {
        match self.inner.get_mut(id) {
            Some(mut record) => {
                *record = data;
                Ok(())
            }
            None => Err(StoreError::NotFound(id.to_string())),
        }
    }

    /// Remove the record under `id`. Fails if absent.
    pub fn delete(&self, id: &str) -> StoreResult<()> {
        self.inner
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// One greater than the largest numeric id, or `"1"` when there is none.
    pub fn next_id(&self) -> String {
        self.inner
            .iter()
            .filter_map(|entry| entry.key().parse::<u64>().ok())
            .max()
            .map(|max| max.saturating_add(1))
            .unwrap_or(1)
            .to_string()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl<T: Clone> RecordStore<T> {
    /// Copy of the record under `id`. Fails if absent.
    pub fn read(&self, id: &str) -> StoreResult<T> {
        self.inner
            .get(id)
            .map(|record| record.value().clone())
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }
}
