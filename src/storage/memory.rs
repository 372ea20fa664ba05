//! Process-local storage backend.
//!
//! Used when the data directory cannot be opened (preferences then last for
//! the session only) and by tests. [`MemoryStorage::unavailable`] builds a
//! backend whose writes always fail, modelling a blocked persistence layer.

use crate::domain::error::{BoardError, Result};
use crate::storage::backend::Storage;
use std::collections::BTreeMap;

/// In-memory key/value storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    values: BTreeMap<String, String>,
    reject_writes: bool,
}

impl MemoryStorage {
    /// Creates a backend pre-populated with one value.
    #[must_use]
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut storage = Self::default();
        storage.values.insert(key.to_string(), value.to_string());
        storage
    }

    /// Creates a backend that refuses every write.
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            values: BTreeMap::new(),
            reject_writes: true,
        }
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if self.reject_writes {
            return Err(BoardError::Storage("storage is unavailable".to_string()));
        }
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
