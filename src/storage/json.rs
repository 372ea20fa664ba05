//! JSON file-based storage backend.
//!
//! Keeps preferences in a small human-readable JSON file. Writes go to a
//! temporary file first and are then renamed over the target, so a crash
//! never leaves a half-written file behind.
//!
//! # File Format
//!
//! ```json
//! {
//!   "version": 1,
//!   "values": {
//!     "theme": "dark"
//!   }
//! }
//! ```

use crate::domain::error::{BoardError, Result};
use crate::storage::backend::Storage;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Current on-disk format version.
const FORMAT_VERSION: u32 = 1;

/// Top-level structure serialized to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StorageData {
    /// Version of the storage format for future migrations.
    version: u32,

    /// Preference slots.
    #[serde(default)]
    values: BTreeMap<String, String>,
}

impl Default for StorageData {
    fn default() -> Self {
        Self {
            version: FORMAT_VERSION,
            values: BTreeMap::new(),
        }
    }
}

/// JSON file storage backend.
///
/// The whole file is loaded on creation and rewritten on every `set`.
#[derive(Debug)]
pub struct JsonStorage {
    /// Path to the JSON file on disk.
    file_path: PathBuf,

    /// In-memory copy of the file contents.
    data: StorageData,
}

impl JsonStorage {
    /// Creates or opens a JSON storage file.
    ///
    /// Parent directories are created automatically. A file that exists but
    /// does not parse is treated as empty (and logged) rather than rejected,
    /// so a corrupt preference file never blocks startup; the next `set`
    /// replaces it.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created or the
    /// existing file cannot be read.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use custom_board::storage::JsonStorage;
    /// use std::path::PathBuf;
    ///
    /// let storage = JsonStorage::new(PathBuf::from("/tmp/preferences.json"))?;
    /// # Ok::<(), custom_board::BoardError>(())
    /// ```
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "initializing JSON storage");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            tracing::debug!("initializing new empty storage");
            StorageData::default()
        };

        tracing::debug!(value_count = data.values.len(), "storage initialized");

        Ok(Self { file_path, data })
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn load_from_file(path: &Path) -> Result<StorageData> {
        let contents = std::fs::read_to_string(path)?;
        match serde_json::from_str::<StorageData>(&contents) {
            Ok(data) => {
                tracing::debug!(version = data.version, "loaded storage data");
                Ok(data)
            }
            Err(e) => {
                tracing::warn!(error = %e, path = ?path, "preference file unreadable, starting empty");
                Ok(StorageData::default())
            }
        }
    }

    fn save_to_file(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| BoardError::Storage(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        tracing::trace!(path = ?self.file_path, "storage saved");
        Ok(())
    }
}

impl Storage for JsonStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.data.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let _span = tracing::debug_span!("json_set", key = %key, value = %value).entered();

        let previous = self.data.values.insert(key.to_string(), value.to_string());
        if let Err(e) = self.save_to_file() {
            // Keep memory and disk in agreement about what was persisted.
            match previous {
                Some(old) => self.data.values.insert(key.to_string(), old),
                None => self.data.values.remove(key),
            };
            return Err(e);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_survive_reopening() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("preferences.json");

        let mut storage = JsonStorage::new(path.clone()).unwrap();
        storage.set("theme", "dark").unwrap();
        drop(storage);

        let reopened = JsonStorage::new(path).unwrap();
        assert_eq!(reopened.get("theme").unwrap(), Some("dark".to_string()));
    }

    #[test]
    fn corrupt_file_is_treated_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        std::fs::write(&path, "{ not json").unwrap();

        let mut storage = JsonStorage::new(path.clone()).unwrap();
        assert_eq!(storage.get("theme").unwrap(), None);

        storage.set("theme", "light").unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("\"theme\": \"light\""));
    }

    #[test]
    fn failed_write_does_not_change_stored_value() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        let mut storage = JsonStorage::new(path).unwrap();
        storage.set("theme", "light").unwrap();

        // Removing the directory makes the temp-file write fail.
        dir.close().unwrap();

        assert!(storage.set("theme", "dark").is_err());
        assert_eq!(storage.get("theme").unwrap(), Some("light".to_string()));
    }
}
