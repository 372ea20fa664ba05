//! Storage backend abstraction.
//!
//! This module defines the [`Storage`] trait that abstracts over persistence
//! backends for user preferences. The shell only ever needs a handful of
//! string slots (today just `"theme"`), so the trait is a plain key/value
//! contract rather than anything richer.

use crate::domain::error::Result;

/// Abstraction over persistent key/value preference storage.
///
/// # Implementations
///
/// - [`JsonStorage`](crate::storage::JsonStorage): JSON file with atomic writes (default)
/// - [`MemoryStorage`](crate::storage::MemoryStorage): process-local map, used when
///   the data directory is unavailable and in tests
///
/// # Examples
///
/// ```
/// use custom_board::storage::{MemoryStorage, Storage};
///
/// let mut storage = MemoryStorage::default();
/// storage.set("theme", "dark")?;
/// assert_eq!(storage.get("theme")?, Some("dark".to_string()));
/// # Ok::<(), custom_board::BoardError>(())
/// ```
pub trait Storage: Send + std::fmt::Debug {
    /// Reads the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// The write is durable when this returns `Ok`.
    ///
    /// # Errors
    ///
    /// Returns an error if the value could not be persisted. Callers decide
    /// whether that is fatal; the theme store treats it as non-fatal.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}
