//! Theme store with write-through persistence.
//!
//! The in-memory value is authoritative for the session. Every mutation is
//! followed by a write to the storage backend; a failed write is logged and
//! otherwise ignored, so a blocked persistence layer never breaks theming.

use crate::domain::Theme;
use crate::storage::{Storage, THEME_KEY};

/// Holds the active [`Theme`] and the backend it is persisted to.
#[derive(Debug)]
pub struct ThemeStore {
    current: Theme,
    storage: Box<dyn Storage>,
    persisted: bool,
}

impl ThemeStore {
    /// Loads the persisted theme from `storage`.
    ///
    /// An absent value, an unreadable backend or anything other than
    /// `"light"`/`"dark"` yields [`Theme::Light`].
    ///
    /// # Examples
    ///
    /// ```
    /// use custom_board::domain::Theme;
    /// use custom_board::storage::MemoryStorage;
    /// use custom_board::stores::ThemeStore;
    ///
    /// let store = ThemeStore::load(Box::new(MemoryStorage::with_value("theme", "dark")));
    /// assert_eq!(store.get(), Theme::Dark);
    ///
    /// let store = ThemeStore::load(Box::new(MemoryStorage::default()));
    /// assert_eq!(store.get(), Theme::Light);
    /// ```
    #[must_use]
    pub fn load(storage: Box<dyn Storage>) -> Self {
        let current = match storage.get(THEME_KEY) {
            Ok(Some(value)) => value.parse().unwrap_or_else(|e| {
                tracing::debug!(error = %e, "ignoring persisted theme");
                Theme::default()
            }),
            Ok(None) => Theme::default(),
            Err(e) => {
                tracing::warn!(error = %e, "could not read persisted theme");
                Theme::default()
            }
        };

        tracing::debug!(theme = %current, "theme loaded");

        Self {
            current,
            storage,
            persisted: true,
        }
    }

    /// Returns the active theme.
    #[must_use]
    pub const fn get(&self) -> Theme {
        self.current
    }

    /// Sets the active theme and persists it.
    pub fn set(&mut self, theme: Theme) {
        self.current = theme;
        self.persist();
    }

    /// Flips light/dark, persists the result and returns it.
    pub fn toggle(&mut self) -> Theme {
        self.set(self.current.toggled());
        self.current
    }

    /// Whether the last write reached the storage backend.
    #[must_use]
    pub const fn is_persisted(&self) -> bool {
        self.persisted
    }

    /// Reads back what the backend currently holds for the theme key.
    #[must_use]
    pub fn stored_value(&self) -> Option<String> {
        self.storage.get(THEME_KEY).ok().flatten()
    }

    fn persist(&mut self) {
        match self.storage.set(THEME_KEY, self.current.as_str()) {
            Ok(()) => self.persisted = true,
            Err(e) => {
                tracing::warn!(error = %e, theme = %self.current, "theme not persisted, keeping it in memory");
                self.persisted = false;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn invalid_persisted_value_defaults_to_light() {
        let store = ThemeStore::load(Box::new(MemoryStorage::with_value(THEME_KEY, "solarized")));
        assert_eq!(store.get(), Theme::Light);
    }

    #[test]
    fn toggle_twice_is_identity_and_storage_tracks_memory() {
        let mut store = ThemeStore::load(Box::new(MemoryStorage::default()));
        let original = store.get();

        let once = store.toggle();
        assert_eq!(once, original.toggled());
        assert_eq!(store.stored_value().as_deref(), Some(once.as_str()));

        let twice = store.toggle();
        assert_eq!(twice, original);
        assert_eq!(store.stored_value().as_deref(), Some(twice.as_str()));
    }

    #[test]
    fn unavailable_storage_keeps_theme_in_memory() {
        let mut store = ThemeStore::load(Box::new(MemoryStorage::unavailable()));
        assert_eq!(store.toggle(), Theme::Dark);
        assert_eq!(store.get(), Theme::Dark);
        assert!(!store.is_persisted());
        assert_eq!(store.stored_value(), None);
    }

    #[test]
    fn set_persists_the_exact_value() {
        let mut store = ThemeStore::load(Box::new(MemoryStorage::default()));
        store.set(Theme::Dark);
        store.set(Theme::Dark);
        assert_eq!(store.stored_value().as_deref(), Some("dark"));
        assert!(store.is_persisted());
    }
}
