//! Search query store.
//!
//! Plain text holder for the search field. No validation: any string,
//! including the empty one, is a valid query.

/// Holds the raw text of the search field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQueryStore {
    query: String,
}

impl SearchQueryStore {
    /// Returns the current query.
    #[must_use]
    pub fn get(&self) -> &str {
        &self.query
    }

    /// Replaces the query.
    pub fn set(&mut self, query: impl Into<String>) {
        self.query = query.into();
        tracing::trace!(query = %self.query, "search query updated");
    }

    /// Empties the query. Same as `set("")`.
    pub fn clear(&mut self) {
        self.set(String::new());
    }

    /// Appends one typed character.
    pub fn push(&mut self, c: char) {
        let mut next = self.query.clone();
        next.push(c);
        self.set(next);
    }

    /// Removes the last character, if any.
    pub fn pop(&mut self) {
        let mut next = self.query.clone();
        next.pop();
        self.set(next);
    }

    /// Whether the field's clear button should be shown.
    #[must_use]
    pub fn shows_clear_affordance(&self) -> bool {
        !self.query.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_get_round_trips() {
        let mut store = SearchQueryStore::default();
        for q in ["", "gold", "  spaced  ", "<b>tags</b>", "한국 뉴스", "emoji 📈"] {
            store.set(q);
            assert_eq!(store.get(), q);
        }
    }

    #[test]
    fn clear_is_idempotent() {
        let mut store = SearchQueryStore::default();
        store.set("rates");

        store.clear();
        let once = store.clone();
        store.clear();

        assert_eq!(store, once);
        assert_eq!(store.get(), "");
    }

    #[test]
    fn clear_affordance_follows_emptiness() {
        let mut store = SearchQueryStore::default();
        assert!(!store.shows_clear_affordance());
        store.push('a');
        assert!(store.shows_clear_affordance());
        store.pop();
        assert!(!store.shows_clear_affordance());
    }

    #[test]
    fn pop_handles_multibyte_and_empty() {
        let mut store = SearchQueryStore::default();
        store.set("뉴스");
        store.pop();
        assert_eq!(store.get(), "뉴");
        store.pop();
        store.pop();
        assert_eq!(store.get(), "");
    }
}
