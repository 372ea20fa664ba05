//! Navigation selection store.
//!
//! Selection and navigation are one action: every method that changes the
//! selection takes the [`Navigator`] and navigates in the same call, so the
//! highlighted category can never disagree with the route being shown.

use crate::app::router::Navigator;
use crate::domain::error::{BoardError, Result};
use crate::domain::{Category, CategorySelection, ROOT_PATH};

/// Holds which category is active.
#[derive(Debug, Clone, Copy, Default)]
pub struct NavigationStore {
    selection: CategorySelection,
}

impl NavigationStore {
    /// Returns the current selection.
    #[must_use]
    pub const fn selection(&self) -> CategorySelection {
        self.selection
    }

    /// Selects the category at `index` and navigates to its path.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::UnknownCategory`] if `index` is outside the
    /// category list. Neither selection nor route change in that case.
    pub fn select(&mut self, index: usize, navigator: &mut impl Navigator) -> Result<Category> {
        let category = Category::from_index(index).ok_or(BoardError::UnknownCategory(index))?;
        self.selection = CategorySelection::Selected(index);
        navigator.navigate(category.path());
        tracing::debug!(index, category = category.label(), "category selected");
        Ok(category)
    }

    /// Clears the selection and navigates to the root path.
    pub fn reset(&mut self, navigator: &mut impl Navigator) {
        self.selection = CategorySelection::None;
        navigator.navigate(ROOT_PATH);
        tracing::debug!("category selection reset");
    }

    /// Re-derives the selection from a path the router moved to on its own
    /// (history navigation). Unknown paths map to the sentinel.
    pub fn sync_with_path(&mut self, path: &str) {
        self.selection = Category::index_for_path(path)
            .map_or(CategorySelection::None, CategorySelection::Selected);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::router::Router;

    #[test]
    fn select_highlights_and_navigates_together() {
        let mut store = NavigationStore::default();
        let mut router = Router::default();

        let category = store.select(1, &mut router).unwrap();

        assert_eq!(category, Category::Youtube);
        assert_eq!(store.selection(), CategorySelection::Selected(1));
        assert_eq!(router.current_path(), "/youtube");
    }

    #[test]
    fn reset_returns_to_root() {
        let mut store = NavigationStore::default();
        let mut router = Router::default();
        store.select(0, &mut router).unwrap();

        store.reset(&mut router);

        assert!(store.selection().is_none());
        assert_eq!(router.current_path(), ROOT_PATH);
    }

    #[test]
    fn unknown_index_changes_nothing() {
        let mut store = NavigationStore::default();
        let mut router = Router::default();
        store.select(3, &mut router).unwrap();

        let err = store.select(42, &mut router).unwrap_err();

        assert!(matches!(err, BoardError::UnknownCategory(42)));
        assert_eq!(store.selection(), CategorySelection::Selected(3));
        assert_eq!(router.current_path(), "/x");
    }
}
