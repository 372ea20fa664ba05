//! Navigable board categories and the selection sentinel.
//!
//! Categories form a fixed, ordered list. Each one maps 1:1 to a route path;
//! the root path `/` belongs to no category and is where the logo leads.

/// Path of the home route.
pub const ROOT_PATH: &str = "/";

/// A navigable section of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    News,
    Youtube,
    Instagram,
    X,
    Bookmark,
}

/// Categories in navigation-bar order.
pub const CATEGORIES: [Category; 5] = [
    Category::News,
    Category::Youtube,
    Category::Instagram,
    Category::X,
    Category::Bookmark,
];

impl Category {
    /// Looks up a category by its position in [`CATEGORIES`].
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        CATEGORIES.get(index).copied()
    }

    /// Route path this category navigates to.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::News => "/news",
            Self::Youtube => "/youtube",
            Self::Instagram => "/instagram",
            Self::X => "/x",
            Self::Bookmark => "/bookmark",
        }
    }

    /// Label shown in the navigation bar.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::News => "News",
            Self::Youtube => "Youtube",
            Self::Instagram => "Instagram",
            Self::X => "X",
            Self::Bookmark => "Bookmark",
        }
    }

    /// Reverse lookup from a route path, used when walking back through history.
    #[must_use]
    pub fn index_for_path(path: &str) -> Option<usize> {
        CATEGORIES.iter().position(|c| c.path() == path)
    }
}

/// Which category is active, or the "none" sentinel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategorySelection {
    /// No category chosen yet (initial state, and after the logo is clicked).
    #[default]
    None,
    /// Index into [`CATEGORIES`].
    Selected(usize),
}

impl CategorySelection {
    #[must_use]
    pub const fn is_none(self) -> bool {
        matches!(self, Self::None)
    }

    #[must_use]
    pub const fn index(self) -> Option<usize> {
        match self {
            Self::None => None,
            Self::Selected(index) => Some(index),
        }
    }

    #[must_use]
    pub fn category(self) -> Option<Category> {
        self.index().and_then(Category::from_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_a_distinct_path() {
        let mut paths: Vec<&str> = CATEGORIES.iter().map(|c| c.path()).collect();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), CATEGORIES.len());
        assert!(!paths.contains(&ROOT_PATH));
    }

    #[test]
    fn path_lookup_inverts_index_lookup() {
        for (index, category) in CATEGORIES.iter().enumerate() {
            assert_eq!(Category::index_for_path(category.path()), Some(index));
        }
        assert_eq!(Category::index_for_path(ROOT_PATH), None);
    }

    #[test]
    fn out_of_range_index_has_no_category() {
        assert_eq!(Category::from_index(CATEGORIES.len()), None);
        assert_eq!(CategorySelection::Selected(99).category(), None);
    }
}
