//! Routing collaborator.
//!
//! The shell does not render pages itself; it only records which path the
//! content panel should show. Navigation is "set the current path and push
//! the old one onto a bounded history".

use crate::domain::ROOT_PATH;
use std::collections::VecDeque;

/// Maximum number of paths remembered for [`Router::back`].
const HISTORY_LIMIT: usize = 32;

/// Anything that can navigate to a named path.
///
/// The navigation store takes this as a parameter so selection and
/// navigation always happen in the same call.
pub trait Navigator {
    /// Navigates to `path`.
    fn navigate(&mut self, path: &str);
}

/// Path-based router with a bounded back history.
#[derive(Debug, Clone)]
pub struct Router {
    current: String,
    history: VecDeque<String>,
}

impl Default for Router {
    fn default() -> Self {
        Self {
            current: ROOT_PATH.to_string(),
            history: VecDeque::new(),
        }
    }
}

impl Router {
    /// Path of the route currently shown.
    #[must_use]
    pub fn current_path(&self) -> &str {
        &self.current
    }

    /// Returns to the previously visited path, if any.
    pub fn back(&mut self) -> Option<&str> {
        let previous = self.history.pop_back()?;
        tracing::debug!(from = %self.current, to = %previous, "navigating back");
        self.current = previous;
        Some(&self.current)
    }

    /// Whether [`Router::back`] would do anything.
    #[must_use]
    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }
}

impl Navigator for Router {
    fn navigate(&mut self, path: &str) {
        if self.current == path {
            return;
        }
        tracing::debug!(from = %self.current, to = %path, "navigating");
        let previous = std::mem::replace(&mut self.current, path.to_string());
        self.history.push_back(previous);
        if self.history.len() > HISTORY_LIMIT {
            self.history.pop_front();
        }
    }
}
