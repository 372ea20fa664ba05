//! Top-level rendering coordinator.
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to the shell components with the
//!    palette of the active theme
//!
//! # Example
//!
//! ```rust
//! use custom_board::app::AppState;
//! use custom_board::storage::MemoryStorage;
//! use custom_board::stores::ThemeStore;
//! use custom_board::ui::{render, Palettes};
//!
//! let theme = ThemeStore::load(Box::new(MemoryStorage::default()));
//! let state = AppState::new(theme, None, Palettes::default());
//! render(&state, 24, 80); // Renders to stdout
//! ```

use crate::app::AppState;
use crate::ui::components;

/// Renders the plugin UI to stdout.
///
/// Prints ANSI-styled output using absolute cursor positioning. Does not
/// clear the screen; the host hands over a fresh pane for every render.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);

    components::render_shell(&viewmodel, state.palette(), rows, cols);
}
