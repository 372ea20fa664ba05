//! User interface rendering layer with component-based architecture.
//!
//! This module turns the shell state into ANSI-styled output through
//! composable rendering components, coloured by the palette of the active
//! theme.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Shared rendering utilities (highlighting, widths)
//! - [`theme`]: Light/dark palettes and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::{Palette, Palettes};
pub use viewmodel::{
    ContentPanel, FooterInfo, HeaderInfo, ModalInfo, NavItem, ResultItem, SearchBarInfo,
    UIViewModel,
};
