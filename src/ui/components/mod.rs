//! Composable UI component renderers.
//!
//! Each component is responsible for rendering one part of the shell.
//!
//! # Components
//!
//! - [`header`]: Title bar with the theme toggle and sign-in stub
//! - [`search`]: Search input box (border, query text, clear affordance)
//! - [`nav`]: Category navigation bar
//! - [`content`]: Routed content panel (home, results, empty, placeholder)
//! - [`modal`]: "Choose a category" overlay
//! - [`footer`]: Help text, keybinding hints and status
//!
//! # Layout
//!
//! ```text
//! [Header]
//! [Search Bar - 3 lines]
//! [Navigation Bar]
//! [Border]
//! [Content Panel]
//! [Blank padding to fill screen]
//! [Border]
//! [Footer]
//! ```
//!
//! The modal, when visible, is drawn last on top of the shell.

mod content;
mod footer;
mod header;
mod modal;
mod nav;
mod search;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Palette;
use crate::ui::viewmodel::UIViewModel;

use content::render_content;
use footer::render_footer;
use header::render_header;
use modal::render_modal;
use nav::render_nav_bar;
use search::render_search_bar;

/// Renders a horizontal border line at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Palette::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Palette::reset());
    row + 1
}

/// Renders the whole shell for one frame.
pub fn render_shell(vm: &UIViewModel, palette: &Palette, rows: usize, cols: usize) {
    let mut current_row = 1;

    current_row = render_header(current_row, &vm.header, palette, cols);
    current_row = render_search_bar(current_row, &vm.search_bar, palette, cols);
    current_row = render_nav_bar(current_row, &vm.nav_items, palette, cols);
    current_row = render_border(current_row, &palette.colors.border, cols);
    let _current_row = render_content(current_row, &vm.content, palette, cols);

    let footer_start = rows;
    let border_row = footer_start.saturating_sub(1);

    render_border(border_row, &palette.colors.border, cols);
    render_footer(footer_start, &vm.footer, palette, cols);

    if let Some(modal) = &vm.modal {
        render_modal(modal, palette, rows, cols);
    }
}
