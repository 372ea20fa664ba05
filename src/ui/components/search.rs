//! Search bar component renderer.
//!
//! This module renders the search input box with a bordered frame, the query
//! text, a cursor while focused and the clear affordance.

use crate::ui::helpers::{position_cursor, text_width};
use crate::ui::theme::Palette;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 2;

/// Clear affordance drawn at the right edge of a non-empty field.
const CLEAR_MARK: &str = " ×";

/// Renders the search input box at the specified row.
///
/// ```text
/// [margin] ┌──────────────────────┐ [margin]
/// [margin] │ Search: gold▏      × │ [margin]
/// [margin] └──────────────────────┘ [margin]
/// ```
///
/// The border uses `search_bar_border` while focused and the plain `border`
/// colour otherwise. An unfocused empty field shows a dimmed hint instead of
/// the query.
///
/// # Returns
///
/// The next available row position (row + 3, since search box uses 3 lines)
pub fn render_search_bar(row: usize, search: &SearchBarInfo, palette: &Palette, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border = if search.is_focused {
        &palette.colors.search_bar_border
    } else {
        &palette.colors.border
    };

    position_cursor(row, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Palette::fg(border));
    print!("┌{}┐", "─".repeat(inner_width));
    print!("{}", Palette::reset());

    let (text, text_colour) = if search.query.is_empty() && !search.is_focused {
        (" Search: press / to type".to_string(), &palette.colors.text_dim)
    } else if search.is_focused {
        (format!(" Search: {}▏", search.query), &palette.colors.text_normal)
    } else {
        (format!(" Search: {}", search.query), &palette.colors.text_normal)
    };
    let clear = if search.show_clear { CLEAR_MARK } else { "" };
    let padding = inner_width.saturating_sub(text_width(&text) + text_width(clear) + 1);

    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Palette::fg(border));
    print!("│");
    print!("{}", Palette::fg(text_colour));
    print!("{text}");
    print!("{}", " ".repeat(padding));
    if search.show_clear {
        print!("{}", Palette::fg(&palette.colors.text_dim));
        print!("{clear}");
    }
    print!(" ");
    print!("{}", Palette::fg(border));
    print!("│");
    print!("{}", Palette::reset());

    position_cursor(row + 2, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Palette::fg(border));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Palette::reset());

    row + 3
}
