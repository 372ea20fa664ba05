//! Navigation bar component renderer.

use crate::ui::helpers::{position_cursor, text_width};
use crate::ui::theme::Palette;
use crate::ui::viewmodel::NavItem;

/// Renders the category navigation bar at the specified row.
///
/// Each item is drawn as ` 1 News ` with its shortcut; the active item uses
/// the `nav_active_*` colours. Items that would overflow the pane are cut.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_nav_bar(row: usize, items: &[NavItem], palette: &Palette, cols: usize) -> usize {
    position_cursor(row, 1);
    print!(" ");
    let mut used = 1;

    for item in items {
        let cell = format!(" {} {} ", item.shortcut, item.label);
        let width = text_width(&cell);
        if used + width > cols {
            break;
        }

        if item.is_active {
            print!("{}", Palette::bold());
            print!("{}", Palette::fg(&palette.colors.nav_active_fg));
            print!("{}", Palette::bg(&palette.colors.nav_active_bg));
        } else {
            print!("{}", Palette::fg(&palette.colors.text_normal));
        }
        print!("{cell}");
        print!("{}", Palette::reset());

        used += width;
        if used < cols {
            print!(" ");
            used += 1;
        }
    }

    print!("{}", " ".repeat(cols.saturating_sub(used)));
    row + 1
}
