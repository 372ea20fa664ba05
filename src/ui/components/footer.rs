//! Footer component renderer.
//!
//! This module renders the footer help bar with centered keybinding hints and
//! an optional status note on the right.

use crate::ui::helpers::{centered_padding, position_cursor, text_width, truncate_to_width};
use crate::ui::theme::Palette;
use crate::ui::viewmodel::FooterInfo;

/// Renders the footer help bar at the specified row.
///
/// Keybinding hints are centred and dimmed. A status note, when present,
/// replaces the right end of the line; if the two do not fit together the
/// status is shown alone.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_footer(row: usize, footer: &FooterInfo, palette: &Palette, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Palette::fg(&palette.colors.text_dim));

    match &footer.status {
        Some(status) if text_width(&footer.keybindings) + text_width(status) + 2 > cols => {
            let padding = centered_padding(status, cols);
            print!("{}", " ".repeat(padding));
            print!("{status}");
            print!("{}", " ".repeat(cols.saturating_sub(padding + text_width(status))));
        }
        Some(status) => {
            let help_width = text_width(&footer.keybindings);
            let status_width = text_width(status) + 1;
            let padding = cols.saturating_sub(help_width + status_width) / 2;
            print!("{}", " ".repeat(padding));
            print!("{}", footer.keybindings);
            print!("{}", " ".repeat(cols.saturating_sub(padding + help_width + status_width)));
            print!("{}", Palette::fg(&palette.colors.empty_state_fg));
            print!("{status} ");
        }
        None => {
            let help_text = truncate_to_width(&footer.keybindings, cols);
            let padding = centered_padding(&help_text, cols);
            print!("{}", " ".repeat(padding));
            print!("{help_text}");
            print!("{}", " ".repeat(cols.saturating_sub(padding + text_width(&help_text))));
        }
    }

    print!("{}", Palette::reset());
    row + 1
}
