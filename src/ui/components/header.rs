//! Header component renderer.
//!
//! This module renders the title bar: the board title on the left, the theme
//! toggle and sign-in stub on the right.

use crate::ui::helpers::{position_cursor, text_width};
use crate::ui::theme::Palette;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the header title bar at the specified row.
///
/// # Layout
///
/// ```text
///  Custom Board                              [t] ☾ dark   [s] Sign in
/// ```
///
/// The right-hand controls are dropped on panes too narrow to fit both them
/// and the title; the title always wins.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_header(row: usize, header: &HeaderInfo, palette: &Palette, cols: usize) -> usize {
    let title = format!(" {}", header.title);
    let controls = format!("[t] {}   [s] {} ", header.theme_toggle, header.sign_in);

    let title_width = text_width(&title);
    let controls_width = text_width(&controls);

    position_cursor(row, 1);
    print!("{}", Palette::bold());
    print!("{}", Palette::fg(&palette.colors.header_fg));
    if let Some(bg) = &palette.colors.header_bg {
        print!("{}", Palette::bg(bg));
    }

    print!("{title}");
    if title_width + controls_width < cols {
        print!("{}", " ".repeat(cols - title_width - controls_width));
        print!("{controls}");
    } else {
        print!("{}", " ".repeat(cols.saturating_sub(title_width)));
    }

    print!("{}", Palette::reset());
    row + 1
}
