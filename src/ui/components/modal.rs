//! Search modal overlay renderer.

use crate::ui::helpers::{position_cursor, text_width, truncate_to_width};
use crate::ui::theme::Palette;
use crate::ui::viewmodel::ModalInfo;

/// Columns between the modal border and its text.
const MODAL_PADDING: usize = 2;

/// Draws the modal box centred over whatever is already on screen.
///
/// ```text
/// ╭──────────────────────────────╮
/// │  Choose where to search first │
/// │                              │
/// │  1 News                      │
/// │  ...                         │
/// │                              │
/// │  1-5: choose  Esc: dismiss   │
/// ╰──────────────────────────────╯
/// ```
///
/// Lines wider than the pane are cut rather than wrapped.
pub fn render_modal(modal: &ModalInfo, palette: &Palette, rows: usize, cols: usize) {
    let mut lines: Vec<&str> = vec![modal.message.as_str(), ""];
    lines.extend(modal.options.iter().map(String::as_str));
    lines.push("");
    lines.push(modal.hint.as_str());

    let widest = lines.iter().map(|l| text_width(l)).max().unwrap_or(0);
    let inner_width = (widest + MODAL_PADDING * 2).min(cols.saturating_sub(2));
    let box_height = lines.len() + 2;

    let top = rows.saturating_sub(box_height) / 2 + 1;
    let left = cols.saturating_sub(inner_width + 2) / 2 + 1;

    position_cursor(top, left);
    print!("{}", Palette::fg(&palette.colors.modal_border));
    print!("╭{}╮", "─".repeat(inner_width));

    for (offset, line) in lines.iter().enumerate() {
        let text = truncate_to_width(line, inner_width.saturating_sub(MODAL_PADDING));
        let padding = inner_width.saturating_sub(MODAL_PADDING + text_width(&text));

        position_cursor(top + 1 + offset, left);
        print!("{}", Palette::fg(&palette.colors.modal_border));
        print!("│");
        print!("{}", Palette::fg(&palette.colors.modal_fg));
        if offset == 0 {
            print!("{}", Palette::bold());
        }
        print!("{}{text}{}", " ".repeat(MODAL_PADDING), " ".repeat(padding));
        print!("{}", Palette::reset());
        print!("{}", Palette::fg(&palette.colors.modal_border));
        print!("│");
    }

    position_cursor(top + box_height - 1, left);
    print!("╰{}╯", "─".repeat(inner_width));
    print!("{}", Palette::reset());
}
