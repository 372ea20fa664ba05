//! Routed content panel renderers.
//!
//! One function per [`ContentPanel`] variant: the home message, the news
//! results list, the empty state and the placeholder for categories without
//! a page of their own.

use crate::ui::helpers::{self, centered_padding, position_cursor, text_width};
use crate::ui::theme::Palette;
use crate::ui::viewmodel::{ContentPanel, ResultItem};

/// Renders the content panel starting at `row`.
///
/// # Returns
///
/// The next row after the last line drawn.
pub fn render_content(row: usize, panel: &ContentPanel, palette: &Palette, cols: usize) -> usize {
    match panel {
        ContentPanel::Home { message } => render_centered(row + 2, message, "", palette, cols),
        ContentPanel::Placeholder { title } => {
            render_centered(row + 2, title, "Nothing here yet", palette, cols)
        }
        ContentPanel::Empty { message, subtitle } => {
            render_centered(row + 2, message, subtitle, palette, cols)
        }
        ContentPanel::Results { items, total } => render_results(row, items, *total, palette, cols),
    }
}

/// Displays a centred two-line message. An empty subtitle is skipped.
///
/// ```text
/// [left padding] MESSAGE [right padding]
/// [left padding] subtitle [right padding]
/// ```
fn render_centered(row: usize, message: &str, subtitle: &str, palette: &Palette, cols: usize) -> usize {
    let msg_padding = centered_padding(message, cols);

    position_cursor(row, 1);
    print!("{}", Palette::fg(&palette.colors.empty_state_fg));
    print!("{}", " ".repeat(msg_padding));
    print!("{message}");
    print!("{}", " ".repeat(cols.saturating_sub(msg_padding + text_width(message))));
    print!("{}", Palette::reset());

    if subtitle.is_empty() {
        return row + 1;
    }

    let sub_padding = centered_padding(subtitle, cols);

    position_cursor(row + 1, 1);
    print!("{}", Palette::dim());
    print!("{}", Palette::fg(&palette.colors.text_dim));
    print!("{}", " ".repeat(sub_padding));
    print!("{subtitle}");
    print!("{}", " ".repeat(cols.saturating_sub(sub_padding + text_width(subtitle))));
    print!("{}", Palette::reset());

    row + 2
}

/// Renders the result list: a count line, then two lines per article.
fn render_results(row: usize, items: &[ResultItem], total: usize, palette: &Palette, cols: usize) -> usize {
    let count = if items.len() < total {
        format!(" {} of {total} articles", items.len())
    } else {
        format!(" {total} articles")
    };

    position_cursor(row, 1);
    print!("{}", Palette::dim());
    print!("{}", Palette::fg(&palette.colors.text_dim));
    print!("{count}");
    print!("{}", " ".repeat(cols.saturating_sub(text_width(&count))));
    print!("{}", Palette::reset());

    let mut current_row = row + 1;
    for item in items {
        current_row = render_result(current_row, item, palette, cols);
    }
    current_row
}

/// Renders one article.
///
/// ```text
///   Gold prices hit record high
///     2024-10-14 10:00  https://news.example.com/1
/// ```
fn render_result(row: usize, item: &ResultItem, palette: &Palette, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("  ");
    print!("{}", Palette::bold());
    print!("{}", Palette::fg(&palette.colors.text_normal));
    helpers::render_highlighted_text(&item.title, &item.highlight_ranges, palette);
    print!("{}", " ".repeat(cols.saturating_sub(2 + text_width(&item.title))));
    print!("{}", Palette::reset());

    position_cursor(row + 1, 1);
    print!("    ");
    print!("{}", Palette::fg(&palette.colors.text_dim));
    print!("{}", item.date);
    print!("  ");
    print!("{}", Palette::fg(&palette.colors.link_fg));
    print!("{}", item.link);
    let used = 6 + text_width(&item.date) + text_width(&item.link);
    print!("{}", " ".repeat(cols.saturating_sub(used)));
    print!("{}", Palette::reset());

    row + 2
}
