//! Shared rendering utilities.

use crate::ui::theme::Palette;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Positions the cursor at a 1-indexed row and column.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Prints `text` with the given character ranges highlighted.
///
/// Ranges are `(start, end)` character indices, end exclusive, sorted and
/// non-overlapping. Ends past the text are clamped. After each highlighted
/// span the normal text colour is restored.
pub fn render_highlighted_text(text: &str, ranges: &[(usize, usize)], palette: &Palette) {
    if ranges.is_empty() {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len()).max(current_pos);
        let end = end.min(chars.len());
        if start >= end {
            continue;
        }

        if start > current_pos {
            print!("{}", chars[current_pos..start].iter().collect::<String>());
        }

        print!("{}", Palette::fg(&palette.colors.match_highlight_fg));
        print!("{}", Palette::bg(&palette.colors.match_highlight_bg));
        print!("{}", chars[start..end].iter().collect::<String>());
        print!("{}", Palette::reset());
        print!("{}", Palette::fg(&palette.colors.text_normal));

        current_pos = end;
    }

    if current_pos < chars.len() {
        print!("{}", chars[current_pos..].iter().collect::<String>());
    }
}

/// Terminal columns `text` occupies.
#[must_use]
pub fn text_width(text: &str) -> usize {
    text.width()
}

/// Cuts `text` so it fits in `max` columns, ending with `…` when shortened.
///
/// Wide characters are never split; zero-width marks stay with the
/// character before them.
#[must_use]
pub fn truncate_to_width(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }

    let budget = max.saturating_sub(1);
    let mut used = 0;
    let mut kept = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        kept.push(c);
    }
    if max > 0 {
        kept.push('…');
    }
    kept
}

/// Left padding that centres `text` in `cols` columns.
#[must_use]
pub fn centered_padding(text: &str, cols: usize) -> usize {
    cols.saturating_sub(text_width(text)) / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_counts_wide_scripts_twice() {
        assert_eq!(text_width("news"), 4);
        assert_eq!(text_width("뉴스"), 4);
        assert_eq!(text_width(""), 0);
    }

    #[test]
    fn combining_marks_take_no_columns() {
        assert_eq!(text_width("e\u{301}"), 1);
        assert_eq!(text_width("a\u{200b}b"), 2);
    }

    #[test]
    fn truncation_respects_display_width() {
        assert_eq!(truncate_to_width("abcdef", 4), "abc…");
        assert_eq!(truncate_to_width("abc", 4), "abc");
        assert_eq!(truncate_to_width("금값급등", 6), "금값…");
        assert_eq!(text_width(&truncate_to_width(&"금".repeat(60), 36)), 35);
        assert_eq!(truncate_to_width("abc", 0), "");
    }

    #[test]
    fn centering_never_underflows() {
        assert_eq!(centered_padding("ab", 10), 4);
        assert_eq!(centered_padding("a very long line", 4), 0);
    }
}
