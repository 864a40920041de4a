//! Shared rendering utilities.
//!
//! Low-level helpers used across the UI components: cursor positioning and
//! rendering text with highlighted match ranges, with the ANSI state put back
//! the way the surrounding component expects it.

use crate::ui::theme::Theme;

/// Positions the cursor at a 1-indexed row and column via `\x1b[{row};{col}H`.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{001b}[{row};{col}H");
}

/// Prints `text` with the given byte ranges highlighted.
///
/// Ranges must be sorted, non-overlapping, and on character boundaries,
/// which is what [`match_ranges`](crate::app::match_ranges) produces. Inside a
/// range the theme's match colors apply; outside, the caller's colors are
/// restored: selection colors for a selected row, normal text otherwise.
pub fn render_highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) {
    let restore = if is_selected {
        format!(
            "{}{}",
            Theme::fg(&theme.colors.selection_fg),
            Theme::bg(&theme.colors.selection_bg)
        )
    } else {
        Theme::fg(&theme.colors.text_normal)
    };

    let mut cursor = 0;
    for &(start, end) in ranges {
        if start > cursor {
            print!("{}", &text[cursor..start]);
        }
        print!(
            "{}{}{}",
            Theme::fg(&theme.colors.match_highlight_fg),
            Theme::bg(&theme.colors.match_highlight_bg),
            &text[start..end]
        );
        print!("{}{restore}", Theme::reset());
        cursor = end;
    }
    if cursor < text.len() {
        print!("{}", &text[cursor..]);
    }
}
