//! Post list component renderer.
//!
//! Renders the visible posts as a two-column table (TITLE, BODY) with
//! selection and query-match highlighting.

use crate::ui::helpers::{self, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::PostRow;

/// Width of the title column including its trailing gap.
const TITLE_COLUMN_WIDTH: usize = 28;

/// Renders the column headers at `row`, returning the next free row.
pub fn render_table_headers(row: usize, theme: &Theme) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!("{:<width$}{}", "TITLE", "BODY", width = TITLE_COLUMN_WIDTH);
    print!("{}", Theme::reset());
    row + 1
}

/// Renders all post rows starting at `row`, returning the next free row.
pub fn render_table_rows(row: usize, items: &[PostRow], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_post_row(current_row, item, theme, cols);
    }
    current_row
}

/// Renders a single post row.
///
/// The selected row gets the selection colors across the full pane width;
/// query matches are highlighted inside both columns. View model text is
/// already truncated, so no width handling happens here beyond padding.
fn render_post_row(row: usize, item: &PostRow, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    if item.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }

    render_cell(&item.title, &item.title_highlights, item, theme);
    let title_len = item.title.chars().count();
    print!(
        "{}",
        " ".repeat(TITLE_COLUMN_WIDTH.saturating_sub(title_len))
    );

    render_cell(&item.body, &item.body_highlights, item, theme);
    let body_len = item.body.chars().count();

    let line_len = TITLE_COLUMN_WIDTH.max(title_len) + body_len;
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));

    print!("{}", Theme::reset());
    row + 1
}

fn render_cell(text: &str, highlights: &[(usize, usize)], item: &PostRow, theme: &Theme) {
    if highlights.is_empty() {
        print!("{text}");
    } else {
        helpers::render_highlighted_text(text, highlights, theme, item.is_selected);
    }
}
