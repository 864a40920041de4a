//! Search bar component renderer.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

use super::INPUT_BOX_MARGIN;

/// Renders the 3-line bordered search box starting at `row`, returning the
/// next free row.
///
/// ```text
/// [margin] ┌─────────────────┐ [margin]
/// [margin] │ Search: {query} │ [margin]
/// [margin] └─────────────────┘ [margin]
/// ```
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(INPUT_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);

    render_box_edge(row, '┌', '┐', inner_width, theme);

    let search_text = format!(" Search: {}", search.query);
    let padding = inner_width.saturating_sub(search_text.chars().count());

    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(INPUT_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.input_border));
    print!("│");
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{search_text}");
    print!("{}", " ".repeat(padding));
    print!("{}", Theme::fg(&theme.colors.input_border));
    print!("│");
    print!("{}", Theme::reset());

    render_box_edge(row + 2, '└', '┘', inner_width, theme);

    row + 3
}

/// Renders one horizontal edge of an input box.
pub(super) fn render_box_edge(
    row: usize,
    left: char,
    right: char,
    inner_width: usize,
    theme: &Theme,
) {
    position_cursor(row, 1);
    print!("{}", " ".repeat(INPUT_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.input_border));
    print!("{left}{}{right}", "─".repeat(inner_width));
    print!("{}", Theme::reset());
}
