//! Compose form component renderer.

use crate::app::ComposeField;
use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ComposeInfo;

use super::search::render_box_edge;
use super::INPUT_BOX_MARGIN;

/// Renders the 4-line bordered compose form starting at `row`, returning the
/// next free row.
///
/// ```text
/// [margin] ┌──────────────────┐ [margin]
/// [margin] │ ▸ Title: {draft} │ [margin]
/// [margin] │   Body:  {draft} │ [margin]
/// [margin] └──────────────────┘ [margin]
/// ```
///
/// The `▸` marker follows field focus; the focused field also shows a `_`
/// cursor after the typed text.
pub fn render_compose_box(row: usize, compose: &ComposeInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(INPUT_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);

    render_box_edge(row, '┌', '┐', inner_width, theme);
    render_field_line(
        row + 1,
        "Title:",
        &compose.title,
        compose.field == ComposeField::Title,
        theme,
        inner_width,
    );
    render_field_line(
        row + 2,
        "Body: ",
        &compose.body,
        compose.field == ComposeField::Body,
        theme,
        inner_width,
    );
    render_box_edge(row + 3, '└', '┘', inner_width, theme);

    row + 4
}

fn render_field_line(
    row: usize,
    label: &str,
    value: &str,
    focused: bool,
    theme: &Theme,
    inner_width: usize,
) {
    let marker = if focused { "▸" } else { " " };
    let cursor = if focused { "_" } else { "" };
    let line = format!(" {marker} {label} {value}{cursor}");
    let padding = inner_width.saturating_sub(line.chars().count());

    position_cursor(row, 1);
    print!("{}", " ".repeat(INPUT_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.input_border));
    print!("│");
    if focused {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    print!("{line}");
    print!("{}", " ".repeat(padding));
    print!("{}", Theme::fg(&theme.colors.input_border));
    print!("│");
    print!("{}", Theme::reset());
}
