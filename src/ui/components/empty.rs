//! Empty state component renderer.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the two-line empty state message centered in the content area,
/// starting two rows below `row`.
pub fn render_empty_state(row: usize, empty: &EmptyState, theme: &Theme, cols: usize) -> usize {
    let message_row = row + 2;

    let message_padding = cols.saturating_sub(empty.message.chars().count()) / 2;
    position_cursor(message_row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.empty_state_fg));
    print!("{}{}", " ".repeat(message_padding), empty.message);
    print!("{}", Theme::reset());

    let subtitle_padding = cols.saturating_sub(empty.subtitle.chars().count()) / 2;
    position_cursor(message_row + 1, 1);
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}{}", " ".repeat(subtitle_padding), empty.subtitle);
    print!("{}", Theme::reset());

    message_row + 2
}
