//! Composable UI component renderers.
//!
//! Each component renders one part of the pane and returns the next free
//! row, so layouts compose by threading a row cursor through the pieces.
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Search box (search mode only)]
//! [Compose box (compose mode only)]
//! [Column headers]
//! [Post rows, or the empty state message]
//! [Border]
//! [Footer]
//! ```

mod compose;
mod empty;
mod footer;
mod header;
mod search;
mod table;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::BoardViewModel;

/// Horizontal margin on each side of the search and compose boxes.
const INPUT_BOX_MARGIN: usize = 5;

use compose::render_compose_box;
use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use search::render_search_bar;
use table::{render_table_headers, render_table_rows};

/// Renders a horizontal separator line at `row`, returning the next free row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the full board layout for one frame.
///
/// The search box and compose box are mutually exclusive (they belong to
/// different input modes); whichever is present in the view model is drawn
/// between the header and the post list.
pub fn render_board(vm: &BoardViewModel, theme: &Theme, rows: usize, cols: usize) {
    let mut current_row = 2; // Row 1 stays blank.

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);

    if let Some(search) = &vm.search_bar {
        current_row = render_search_bar(current_row, search, theme, cols);
    }
    if let Some(compose) = &vm.compose {
        current_row = render_compose_box(current_row, compose, theme, cols);
    }

    current_row = render_table_headers(current_row, theme);

    if let Some(empty) = &vm.empty_state {
        render_empty_state(current_row, empty, theme, cols);
    } else {
        render_table_rows(current_row, &vm.post_rows, theme, cols);
    }

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}
