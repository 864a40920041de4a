//! Top-level rendering coordinator.
//!
//! One entry point: compute the view model from state, pick the active
//! palette from the theme toggle, and hand both to the component layer.

use crate::app::AppState;
use crate::ui::components;

/// Renders the board UI to stdout for a pane of `rows` × `cols`.
///
/// Prints ANSI-styled output with explicit cursor positioning; Zellij owns
/// screen clearing between frames.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);
    components::render_board(&viewmodel, state.themes.active(), rows, cols);
}
