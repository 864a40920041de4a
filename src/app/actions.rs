//! Actions representing side effects for the plugin runtime.
//!
//! The event handler returns a list of [`Action`]s after each event; the shim
//! in `main.rs` executes them against the Zellij API. Everything the board
//! does happens inside its own state, so the only command that crosses this
//! boundary is hiding the pane.

/// Commands executed by the plugin shim after event handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    ///
    /// Sent when the user explicitly closes the board (pressing 'q').
    CloseFocus,
}
