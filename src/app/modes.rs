//! Input mode state machine types.
//!
//! The plugin operates in one of three input modes, which decide how
//! keystrokes are interpreted and which chrome the UI draws:
//!
//! - **Normal**: navigation and commands
//! - **Search**: the live query is being edited or its results navigated
//! - **Compose**: a new post is being drafted

/// Focus state within search mode.
///
/// Determines whether keystrokes edit the query or move through the filtered
/// results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    /// Keystrokes append to the query; every edit re-derives the view.
    Typing,

    /// j/k move through the filtered results; `/` returns to typing.
    Navigating,
}

/// Field focus within compose mode.
///
/// The compose form has exactly two fields; Tab moves between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposeField {
    /// The post title line.
    Title,

    /// The post body line.
    Body,
}

/// Current input handling mode.
///
/// Controls which keybindings are active, where character input is routed,
/// and what the footer displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Default navigation and command mode.
    ///
    /// Available keybindings: j/k (navigate), / (search), a (compose),
    /// C (clear board), d (toggle dark mode), q (quit).
    Normal,

    /// Active search with a [`SearchFocus`] deciding where input goes.
    Search(SearchFocus),

    /// Active compose form with a [`ComposeField`] holding field focus.
    Compose(ComposeField),
}

impl InputMode {
    /// Returns `true` for either search focus.
    #[must_use]
    pub const fn is_search(self) -> bool {
        matches!(self, Self::Search(_))
    }

    /// Returns `true` for either compose field.
    #[must_use]
    pub const fn is_compose(self) -> bool {
        matches!(self, Self::Compose(_))
    }
}
