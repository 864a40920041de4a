//! View model types representing renderable UI state.
//!
//! View models are computed from [`AppState`](crate::app::AppState) and
//! consumed by the renderer. They carry no logic, only display-ready data:
//! truncated text, selection flags, precomputed highlight ranges.

use crate::app::ComposeField;

/// Complete view model for one render pass.
#[derive(Debug, Clone)]
pub struct BoardViewModel {
    /// Visible posts, windowed to the pane height.
    pub post_rows: Vec<PostRow>,

    /// Index of the selected row within `post_rows`.
    pub selected_index: usize,

    /// Header information (title and post count).
    pub header: HeaderInfo,

    /// Footer information (keybinding hints).
    pub footer: FooterInfo,

    /// Search bar contents, present in search mode.
    pub search_bar: Option<SearchBarInfo>,

    /// Compose form contents, present in compose mode.
    pub compose: Option<ComposeInfo>,

    /// Message shown when no posts are visible.
    pub empty_state: Option<EmptyState>,
}

/// Display information for a single post row.
#[derive(Debug, Clone)]
pub struct PostRow {
    /// Truncated title text.
    pub title: String,

    /// Truncated body text.
    pub body: String,

    /// Whether this row holds the cursor.
    pub is_selected: bool,

    /// Byte ranges of query matches within `title` (exclusive end).
    pub title_highlights: Vec<(usize, usize)>,

    /// Byte ranges of query matches within `body` (exclusive end).
    pub body_highlights: Vec<(usize, usize)>,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text, including the visible post count.
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text for the current mode.
    pub keybindings: String,
}

/// Search bar display information.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    /// Current query text.
    pub query: String,
}

/// Compose form display information.
#[derive(Debug, Clone)]
pub struct ComposeInfo {
    /// Draft title as typed so far.
    pub title: String,

    /// Draft body as typed so far.
    pub body: String,

    /// Which field currently holds focus.
    pub field: ComposeField,
}

/// Empty state message, shown when no posts are visible.
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message (e.g. "The board is empty").
    pub message: String,

    /// Secondary hint (e.g. "press 'a' to write the first post").
    pub subtitle: String,
}
