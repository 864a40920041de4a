//! Central application state and view model computation.
//!
//! [`AppState`] is the single shared handle the whole plugin works through:
//! it owns the canonical [`PostStore`], the [`SearchFilter`], the compose
//! draft, selection, input mode, and the theme toggle. The shim passes it by
//! reference into the event handler and the renderer. There is no global,
//! and no layer threads individual fields around.
//!
//! # Consistency
//!
//! `visible_posts` is the derived view of the board under the current query.
//! Every mutating method here re-derives it before returning, so a caller
//! can never observe the collection after a mutation but the visible view
//! from before it. With Zellij delivering events one at a time and rendering
//! only after `update()` returns, that sequencing is the whole consistency
//! story.

use super::modes::{ComposeField, InputMode, SearchFocus};
use super::search::{filter_posts, match_ranges, SearchFilter};
use super::store::PostStore;
use crate::domain::Post;
use crate::ui::theme::ThemeToggle;
use crate::ui::viewmodel::{
    BoardViewModel, ComposeInfo, EmptyState, FooterInfo, HeaderInfo, PostRow, SearchBarInfo,
};

/// Display width of the title column, including its trailing gap.
const TITLE_COLUMN_WIDTH: usize = 28;

/// In-progress post draft held by compose mode.
///
/// The draft is local to the form: nothing reaches the store until a submit
/// passes the "both fields non-empty" check, and a failed submit leaves the
/// fields exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComposeDraft {
    pub title: String,
    pub body: String,
}

impl ComposeDraft {
    /// Returns `true` when both fields are non-empty.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.title.is_empty() && !self.body.is_empty()
    }

    /// Clears both fields.
    pub fn reset(&mut self) {
        self.title.clear();
        self.body.clear();
    }

    /// Returns a mutable handle to the field currently holding focus.
    pub fn field_mut(&mut self, field: ComposeField) -> &mut String {
        match field {
            ComposeField::Title => &mut self.title,
            ComposeField::Body => &mut self.body,
        }
    }
}

/// Central application state container.
///
/// Mutated only by the event handler; read by view model computation. The
/// visible list is re-derived by every mutating method, never by readers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Canonical post collection, newest first.
    store: PostStore,

    /// Live search query.
    filter: SearchFilter,

    /// Posts matching the current query, in board order.
    ///
    /// Re-derived after every mutation; used for rendering and selection
    /// bounds.
    visible_posts: Vec<Post>,

    /// Zero-based cursor within `visible_posts`.
    pub selected_index: usize,

    /// Current input handling mode.
    pub input_mode: InputMode,

    /// Draft held by compose mode.
    pub draft: ComposeDraft,

    /// Light/dark palette pair with the dark-mode flag.
    pub themes: ThemeToggle,
}

impl AppState {
    /// Creates the shared state around a seeded store and a theme pair.
    ///
    /// The visible view is derived immediately, so the state is fully
    /// consistent before the first event or render can arrive.
    #[must_use]
    pub fn new(store: PostStore, themes: ThemeToggle) -> Self {
        let visible_posts = store.read().to_vec();
        Self {
            store,
            filter: SearchFilter::default(),
            visible_posts,
            selected_index: 0,
            input_mode: InputMode::Normal,
            draft: ComposeDraft::default(),
            themes,
        }
    }

    /// Returns the posts visible under the current query.
    #[must_use]
    pub fn visible_posts(&self) -> &[Post] {
        &self.visible_posts
    }

    /// Returns the full board, unfiltered.
    #[must_use]
    pub fn all_posts(&self) -> &[Post] {
        self.store.read()
    }

    /// Returns the current search query.
    #[must_use]
    pub fn query(&self) -> &str {
        self.filter.query()
    }

    /// Prepends a post to the board and re-derives the visible view.
    pub fn add_post(&mut self, post: Post) {
        self.store.add(post);
        self.refresh_visible();
    }

    /// Empties the board and re-derives the visible view.
    pub fn clear_posts(&mut self) {
        self.store.clear();
        self.refresh_visible();
    }

    /// Appends a character to the query and re-derives the visible view.
    pub fn push_query(&mut self, c: char) {
        self.filter.push(c);
        self.refresh_visible();
    }

    /// Drops the last query character and re-derives the visible view.
    pub fn pop_query(&mut self) {
        self.filter.pop();
        self.refresh_visible();
    }

    /// Clears the query and re-derives the visible view.
    pub fn reset_query(&mut self) {
        self.filter.reset();
        self.refresh_visible();
    }

    /// Flips the dark-mode flag, swapping the active palette.
    pub fn toggle_theme(&mut self) {
        self.themes.toggle();
    }

    /// Moves the cursor down one visible post, wrapping to the top.
    pub fn move_selection_down(&mut self) {
        if self.visible_posts.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.visible_posts.len();
    }

    /// Moves the cursor up one visible post, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        if self.visible_posts.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.visible_posts.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Re-derives `visible_posts` from the store and query, then clamps the
    /// cursor to the new bounds.
    fn refresh_visible(&mut self) {
        let _span = tracing::debug_span!(
            "refresh_visible",
            total_posts = self.store.len(),
            query_len = self.filter.query().len(),
        )
        .entered();

        self.visible_posts = filter_posts(self.store.read(), self.filter.query()).into_owned();

        if self.visible_posts.is_empty() {
            self.selected_index = 0;
        } else {
            self.selected_index = self.selected_index.min(self.visible_posts.len() - 1);
        }

        tracing::debug!(visible = self.visible_posts.len(), "visible view derived");
    }

    /// Computes a renderable view model for the given pane size.
    ///
    /// Windows the visible list around the cursor, truncates columns to the
    /// pane width, and precomputes highlight ranges for the active query.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> BoardViewModel {
        let available_rows = self.available_rows(rows);

        let mut visible_start = self.selected_index.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(self.visible_posts.len());
        let window = visible_end - visible_start;
        if window < available_rows && self.visible_posts.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let highlight_query = if self.input_mode.is_search() && self.filter.is_active() {
            Some(self.filter.query())
        } else {
            None
        };

        let post_rows: Vec<PostRow> = self.visible_posts[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(offset, post)| {
                self.compute_post_row(post, visible_start + offset, cols, highlight_query)
            })
            .collect();

        BoardViewModel {
            post_rows,
            selected_index: self.selected_index.saturating_sub(visible_start),
            header: self.compute_header(),
            footer: self.compute_footer(),
            search_bar: self.compute_search_bar(),
            compose: self.compute_compose(),
            empty_state: self.compute_empty_state(),
        }
    }

    /// Builds one display row, truncating to the pane width and attaching
    /// highlight ranges computed against the truncated text.
    fn compute_post_row(
        &self,
        post: &Post,
        absolute_index: usize,
        cols: usize,
        highlight_query: Option<&str>,
    ) -> PostRow {
        let title = truncate_chars(&post.title, TITLE_COLUMN_WIDTH - 2);
        let body_width = cols.saturating_sub(TITLE_COLUMN_WIDTH + 2);
        let body = truncate_chars(&post.body, body_width);

        let (title_highlights, body_highlights) = highlight_query.map_or_else(
            || (Vec::new(), Vec::new()),
            |q| (match_ranges(&title, q), match_ranges(&body, q)),
        );

        PostRow {
            title,
            body,
            is_selected: absolute_index == self.selected_index,
            title_highlights,
            body_highlights,
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let title = if self.filter.is_active() {
            format!(
                " zboard ({}/{} posts) ",
                self.visible_posts.len(),
                self.store.len()
            )
        } else {
            format!(" zboard ({} posts) ", self.store.len())
        };
        HeaderInfo { title }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.input_mode {
            InputMode::Normal => {
                "j/k: navigate  /: search  a: new post  C: clear  d: dark mode  q: quit".to_string()
            }
            InputMode::Search(SearchFocus::Typing) => {
                "ESC: exit search  Enter: browse results  Type to filter".to_string()
            }
            InputMode::Search(SearchFocus::Navigating) => {
                "ESC: exit search  /: edit query  j/k: navigate".to_string()
            }
            InputMode::Compose(_) => {
                "Tab: switch field  Enter: add post  ESC: discard".to_string()
            }
        };
        FooterInfo { keybindings }
    }

    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        self.input_mode.is_search().then(|| SearchBarInfo {
            query: self.filter.query().to_string(),
        })
    }

    fn compute_compose(&self) -> Option<ComposeInfo> {
        match self.input_mode {
            InputMode::Compose(field) => Some(ComposeInfo {
                title: self.draft.title.clone(),
                body: self.draft.body.clone(),
                field,
            }),
            _ => None,
        }
    }

    fn compute_empty_state(&self) -> Option<EmptyState> {
        if !self.visible_posts.is_empty() {
            return None;
        }
        if self.store.is_empty() {
            Some(EmptyState {
                message: "The board is empty".to_string(),
                subtitle: "press 'a' to write the first post".to_string(),
            })
        } else {
            Some(EmptyState {
                message: "No posts match".to_string(),
                subtitle: "press ESC to clear the search".to_string(),
            })
        }
    }

    /// Rows left for post content after the chrome for the current mode.
    const fn available_rows(&self, total_rows: usize) -> usize {
        match self.input_mode {
            // blank, header, border, column header, border, footer
            InputMode::Normal => total_rows.saturating_sub(6),
            // plus the 3-line search box
            InputMode::Search(_) => total_rows.saturating_sub(9),
            // plus the 4-line compose box
            InputMode::Compose(_) => total_rows.saturating_sub(10),
        }
    }
}

/// Truncates to at most `max` characters, appending "..." when shortened.
fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let keep = max.saturating_sub(3);
    let mut out: String = text.chars().take(keep).collect();
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PostGenerator;

    fn post(title: &str, body: &str) -> Post {
        Post::new(title.to_string(), body.to_string())
    }

    fn seeded_state(posts: Vec<Post>) -> AppState {
        let mut store = PostStore::default();
        for p in posts.into_iter().rev() {
            store.add(p);
        }
        AppState::new(store, ThemeToggle::built_in())
    }

    fn scenario_state() -> AppState {
        seeded_state(vec![
            post("fast dock", "hack the grid"),
            post("slow bus", "quiet byte"),
        ])
    }

    #[test]
    fn new_state_sees_every_seeded_post() {
        let state = scenario_state();
        assert_eq!(state.visible_posts().len(), 2);
        assert_eq!(state.visible_posts()[0].title, "fast dock");
    }

    #[test]
    fn typing_a_query_narrows_the_visible_view() {
        let mut state = scenario_state();
        for c in "hack".chars() {
            state.push_query(c);
        }
        assert_eq!(
            state.visible_posts(),
            &[post("fast dock", "hack the grid")]
        );
    }

    #[test]
    fn clearing_the_query_restores_both_posts_in_order() {
        let mut state = scenario_state();
        for c in "hack".chars() {
            state.push_query(c);
        }
        state.reset_query();
        let titles: Vec<&str> = state
            .visible_posts()
            .iter()
            .map(|p| p.title.as_str())
            .collect();
        assert_eq!(titles, ["fast dock", "slow bus"]);
    }

    #[test]
    fn add_post_is_visible_immediately() {
        let mut state = scenario_state();
        state.add_post(post("new", "post"));
        assert_eq!(state.visible_posts()[0].title, "new");
        assert_eq!(state.visible_posts().len(), 3);
    }

    #[test]
    fn add_then_clear_leaves_nothing() {
        let mut state = scenario_state();
        state.add_post(post("new", "post"));
        state.clear_posts();
        assert!(state.all_posts().is_empty());
        assert!(state.visible_posts().is_empty());
    }

    #[test]
    fn added_post_respects_the_active_query() {
        let mut state = scenario_state();
        for c in "hack".chars() {
            state.push_query(c);
        }
        // A post that doesn't match stays out of the visible view.
        state.add_post(post("plain", "note"));
        assert_eq!(state.visible_posts().len(), 1);
        // A matching one shows up at the front.
        state.add_post(post("more", "hacking"));
        assert_eq!(state.visible_posts()[0].title, "more");
    }

    #[test]
    fn selection_clamps_when_the_view_shrinks() {
        let mut state = seeded_state(vec![
            post("alpha", "x"),
            post("beta", "x"),
            post("gamma", "hack"),
        ]);
        state.selected_index = 2;
        for c in "hack".chars() {
            state.push_query(c);
        }
        assert_eq!(state.visible_posts().len(), 1);
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn selection_wraps_both_ways() {
        let mut state = scenario_state();
        state.move_selection_up();
        assert_eq!(state.selected_index, 1);
        state.move_selection_down();
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn theme_toggle_flips_and_returns() {
        let mut state = scenario_state();
        assert!(!state.themes.is_dark());
        state.toggle_theme();
        assert!(state.themes.is_dark());
        state.toggle_theme();
        assert!(!state.themes.is_dark());
    }

    #[test]
    fn viewmodel_counts_match_the_visible_view() {
        let mut state = scenario_state();
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.post_rows.len(), 2);
        assert_eq!(vm.header.title, " zboard (2 posts) ");
        assert!(vm.empty_state.is_none());

        state.input_mode = InputMode::Search(SearchFocus::Typing);
        for c in "hack".chars() {
            state.push_query(c);
        }
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.post_rows.len(), 1);
        assert_eq!(vm.header.title, " zboard (1/2 posts) ");
        assert!(vm.search_bar.is_some());
    }

    #[test]
    fn viewmodel_highlights_query_matches_while_searching() {
        let mut state = scenario_state();
        state.input_mode = InputMode::Search(SearchFocus::Typing);
        for c in "hack".chars() {
            state.push_query(c);
        }
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.post_rows[0].body_highlights, vec![(0, 4)]);
        assert!(vm.post_rows[0].title_highlights.is_empty());
    }

    #[test]
    fn empty_board_and_empty_match_report_different_messages() {
        let state = seeded_state(vec![]);
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(
            vm.empty_state.as_ref().map(|e| e.message.as_str()),
            Some("The board is empty")
        );

        let mut state = scenario_state();
        for c in "zzz".chars() {
            state.push_query(c);
        }
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(
            vm.empty_state.as_ref().map(|e| e.message.as_str()),
            Some("No posts match")
        );
    }

    #[test]
    fn windowing_caps_rows_to_the_pane_height() {
        let mut store = PostStore::default();
        let mut generator = PostGenerator::from_seed(5);
        store.seed(&mut generator, 50);
        let state = AppState::new(store, ThemeToggle::built_in());

        let vm = state.compute_viewmodel(12, 80);
        assert_eq!(vm.post_rows.len(), 6);
    }

    #[test]
    fn truncation_keeps_char_boundaries() {
        assert_eq!(truncate_chars("héllo wörld", 20), "héllo wörld");
        assert_eq!(truncate_chars("éééééééééé", 8), "ééééé...");
    }

    #[test]
    fn compose_draft_completeness_requires_both_fields() {
        let mut draft = ComposeDraft::default();
        assert!(!draft.is_complete());
        draft.title.push_str("new");
        assert!(!draft.is_complete());
        draft.body.push_str("post");
        assert!(draft.is_complete());
        draft.reset();
        assert!(!draft.is_complete());
    }
}
