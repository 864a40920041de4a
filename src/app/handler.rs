//! Event handling and state transition logic.
//!
//! This module is the single place the shared state is mutated. The shim
//! translates Zellij key events into [`Event`]s; [`handle_event`] pattern
//! matches them, mutates [`AppState`], and returns whether to re-render plus
//! any side-effect [`Action`]s.
//!
//! Every arm that changes the board or the query goes through an `AppState`
//! method that re-derives the visible view before returning, so the render
//! that follows always sees mutation and derivation as one step.

use super::modes::{ComposeField, InputMode, SearchFocus};
use super::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::Post;

/// Events triggered by user input.
///
/// Each event is a discrete, non-preemptible reaction to one keystroke; no
/// event spans multiple inputs, so no partially-applied mutation is ever
/// observable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Moves the cursor down one visible post (wraps to top).
    KeyDown,
    /// Moves the cursor up one visible post (wraps to bottom).
    KeyUp,
    /// Hides the plugin pane.
    CloseFocus,
    /// Enters search mode with a fresh query.
    SearchMode,
    /// Returns focus to the search input (from result navigation).
    FocusSearchBar,
    /// Moves focus from the search input to the results.
    FocusResults,
    /// Leaves search mode and clears the query.
    ExitSearch,
    /// Routes a typed character to the query or the compose draft.
    Char(char),
    /// Removes the last character from the query or the focused draft field.
    Backspace,
    /// Cancels the current mode: discards the draft or clears the query.
    Escape,
    /// Opens the compose form with an empty draft.
    ComposeMode,
    /// Moves compose focus to the other field.
    NextComposeField,
    /// Submits the draft if both fields are non-empty.
    SubmitPost,
    /// Empties the board.
    ClearPosts,
    /// Flips the light/dark display mode.
    ToggleTheme,
}

/// Processes an event, mutates application state, and reports what to do next.
///
/// Returns `(should_render, actions)`: the bool tells the shim whether the
/// pane needs a repaint, the actions are side effects to execute afterwards.
/// Events that land in a mode they don't apply to are ignored with
/// `(false, vec![])`.
///
/// # Errors
///
/// None of the board operations can fail; the `Result` exists so the shim
/// handles this layer uniformly, matching the rest of the crate's fallible
/// edges.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::KeyDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::SearchMode => {
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            state.reset_query();
            Ok((true, vec![]))
        }
        Event::FocusSearchBar => {
            if !state.input_mode.is_search() {
                return Ok((false, vec![]));
            }
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            Ok((true, vec![]))
        }
        Event::FocusResults => {
            if !state.input_mode.is_search() {
                return Ok((false, vec![]));
            }
            if state.query().is_empty() {
                state.input_mode = InputMode::Normal;
            } else {
                state.input_mode = InputMode::Search(SearchFocus::Navigating);
            }
            Ok((true, vec![]))
        }
        Event::ExitSearch => {
            tracing::debug!(query = %state.query(), "exiting search mode");
            state.input_mode = InputMode::Normal;
            state.reset_query();
            Ok((true, vec![]))
        }
        Event::Char(c) => match state.input_mode {
            InputMode::Search(SearchFocus::Typing) => {
                state.push_query(*c);
                tracing::trace!(query = %state.query(), "query updated");
                Ok((true, vec![]))
            }
            InputMode::Compose(field) => {
                state.draft.field_mut(field).push(*c);
                Ok((true, vec![]))
            }
            _ => Ok((false, vec![])),
        },
        Event::Backspace => match state.input_mode {
            InputMode::Search(SearchFocus::Typing) => {
                state.pop_query();
                Ok((true, vec![]))
            }
            InputMode::Compose(field) => {
                state.draft.field_mut(field).pop();
                Ok((true, vec![]))
            }
            _ => Ok((false, vec![])),
        },
        Event::Escape => match state.input_mode {
            InputMode::Compose(_) => {
                tracing::debug!("discarding compose draft");
                state.draft.reset();
                state.input_mode = InputMode::Normal;
                Ok((true, vec![]))
            }
            InputMode::Search(_) | InputMode::Normal => {
                state.input_mode = InputMode::Normal;
                state.reset_query();
                Ok((true, vec![]))
            }
        },
        Event::ComposeMode => {
            if state.input_mode != InputMode::Normal {
                return Ok((false, vec![]));
            }
            tracing::debug!("entering compose mode");
            state.draft.reset();
            state.input_mode = InputMode::Compose(ComposeField::Title);
            Ok((true, vec![]))
        }
        Event::NextComposeField => match state.input_mode {
            InputMode::Compose(ComposeField::Title) => {
                state.input_mode = InputMode::Compose(ComposeField::Body);
                Ok((true, vec![]))
            }
            InputMode::Compose(ComposeField::Body) => {
                state.input_mode = InputMode::Compose(ComposeField::Title);
                Ok((true, vec![]))
            }
            _ => Ok((false, vec![])),
        },
        Event::SubmitPost => {
            if !state.input_mode.is_compose() {
                return Ok((false, vec![]));
            }
            if !state.draft.is_complete() {
                // Incomplete drafts are rejected silently: no error, and the
                // typed fields stay as they are.
                tracing::debug!("incomplete draft, submit ignored");
                return Ok((false, vec![]));
            }

            let post = Post::new(state.draft.title.clone(), state.draft.body.clone());
            tracing::debug!(title = %post.title, "draft submitted");
            state.add_post(post);
            state.draft.reset();
            state.input_mode = InputMode::Normal;
            Ok((true, vec![]))
        }
        Event::ClearPosts => {
            tracing::debug!("clearing the board");
            state.clear_posts();
            Ok((true, vec![]))
        }
        Event::ToggleTheme => {
            state.toggle_theme();
            tracing::debug!(dark = state.themes.is_dark(), "display mode toggled");
            Ok((true, vec![]))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::PostStore;
    use crate::domain::PostGenerator;
    use crate::ui::theme::ThemeToggle;

    fn state_with_posts(count: usize) -> AppState {
        let mut store = PostStore::default();
        let mut generator = PostGenerator::from_seed(11);
        store.seed(&mut generator, count);
        AppState::new(store, ThemeToggle::built_in())
    }

    fn feed(state: &mut AppState, events: &[Event]) {
        for event in events {
            handle_event(state, event).expect("board events cannot fail");
        }
    }

    fn type_chars(state: &mut AppState, text: &str) {
        for c in text.chars() {
            feed(state, &[Event::Char(c)]);
        }
    }

    #[test]
    fn compose_submit_prepends_and_resets() {
        let mut state = state_with_posts(2);

        feed(&mut state, &[Event::ComposeMode]);
        type_chars(&mut state, "new");
        feed(&mut state, &[Event::NextComposeField]);
        type_chars(&mut state, "post");
        feed(&mut state, &[Event::SubmitPost]);

        assert_eq!(state.all_posts().len(), 3);
        assert_eq!(state.all_posts()[0].title, "new");
        assert_eq!(state.all_posts()[0].body, "post");
        assert_eq!(state.input_mode, InputMode::Normal);
        assert!(state.draft.title.is_empty() && state.draft.body.is_empty());
    }

    #[test]
    fn incomplete_draft_is_rejected_silently() {
        let mut state = state_with_posts(2);

        feed(&mut state, &[Event::ComposeMode]);
        type_chars(&mut state, "title only");
        let (rendered, actions) =
            handle_event(&mut state, &Event::SubmitPost).expect("submit is total");

        assert!(!rendered);
        assert!(actions.is_empty());
        assert_eq!(state.all_posts().len(), 2);
        // The typed field is left exactly as it was.
        assert_eq!(state.draft.title, "title only");
        assert_eq!(state.input_mode, InputMode::Compose(ComposeField::Title));
    }

    #[test]
    fn escape_discards_the_draft_without_touching_the_board() {
        let mut state = state_with_posts(2);

        feed(&mut state, &[Event::ComposeMode]);
        type_chars(&mut state, "half-finished");
        feed(&mut state, &[Event::Escape]);

        assert_eq!(state.input_mode, InputMode::Normal);
        assert!(state.draft.title.is_empty());
        assert_eq!(state.all_posts().len(), 2);
    }

    #[test]
    fn search_typing_narrows_on_every_keystroke() {
        let mut state = state_with_posts(0);
        state.add_post(crate::domain::Post::new(
            "slow bus".to_string(),
            "quiet byte".to_string(),
        ));
        state.add_post(crate::domain::Post::new(
            "fast dock".to_string(),
            "hack the grid".to_string(),
        ));

        feed(&mut state, &[Event::SearchMode]);
        type_chars(&mut state, "hack");

        assert_eq!(state.visible_posts().len(), 1);
        assert_eq!(state.visible_posts()[0].title, "fast dock");

        feed(&mut state, &[Event::Backspace]);
        assert_eq!(state.query(), "hac");
    }

    #[test]
    fn exit_search_restores_the_full_board() {
        let mut state = state_with_posts(5);
        feed(&mut state, &[Event::SearchMode]);
        type_chars(&mut state, "zzzzzz");
        assert!(state.visible_posts().is_empty());

        feed(&mut state, &[Event::ExitSearch]);
        assert_eq!(state.query(), "");
        assert_eq!(state.visible_posts().len(), 5);
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    fn focus_results_needs_a_non_empty_query() {
        let mut state = state_with_posts(3);
        feed(&mut state, &[Event::SearchMode, Event::FocusResults]);
        assert_eq!(state.input_mode, InputMode::Normal);

        feed(&mut state, &[Event::SearchMode]);
        type_chars(&mut state, "a");
        feed(&mut state, &[Event::FocusResults]);
        assert_eq!(
            state.input_mode,
            InputMode::Search(SearchFocus::Navigating)
        );
    }

    #[test]
    fn clear_event_empties_the_board() {
        let mut state = state_with_posts(30);
        feed(&mut state, &[Event::ClearPosts]);
        assert!(state.all_posts().is_empty());
        assert!(state.visible_posts().is_empty());
    }

    #[test]
    fn toggle_theme_round_trips() {
        let mut state = state_with_posts(1);
        feed(&mut state, &[Event::ToggleTheme]);
        assert!(state.themes.is_dark());
        feed(&mut state, &[Event::ToggleTheme]);
        assert!(!state.themes.is_dark());
    }

    #[test]
    fn close_focus_emits_the_hide_action() {
        let mut state = state_with_posts(1);
        let (rendered, actions) =
            handle_event(&mut state, &Event::CloseFocus).expect("close is total");
        assert!(!rendered);
        assert_eq!(actions, vec![Action::CloseFocus]);
    }

    #[test]
    fn typing_outside_search_or_compose_is_ignored() {
        let mut state = state_with_posts(2);
        let (rendered, _) = handle_event(&mut state, &Event::Char('x')).expect("char is total");
        assert!(!rendered);
        assert_eq!(state.query(), "");
    }
}
