//! Zellij plugin wrapper and entry point.
//!
//! The thin integration layer between the zboard library and the Zellij
//! plugin system. It parses configuration, maps Zellij key events to library
//! events, delegates to [`handle_event`], and executes the resulting actions.
//!
//! # Keybindings
//!
//! Global:
//! - `Ctrl+n` / `Ctrl+p`: Move down / up
//!
//! In normal mode:
//! - `j`/`Down`, `k`/`Up`: Navigate
//! - `/`: Search
//! - `a`: Compose a new post
//! - `C` (shift): Clear the board
//! - `d`: Toggle light/dark mode
//! - `q`: Close the plugin
//!
//! In search mode:
//! - Printable keys: Edit the query (the list narrows as you type)
//! - `Enter`: Move focus to the results; `/`: back to the query
//! - `Esc`: Exit search and restore the full board
//!
//! In compose mode:
//! - Printable keys: Edit the focused field
//! - `Tab`: Switch between title and body
//! - `Enter`: Submit (ignored until both fields are non-empty)
//! - `Esc`: Discard the draft

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use zboard::{handle_event, Action, Config, Event, InputMode, SearchFocus};

register_plugin!(State);

/// Plugin state wrapper around the library's `AppState`.
struct State {
    app: zboard::AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: zboard::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    /// Initializes the plugin on load.
    ///
    /// Parses configuration, initializes tracing, seeds the board, and
    /// subscribes to key events. The board needs no Zellij permissions: it
    /// reads nothing from the host and only draws into its own pane.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        zboard::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(seed_count = config.seed_count, "plugin loading");
        self.app = zboard::initialize(&config);

        subscribe(&[EventType::Key]);
        tracing::debug!("plugin load complete");
    }

    /// Handles incoming Zellij events.
    ///
    /// Only `Key` events are subscribed; each is translated to a library
    /// event and run through `handle_event`. Returns `true` when the pane
    /// needs a repaint.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let zellij_tile::prelude::Event::Key(ref key) = event else {
            return false;
        };

        let span = tracing::debug_span!("plugin_update", bare_key = ?key.bare_key);
        let _guard = span.entered();

        let Some(our_event) = self.map_key_event(key) else {
            return false;
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                for action in actions {
                    Self::execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    /// Renders the board UI for the current pane size.
    fn render(&mut self, rows: usize, cols: usize) {
        zboard::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Maps a Zellij key event to a library event, honoring the input mode.
    ///
    /// In the typing modes (search query, compose fields) printable keys are
    /// text; in the navigation modes the same keys are commands. Arrow keys
    /// always navigate.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        if key.bare_key == BareKey::Char('n') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::KeyDown);
        }
        if key.bare_key == BareKey::Char('p') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::KeyUp);
        }

        let typing = matches!(
            self.app.input_mode,
            InputMode::Search(SearchFocus::Typing) | InputMode::Compose(_)
        );

        Some(match key.bare_key {
            BareKey::Down => Event::KeyDown,
            BareKey::Up => Event::KeyUp,
            BareKey::Char('j') if !typing => Event::KeyDown,
            BareKey::Char('k') if !typing => Event::KeyUp,
            BareKey::Esc => match self.app.input_mode {
                InputMode::Search(_) => Event::ExitSearch,
                _ => Event::Escape,
            },
            BareKey::Enter => match self.app.input_mode {
                InputMode::Search(SearchFocus::Typing) => Event::FocusResults,
                InputMode::Compose(_) => Event::SubmitPost,
                _ => return None,
            },
            BareKey::Tab if self.app.input_mode.is_compose() => Event::NextComposeField,
            BareKey::Char('/') => match self.app.input_mode {
                InputMode::Normal => Event::SearchMode,
                InputMode::Search(_) => Event::FocusSearchBar,
                InputMode::Compose(_) => Event::Char('/'),
            },
            BareKey::Char('q') if self.app.input_mode == InputMode::Normal => Event::CloseFocus,
            BareKey::Char('a') if self.app.input_mode == InputMode::Normal => Event::ComposeMode,
            BareKey::Char('C') if self.app.input_mode == InputMode::Normal => Event::ClearPosts,
            BareKey::Char('d') if self.app.input_mode == InputMode::Normal => Event::ToggleTheme,
            BareKey::Backspace => Event::Backspace,
            BareKey::Char(c) => Event::Char(c),
            _ => return None,
        })
    }

    /// Executes an action returned from event handling.
    fn execute_action(action: Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("hiding plugin pane");
                hide_self();
            }
        }
    }
}
