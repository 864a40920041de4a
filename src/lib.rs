//! zboard: a Zellij plugin for an in-pane scratch board of short posts.
//!
//! zboard keeps a board of title+body posts in memory and provides:
//! - Live search: the visible list narrows on every keystroke, by
//!   case-insensitive substring match over title and body
//! - A two-field compose form for adding posts (newest first)
//! - One-key clearing of the whole board
//! - A light/dark display-mode toggle, independent of the posts
//!
//! Nothing is persisted: the board is seeded with random filler posts at
//! load and lives for the plugin process only.
//!
//! # Architecture
//!
//! The crate follows a layered architecture:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Shared state
//! │  - PostStore: the canonical collection              │
//! │  - SearchFilter: query + derived visible view       │
//! │  - Event handling, view model computation           │
//! └─────────────────────────────────────────────────────┘
//!         │                                   │
//! ┌───────────────────┐             ┌───────────────────┐
//! │ UI Layer (ui/)    │             │ Domain (domain/)  │
//! │ - Rendering       │             │ - Post record     │
//! │ - Themes + toggle │             │ - Post generator  │
//! │ - Components      │             │ - Error types     │
//! └───────────────────┘             └───────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - tracing spans, file-based OTLP export            │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! All state lives in one [`AppState`] handle owned by the shim and passed
//! by reference into [`handle_event`] and the renderer; there are no
//! globals. Every mutating event re-derives the visible list before the
//! handler returns, so rendering always sees a consistent board.
//!
//! # Configuration
//!
//! The plugin is configured via Zellij's plugin configuration:
//!
//! ```kdl
//! // ~/.config/zellij/layouts/default.kdl
//! pane {
//!     plugin location="file:/path/to/zboard.wasm" {
//!         seed_count "30"
//!         light_theme "catppuccin-latte"
//!         dark_theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```
//! use zboard::{handle_event, initialize, Config, Event};
//!
//! let config = Config {
//!     seed_count: 2,
//!     ..Default::default()
//! };
//!
//! let mut state = initialize(&config);
//! assert_eq!(state.visible_posts().len(), 2);
//!
//! // Typing into the search narrows the visible view immediately.
//! let (rendered, _actions) = handle_event(&mut state, &Event::SearchMode)?;
//! assert!(rendered);
//! # Ok::<(), zboard::BoardError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AppState, ComposeField, Event, InputMode, SearchFocus};
pub use domain::{BoardError, Post, PostGenerator, Result};
pub use ui::{Theme, ThemeToggle};

use app::PostStore;
use std::collections::BTreeMap;

/// Number of filler posts seeded at load when not configured.
const DEFAULT_SEED_COUNT: usize = 30;

/// Plugin configuration parsed from Zellij's configuration system.
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of random posts to seed the board with at load.
    ///
    /// Zero is valid and starts an empty board. Default: 30
    pub seed_count: usize,

    /// Built-in theme name for light mode. Default: `catppuccin-latte`
    pub light_theme: Option<String>,

    /// Built-in theme name for dark mode. Default: `catppuccin-mocha`
    pub dark_theme: Option<String>,

    /// Path to a TOML theme file for light mode. Takes precedence over
    /// `light_theme`.
    pub light_theme_file: Option<String>,

    /// Path to a TOML theme file for dark mode. Takes precedence over
    /// `dark_theme`.
    pub dark_theme_file: Option<String>,

    /// Tracing level for exported spans.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed_count: DEFAULT_SEED_COUNT,
            light_theme: None,
            dark_theme: None,
            light_theme_file: None,
            dark_theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Zellij hands plugins a `BTreeMap<String, String>` at load; this
    /// extracts typed values with fallback defaults (an unparsable
    /// `seed_count` falls back to 30).
    ///
    /// # Example
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use zboard::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("seed_count".to_string(), "5".to_string());
    /// map.insert("dark_theme".to_string(), "catppuccin-mocha".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.seed_count, 5);
    /// assert_eq!(config.dark_theme.as_deref(), Some("catppuccin-mocha"));
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let seed_count = config
            .get("seed_count")
            .and_then(|s| s.parse::<usize>().ok())
            .unwrap_or(DEFAULT_SEED_COUNT);

        Self {
            seed_count,
            light_theme: config.get("light_theme").cloned(),
            dark_theme: config.get("dark_theme").cloned(),
            light_theme_file: config.get("light_theme_file").cloned(),
            dark_theme_file: config.get("dark_theme_file").cloned(),
            trace_level: config.get("trace_level").cloned(),
        }
    }
}

/// Initializes the plugin state from configuration.
///
/// Seeds the board with `seed_count` random posts, resolves the light/dark
/// palette pair, and returns an [`AppState`] ready for event processing.
/// The returned state is fully derived; callers can render it immediately.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(seed_count = config.seed_count, "initializing zboard");

    let mut generator = PostGenerator::new();
    let mut store = PostStore::default();
    store.seed(&mut generator, config.seed_count);

    let light = resolve_theme(
        config.light_theme_file.as_deref(),
        config.light_theme.as_deref(),
        "catppuccin-latte",
    );
    let dark = resolve_theme(
        config.dark_theme_file.as_deref(),
        config.dark_theme.as_deref(),
        "catppuccin-mocha",
    );

    AppState::new(store, ThemeToggle::new(light, dark))
}

/// Resolves a palette from file path, then built-in name, then the fallback
/// built-in. Failures are logged and degrade to the fallback.
fn resolve_theme(file: Option<&str>, name: Option<&str>, fallback: &str) -> Theme {
    if let Some(path) = file {
        match Theme::from_file(path) {
            Ok(theme) => return theme,
            Err(e) => {
                tracing::debug!(theme_file = %path, error = %e, "failed to load theme file, trying name");
            }
        }
    }

    if let Some(name) = name {
        if let Some(theme) = Theme::from_name(name) {
            return theme;
        }
        tracing::debug!(theme_name = %name, "unknown theme name, using fallback");
    }

    Theme::from_name(fallback).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_zellij_applies_defaults_for_missing_or_bad_values() {
        let mut map = BTreeMap::new();
        map.insert("seed_count".to_string(), "not-a-number".to_string());

        let config = Config::from_zellij(&map);
        assert_eq!(config.seed_count, 30);
        assert!(config.light_theme.is_none());
        assert!(config.trace_level.is_none());
    }

    #[test]
    fn from_zellij_reads_all_options() {
        let mut map = BTreeMap::new();
        map.insert("seed_count".to_string(), "0".to_string());
        map.insert("light_theme".to_string(), "catppuccin-latte".to_string());
        map.insert("trace_level".to_string(), "debug".to_string());

        let config = Config::from_zellij(&map);
        assert_eq!(config.seed_count, 0);
        assert_eq!(config.light_theme.as_deref(), Some("catppuccin-latte"));
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }

    #[test]
    fn initialize_seeds_the_configured_number_of_posts() {
        let config = Config {
            seed_count: 7,
            ..Default::default()
        };
        let state = initialize(&config);
        assert_eq!(state.all_posts().len(), 7);
        assert_eq!(state.visible_posts().len(), 7);
    }

    #[test]
    fn initialize_with_zero_seed_starts_empty() {
        let config = Config {
            seed_count: 0,
            ..Default::default()
        };
        let state = initialize(&config);
        assert!(state.all_posts().is_empty());
    }

    #[test]
    fn unknown_theme_names_degrade_to_the_fallback_pair() {
        let config = Config {
            seed_count: 0,
            light_theme: Some("no-such-theme".to_string()),
            dark_theme: Some("also-missing".to_string()),
            ..Default::default()
        };
        let state = initialize(&config);
        assert_eq!(state.themes.active().name, "catppuccin-latte");
    }
}
