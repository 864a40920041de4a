//! Theme palettes, the light/dark toggle, and ANSI escape generation.
//!
//! Palettes are TOML files embedded at compile time (see `themes/`), with hex
//! colors converted to 24-bit ANSI escapes at render time. The display-mode
//! toggle is a plain boolean over a pair of loaded palettes: flipping it swaps
//! which palette every subsequent render reads. The toggle is entirely
//! independent of the post subsystem.
//!
//! # TOML format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! selection_fg = "#1e1e2e"
//! selection_bg = "#f5c2e7"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! input_border = "#f5c2e7"
//! match_highlight_fg = "#1e1e2e"
//! match_highlight_bg = "#f9e2af"
//! empty_state_fg = "#89b4fa"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::{BoardError, Result};

/// Color scheme for UI rendering.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements, as hex strings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Header text color.
    pub header_fg: String,
    /// Optional header background color.
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Selected row foreground color.
    pub selection_fg: String,
    /// Selected row background color.
    pub selection_bg: String,

    /// Normal text color.
    pub text_normal: String,
    /// Dimmed text color (footer, secondary info).
    pub text_dim: String,

    /// Border and separator line color.
    pub border: String,

    /// Search and compose box border color.
    pub input_border: String,
    /// Query match highlight foreground.
    pub match_highlight_fg: String,
    /// Query match highlight background.
    pub match_highlight_bg: String,

    /// Empty state message color.
    pub empty_state_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Supported names: `catppuccin-latte`, `catppuccin-mocha`.
    ///
    /// # Examples
    ///
    /// ```
    /// use zboard::ui::Theme;
    ///
    /// let theme = Theme::from_name("catppuccin-mocha").unwrap();
    /// assert_eq!(theme.name, "catppuccin-mocha");
    /// assert!(Theme::from_name("no-such-theme").is_none());
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Io`] if the file cannot be read and
    /// [`BoardError::Theme`] if its contents don't parse as a theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        toml::from_str(&contents)
            .map_err(|e| BoardError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Converts a hex color to an RGB tuple, falling back to white on any
    /// malformed input.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// Generates a 24-bit foreground escape for a hex color.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// Generates a 24-bit background escape for a hex color.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    /// Returns the ANSI bold escape.
    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    /// Returns the ANSI dim escape.
    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Returns the ANSI reset escape.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the default light theme (Catppuccin Latte).
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse (should never occur).
    fn default() -> Self {
        Self::from_name("catppuccin-latte")
            .expect("built-in catppuccin-latte theme should always parse")
    }
}

/// The display-mode toggle: a boolean flag over a light/dark palette pair.
///
/// Starts in light mode. [`toggle`] flips the flag; the single observable
/// side effect is that [`active`], which every render reads, returns the
/// other palette from then on, synchronously.
///
/// [`toggle`]: ThemeToggle::toggle
/// [`active`]: ThemeToggle::active
///
/// # Examples
///
/// ```
/// use zboard::ui::ThemeToggle;
///
/// let mut toggle = ThemeToggle::built_in();
/// assert!(!toggle.is_dark());
/// assert_eq!(toggle.active().name, "catppuccin-latte");
///
/// toggle.toggle();
/// assert!(toggle.is_dark());
/// assert_eq!(toggle.active().name, "catppuccin-mocha");
/// ```
#[derive(Debug, Clone)]
pub struct ThemeToggle {
    light: Theme,
    dark: Theme,
    dark_mode: bool,
}

impl ThemeToggle {
    /// Creates a toggle over an explicit palette pair, starting light.
    #[must_use]
    pub fn new(light: Theme, dark: Theme) -> Self {
        Self {
            light,
            dark,
            dark_mode: false,
        }
    }

    /// Creates a toggle over the built-in latte/mocha pair.
    ///
    /// # Panics
    ///
    /// Panics if a built-in theme fails to parse (should never occur).
    #[must_use]
    pub fn built_in() -> Self {
        Self::new(
            Theme::default(),
            Theme::from_name("catppuccin-mocha")
                .expect("built-in catppuccin-mocha theme should always parse"),
        )
    }

    /// Flips the display mode.
    pub fn toggle(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    /// Returns the palette for the current display mode.
    #[must_use]
    pub const fn active(&self) -> &Theme {
        if self.dark_mode {
            &self.dark
        } else {
            &self.light
        }
    }

    /// Returns `true` in dark mode.
    #[must_use]
    pub const fn is_dark(&self) -> bool {
        self.dark_mode
    }
}

impl Default for ThemeToggle {
    fn default() -> Self {
        Self::built_in()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn built_in_themes_parse() {
        assert_eq!(
            Theme::from_name("catppuccin-latte").unwrap().name,
            "catppuccin-latte"
        );
        assert_eq!(
            Theme::from_name("catppuccin-mocha").unwrap().name,
            "catppuccin-mocha"
        );
        assert!(Theme::from_name("catppuccin-frappe").is_none());
    }

    #[test]
    fn toggle_swaps_the_active_palette_once_per_transition() {
        let mut toggle = ThemeToggle::built_in();
        assert_eq!(toggle.active().name, "catppuccin-latte");

        toggle.toggle();
        assert_eq!(toggle.active().name, "catppuccin-mocha");

        toggle.toggle();
        assert_eq!(toggle.active().name, "catppuccin-latte");
    }

    #[test]
    fn hex_parsing_handles_prefix_and_garbage() {
        assert_eq!(Theme::hex_to_rgb("#1e1e2e"), (0x1e, 0x1e, 0x2e));
        assert_eq!(Theme::hex_to_rgb("cdd6f4"), (0xcd, 0xd6, 0xf4));
        assert_eq!(Theme::hex_to_rgb("xyz"), (255, 255, 255));
        assert_eq!(Theme::hex_to_rgb("#zzzzzz"), (255, 255, 255));
    }

    #[test]
    fn escapes_embed_the_rgb_channels() {
        assert_eq!(Theme::fg("#ff0000"), "\u{001b}[38;2;255;0;0m");
        assert_eq!(Theme::bg("#0000ff"), "\u{001b}[48;2;0;0;255m");
    }

    #[test]
    fn from_file_round_trips_a_palette() {
        let theme = Theme::default();
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "{}", toml::to_string(&theme).expect("serialize theme"))
            .expect("write theme");

        let loaded = Theme::from_file(file.path()).expect("load theme");
        assert_eq!(loaded.name, theme.name);
        assert_eq!(loaded.colors.text_normal, theme.colors.text_normal);
    }

    #[test]
    fn from_file_rejects_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "not a theme").expect("write garbage");
        assert!(matches!(
            Theme::from_file(file.path()),
            Err(BoardError::Theme(_))
        ));
    }

    #[test]
    fn from_file_propagates_missing_file_as_io() {
        assert!(matches!(
            Theme::from_file("/nonexistent/theme.toml"),
            Err(BoardError::Io(_))
        ));
    }
}
