//! Error types for the zboard plugin.
//!
//! The board core itself is total: adding, clearing, querying, and filtering
//! cannot fail for any input, including empty strings and empty collections.
//! Errors only arise at the ambient edges (reading a theme file from disk,
//! parsing plugin configuration), and those are collected here in a single
//! `thiserror` enum.

use thiserror::Error;

/// The main error type for zboard operations.
///
/// # Examples
///
/// ```
/// use zboard::domain::BoardError;
///
/// fn load_palette() -> Result<(), BoardError> {
///     Err(BoardError::Theme("unknown theme name".to_string()))
/// }
/// ```
#[derive(Debug, Error)]
pub enum BoardError {
    /// Theme parsing or loading failed.
    ///
    /// Occurs when a theme file cannot be parsed or a named built-in theme
    /// does not exist. The string describes what went wrong.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O, converted automatically via
    /// `#[from]`. Only the theme-file and trace-file paths do any I/O.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for zboard operations.
pub type Result<T> = std::result::Result<T, BoardError>;
