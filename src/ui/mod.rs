//! User interface rendering layer.
//!
//! Transforms application state into ANSI output through a declarative
//! pipeline:
//!
//! ```text
//! AppState → compute_viewmodel → BoardViewModel → render → ANSI output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: Render-ready view model types
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable component renderers
//! - [`helpers`]: Cursor positioning and highlight rendering
//! - [`theme`]: Palettes, the light/dark toggle, ANSI escape generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::{Theme, ThemeToggle};
pub use viewmodel::{
    BoardViewModel, ComposeInfo, EmptyState, FooterInfo, HeaderInfo, PostRow, SearchBarInfo,
};
