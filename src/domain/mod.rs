//! Domain layer for the zboard plugin.
//!
//! This module contains the core domain types for the board, independent of
//! Zellij-specific APIs or rendering concerns: the post record, the random
//! post factory, and the error types.
//!
//! # Organization
//!
//! - [`error`]: Error types and result alias
//! - [`post`]: The post record
//! - [`generator`]: Random post factory for seeding the board
//!
//! # Examples
//!
//! ```
//! use zboard::domain::{Post, PostGenerator};
//!
//! let mut generator = PostGenerator::from_seed(1);
//! let post: Post = generator.generate();
//! assert!(!post.title.is_empty());
//! ```

pub mod error;
pub mod generator;
pub mod post;

pub use error::{BoardError, Result};
pub use generator::PostGenerator;
pub use post::Post;
