//! Infrastructure layer for filesystem and environment interactions.
//!
//! Holds the small amount of plumbing that knows about the Zellij plugin
//! sandbox, currently just the data directory used for trace output.

pub mod paths;

pub use paths::data_dir;
