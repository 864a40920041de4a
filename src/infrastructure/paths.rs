//! Path handling for the Zellij plugin sandbox.
//!
//! Inside the sandbox the host filesystem is mounted under `/host`, pointing
//! at the cwd of the last focused terminal (or where Zellij was started).
//! When that is the user's home directory, the data directory below resolves
//! to `~/.local/share/zellij/zboard`.

use std::path::PathBuf;

/// Returns the plugin data directory used for trace output.
#[must_use]
pub fn data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("zboard")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_dir_is_under_the_sandbox_mount() {
        assert_eq!(
            data_dir().to_str(),
            Some("/host/.local/share/zellij/zboard")
        );
    }
}
