//! Rotating file writer for trace output.
//!
//! Caps trace files at a size threshold so the plugin never grows unbounded
//! disk usage: when the current file crosses the limit it is renamed with a
//! timestamp suffix, a fresh file is started, and old backups beyond the
//! retention count are deleted.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

/// Maximum file size before rotation (10 MB).
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Number of backup files kept after rotation.
const MAX_BACKUP_FILES: usize = 3;

/// Thread-safe line writer with size-based rotation.
///
/// The file opens lazily on the first write, so constructing a writer never
/// fails even if the target is momentarily unavailable.
pub struct RotatingWriter {
    file_path: PathBuf,
    handle: Mutex<Option<std::fs::File>>,
}

impl RotatingWriter {
    /// Creates a writer targeting `file_path`; nothing is opened yet.
    pub const fn new(file_path: PathBuf) -> Self {
        Self {
            file_path,
            handle: Mutex::new(None),
        }
    }

    /// Appends one line, rotating first if the file is over the limit.
    ///
    /// # Errors
    ///
    /// Fails on filesystem errors (permissions, disk space) or if another
    /// thread poisoned the internal lock.
    pub fn write_line(&self, line: &str) -> std::io::Result<()> {
        let mut handle = self
            .handle
            .lock()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, format!("writer lock poisoned: {e}")))?;

        if let Ok(metadata) = fs::metadata(&self.file_path) {
            if metadata.len() > MAX_FILE_SIZE_BYTES {
                *handle = None;
                self.rotate()?;
            }
        }

        if handle.is_none() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)?;
            *handle = Some(file);
        }

        let file = handle
            .as_mut()
            .ok_or_else(|| std::io::Error::new(std::io::ErrorKind::Other, "no file handle available"))?;

        writeln!(file, "{line}")?;
        file.flush()?;

        Ok(())
    }

    /// Renames the current file to `<name>.json.<unix_timestamp>` and prunes
    /// backups beyond the retention count.
    fn rotate(&self) -> std::io::Result<()> {
        let timestamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or(std::time::Duration::from_secs(0))
            .as_secs();

        let backup_path = self.file_path.with_extension(format!("json.{timestamp}"));
        if self.file_path.exists() {
            fs::rename(&self.file_path, &backup_path)?;
        }

        self.prune_backups()
    }

    fn prune_backups(&self) -> std::io::Result<()> {
        let Some(parent_dir) = self.file_path.parent() else {
            return Ok(());
        };
        let Some(file_stem) = self.file_path.file_stem().and_then(|s| s.to_str()) else {
            return Ok(());
        };

        let mut backups: Vec<PathBuf> = fs::read_dir(parent_dir)?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with(file_stem) && name.contains(".json."))
            })
            .collect();

        // Newest first, by modification time.
        backups.sort_by(|a, b| {
            let a_time = fs::metadata(a).and_then(|m| m.modified()).ok();
            let b_time = fs::metadata(b).and_then(|m| m.modified()).ok();
            b_time.cmp(&a_time)
        });

        for old_backup in backups.iter().skip(MAX_BACKUP_FILES) {
            // Best-effort: a stuck backup shouldn't block the prune.
            let _ = fs::remove_file(old_backup);
        }

        Ok(())
    }
}

impl std::fmt::Debug for RotatingWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingWriter")
            .field("file_path", &self.file_path)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_append_lines() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("traces.json");
        let writer = RotatingWriter::new(path.clone());

        writer.write_line("{\"a\":1}").expect("first write");
        writer.write_line("{\"b\":2}").expect("second write");

        let contents = fs::read_to_string(&path).expect("read back");
        assert_eq!(contents, "{\"a\":1}\n{\"b\":2}\n");
    }
}
