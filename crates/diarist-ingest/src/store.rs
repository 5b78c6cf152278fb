//! Entry storage: listing, reading and writing journal files.

use std::path::{Path, PathBuf};

use diarist_core::{Error, Result};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Journal file types the store will list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryType {
    Markdown,
    PlainText,
    Unknown,
}

impl EntryType {
    /// Detect entry type from extension.
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "md" | "markdown" | "mdx" => Self::Markdown,
            "txt" => Self::PlainText,
            _ => Self::Unknown,
        }
    }

    pub fn is_entry(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

/// Where journal text comes from and where exports go.
///
/// Identifiers are opaque to the rest of the pipeline; only the date
/// resolver looks at them, and only at their file stem.
pub trait EntryStore: Send + Sync {
    /// Identifiers of all entries under `scope` (a sub-folder, `""` for all).
    fn list_entries(&self, scope: &str) -> Result<Vec<String>>;

    /// Full text of one entry.
    fn read_text(&self, identifier: &str) -> Result<String>;

    /// Write `content` to `path`, creating parent folders.
    fn write_text(&self, path: &str, content: &str) -> Result<()>;
}

/// [`EntryStore`] over a directory tree on the local filesystem.
pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, identifier: &str) -> PathBuf {
        self.root.join(identifier)
    }
}

impl EntryStore for FsStore {
    fn list_entries(&self, scope: &str) -> Result<Vec<String>> {
        let base = self.resolve(scope);
        if !base.is_dir() {
            return Err(Error::NotFound(base.display().to_string()));
        }

        let mut ids = Vec::new();
        for entry in WalkDir::new(&base).follow_links(true) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unwalkable path under {}: {}", base.display(), e);
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            let is_entry = path
                .extension()
                .and_then(|e| e.to_str())
                .map(|e| EntryType::from_extension(e).is_entry())
                .unwrap_or(false);
            if !is_entry {
                continue;
            }
            if let Ok(rel) = path.strip_prefix(&self.root) {
                ids.push(rel.to_string_lossy().replace('\\', "/"));
            }
        }

        ids.sort();
        debug!("Listed {} entries under {}", ids.len(), base.display());
        Ok(ids)
    }

    fn read_text(&self, identifier: &str) -> Result<String> {
        let path = self.resolve(identifier);
        std::fs::read_to_string(&path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Error::NotFound(path.display().to_string()),
            _ => Error::Io(e),
        })
    }

    fn write_text(&self, path: &str, content: &str) -> Result<()> {
        let target = self.resolve(path);
        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&target, content)?;
        debug!("Wrote {} bytes to {}", content.len(), target.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_type() {
        assert_eq!(EntryType::from_extension("MD"), EntryType::Markdown);
        assert_eq!(EntryType::from_extension("txt"), EntryType::PlainText);
        assert!(!EntryType::from_extension("png").is_entry());
    }

    #[test]
    fn test_list_read_write() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsStore::new(dir.path());

        store.write_text("2024/2024-01-02.md", "second").unwrap();
        store.write_text("2024-01-01.md", "first").unwrap();
        store.write_text("image.png", "binary").unwrap();

        let ids = store.list_entries("").unwrap();
        assert_eq!(ids, vec!["2024-01-01.md", "2024/2024-01-02.md"]);
        assert_eq!(store.read_text("2024/2024-01-02.md").unwrap(), "second");

        let scoped = store.list_entries("2024").unwrap();
        assert_eq!(scoped, vec!["2024/2024-01-02.md"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_loop_does_not_hide_entries() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsStore::new(dir.path());
        store.write_text("2024-01-01.md", "first").unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        std::os::unix::fs::symlink("..", dir.path().join("sub/loop")).unwrap();

        let ids = store.list_entries("").unwrap();
        assert_eq!(ids, vec!["2024-01-01.md"]);
    }

    #[test]
    fn test_missing_entry() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsStore::new(dir.path());
        assert!(matches!(store.read_text("nope.md"), Err(Error::NotFound(_))));
        assert!(matches!(store.list_entries("nope"), Err(Error::NotFound(_))));
    }
}
