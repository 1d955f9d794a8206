//! Bounded most-recent-first tracking of focused files.

use std::path::Path;
use std::path::PathBuf;

/// Maximum number of paths the tracker retains.
pub const MAX_TRACKED_FILES: usize = 10;

/// The session's recent-file list.
///
/// One instance lives for the whole session and is fed by focus events as
/// files are opened. The list is never persisted; a fresh process starts
/// empty.
#[derive(Debug, Default)]
pub struct RecentFiles {
    paths: Vec<PathBuf>,
}

impl RecentFiles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a focus event for `path`.
    ///
    /// A path already present moves back to the front without disturbing the
    /// relative order of the remaining entries. A new path is inserted at the
    /// front, evicting the oldest entry once the list would exceed
    /// [`MAX_TRACKED_FILES`].
    pub fn record_focus(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        self.paths.retain(|p| *p != path);
        self.paths.insert(0, path);
        self.paths.truncate(MAX_TRACKED_FILES);
    }

    /// Tracked paths, most recent first.
    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.paths.iter().map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}
