//! Per-invocation snapshot building.

use std::path::Path;

use switcher_protocol::FileSnapshot;

use crate::recent_files::RecentFiles;
use crate::workspace::Workspace;

/// Build the snapshot sequence for one picker invocation, in tracker order.
///
/// Every tracked path is read fresh; an unreadable file is logged and
/// skipped so one bad entry never aborts the whole picker.
pub fn build_snapshots(workspace: &dyn Workspace, tracked: &RecentFiles) -> Vec<FileSnapshot> {
    let mut files = Vec::with_capacity(tracked.len());
    for path in tracked.iter() {
        match workspace.read_document(path) {
            Ok(document) => files.push(FileSnapshot {
                path: path.to_path_buf(),
                name: display_name(path),
                content: document.content,
                language: document.language,
                is_recent: true,
            }),
            Err(err) => {
                tracing::warn!("skipping unreadable file {}: {err}", path.display());
            }
        }
    }
    files
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
