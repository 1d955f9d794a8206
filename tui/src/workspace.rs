//! Host-side document services.
//!
//! The panel manager talks to the host editor through [`Workspace`]: loading
//! the live text of a tracked file and handing a chosen file to the main
//! editing surface. The production implementation reads from disk and
//! delegates editing to the user's `$EDITOR`; tests use [`InMemoryWorkspace`].

use std::collections::HashMap;
use std::path::Path;
use std::path::PathBuf;
use std::process::Command;
use std::process::ExitStatus;

use crate::language;

#[derive(Debug, thiserror::Error)]
pub enum WorkspaceError {
    #[error("no editor configured; set $EDITOR or pass --editor")]
    NoEditor,
    #[error("editor command {0:?} could not be parsed")]
    BadEditorCommand(String),
    #[error("editor exited with {0}")]
    EditorFailed(ExitStatus),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A document's text plus the host's language classification, if any.
#[derive(Debug, Clone)]
pub struct Document {
    pub content: String,
    pub language: Option<String>,
}

/// Document loading and opening services provided by the host.
pub trait Workspace {
    /// Load the full current text of `path`.
    fn read_document(&self, path: &Path) -> std::io::Result<Document>;

    /// Open `path` in the main editing surface. Blocks until the editing
    /// session for this file ends.
    fn open_document(&self, path: &Path) -> Result<(), WorkspaceError>;
}

/// Filesystem-backed workspace that opens files in the configured editor.
#[derive(Debug, Default)]
pub struct FsWorkspace {
    editor_override: Option<String>,
}

impl FsWorkspace {
    pub fn new(editor_override: Option<String>) -> Self {
        Self { editor_override }
    }

    /// Resolve the editor command line: `--editor` flag, then `$VISUAL`,
    /// then `$EDITOR`.
    fn editor_command(&self) -> Result<Vec<String>, WorkspaceError> {
        let raw = match &self.editor_override {
            Some(editor) => editor.clone(),
            None => std::env::var("VISUAL")
                .or_else(|_| std::env::var("EDITOR"))
                .map_err(|_| WorkspaceError::NoEditor)?,
        };
        if raw.trim().is_empty() {
            return Err(WorkspaceError::NoEditor);
        }
        let argv = shlex::split(&raw).ok_or_else(|| WorkspaceError::BadEditorCommand(raw.clone()))?;
        if argv.is_empty() {
            return Err(WorkspaceError::BadEditorCommand(raw));
        }
        Ok(argv)
    }
}

impl Workspace for FsWorkspace {
    fn read_document(&self, path: &Path) -> std::io::Result<Document> {
        let content = std::fs::read_to_string(path)?;
        let language = language::language_for_path(path).map(str::to_string);
        Ok(Document { content, language })
    }

    fn open_document(&self, path: &Path) -> Result<(), WorkspaceError> {
        let argv = self.editor_command()?;
        tracing::debug!("opening {} with {argv:?}", path.display());
        let status = Command::new(&argv[0]).args(&argv[1..]).arg(path).status()?;
        if !status.success() {
            return Err(WorkspaceError::EditorFailed(status));
        }
        Ok(())
    }
}

/// In-memory workspace for tests: a fixed path → document map. Opening a
/// document records the path instead of launching anything.
#[derive(Debug, Default)]
pub struct InMemoryWorkspace {
    documents: HashMap<PathBuf, Document>,
    opened: std::sync::Mutex<Vec<PathBuf>>,
}

impl InMemoryWorkspace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<PathBuf>, content: impl Into<String>) {
        let path = path.into();
        let language = language::language_for_path(&path).map(str::to_string);
        self.documents.insert(
            path,
            Document {
                content: content.into(),
                language,
            },
        );
    }

    pub fn opened(&self) -> Vec<PathBuf> {
        self.opened.lock().map(|o| o.clone()).unwrap_or_default()
    }
}

impl Workspace for InMemoryWorkspace {
    fn read_document(&self, path: &Path) -> std::io::Result<Document> {
        self.documents
            .get(path)
            .cloned()
            .ok_or_else(|| std::io::Error::from(std::io::ErrorKind::NotFound))
    }

    fn open_document(&self, path: &Path) -> Result<(), WorkspaceError> {
        if let Ok(mut opened) = self.opened.lock() {
            opened.push(path.to_path_buf());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn fs_workspace_classifies_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("main.rs");
        std::fs::write(&path, "fn main() {}\n").unwrap();

        let doc = FsWorkspace::default().read_document(&path).unwrap();
        assert_eq!(doc.content, "fn main() {}\n");
        assert_eq!(doc.language.as_deref(), Some("rust"));
    }

    #[test]
    fn fs_workspace_reports_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        let err = FsWorkspace::default()
            .read_document(&dir.path().join("gone.txt"))
            .unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    }

    #[test]
    fn editor_override_takes_precedence() {
        let workspace = FsWorkspace::new(Some("myeditor --wait".to_string()));
        let argv = workspace.editor_command().unwrap();
        assert_eq!(argv, ["myeditor", "--wait"]);
    }

    #[test]
    fn blank_editor_override_is_rejected() {
        let workspace = FsWorkspace::new(Some("   ".to_string()));
        assert!(matches!(
            workspace.editor_command(),
            Err(WorkspaceError::NoEditor)
        ));
    }

    #[test]
    fn in_memory_workspace_round_trips() {
        let mut workspace = InMemoryWorkspace::new();
        workspace.insert("/tmp/app.ts", "let x = 1;");
        let doc = workspace.read_document(Path::new("/tmp/app.ts")).unwrap();
        assert_eq!(doc.content, "let x = 1;");
        assert_eq!(doc.language.as_deref(), Some("typescript"));

        workspace.open_document(Path::new("/tmp/app.ts")).unwrap();
        assert_eq!(workspace.opened(), [PathBuf::from("/tmp/app.ts")]);
    }
}
