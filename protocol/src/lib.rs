//! Wire types exchanged between the host session and the carousel surface.
//!
//! The two sides speak a handful of one-shot messages over typed channels.
//! Every message carries a `command` tag so its JSON form is self-describing
//! (`{"command": "setFiles", ...}`) and can be logged or replayed as-is.

use serde::Deserialize;
use serde::Serialize;
use std::path::PathBuf;

/// Immutable per-file payload for one picker invocation.
///
/// Materialized freshly from the live document text every time the picker
/// opens. Snapshots are never cached or diffed across invocations.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FileSnapshot {
    /// Absolute path of the tracked file.
    pub path: PathBuf,
    /// Display name, normally the final path component.
    pub name: String,
    /// Full document text at snapshot time.
    pub content: String,
    /// Host-side language classification, if the host produced one. The
    /// surface falls back to an extension lookup when this is absent.
    pub language: Option<String>,
    /// Whether the entry came from the recent-file tracker.
    pub is_recent: bool,
}

/// Messages from the host session to the presentation surface.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "command", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum HostMessage {
    /// Full-replacement snapshot push. Sent exactly once per invocation;
    /// there are no incremental update messages.
    SetFiles { files: Vec<FileSnapshot> },
}

/// Terminal intents from the surface back to the host.
///
/// Either variant ends the panel's useful lifetime: the host performs the
/// requested action and disposes the panel.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "command", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum SurfaceMessage {
    /// Open the given file in the main editing surface.
    OpenFile { file_path: PathBuf },
    /// Dispose the panel and discard all of its state.
    Close,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn snapshot() -> FileSnapshot {
        FileSnapshot {
            path: PathBuf::from("/tmp/main.rs"),
            name: "main.rs".to_string(),
            content: "fn main() {}\n".to_string(),
            language: Some("rust".to_string()),
            is_recent: true,
        }
    }

    #[test]
    fn set_files_wire_shape() {
        let msg = HostMessage::SetFiles {
            files: vec![snapshot()],
        };
        let value = serde_json::to_value(&msg).unwrap();
        assert_eq!(
            value,
            json!({
                "command": "setFiles",
                "files": [{
                    "path": "/tmp/main.rs",
                    "name": "main.rs",
                    "content": "fn main() {}\n",
                    "language": "rust",
                    "isRecent": true,
                }],
            })
        );
    }

    #[test]
    fn open_file_wire_shape() {
        let msg = SurfaceMessage::OpenFile {
            file_path: PathBuf::from("/tmp/main.rs"),
        };
        let value = serde_json::to_value(&msg).unwrap();
        assert_eq!(
            value,
            json!({ "command": "openFile", "filePath": "/tmp/main.rs" })
        );
    }

    #[test]
    fn close_wire_shape() {
        let value = serde_json::to_value(SurfaceMessage::Close).unwrap();
        assert_eq!(value, json!({ "command": "close" }));
    }

    #[test]
    fn host_message_round_trip() {
        let msg = HostMessage::SetFiles {
            files: vec![snapshot()],
        };
        let text = serde_json::to_string(&msg).unwrap();
        let back: HostMessage = serde_json::from_str(&text).unwrap();
        assert_eq!(back, msg);
    }

    #[test]
    fn surface_message_round_trip() {
        for msg in [
            SurfaceMessage::OpenFile {
                file_path: PathBuf::from("/work/lib.rs"),
            },
            SurfaceMessage::Close,
        ] {
            let text = serde_json::to_string(&msg).unwrap();
            let back: SurfaceMessage = serde_json::from_str(&text).unwrap();
            assert_eq!(back, msg);
        }
    }
}
