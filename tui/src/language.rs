//! Language tag resolution for preview highlighting.

use std::ffi::OsStr;
use std::path::Path;

use switcher_protocol::FileSnapshot;

/// Tag used when no language can be determined. Highlighters must render
/// this (and any tag they do not recognize) as unstyled text.
pub const PLAIN_TEXT: &str = "plaintext";

/// Fixed extension → tag lookup used when a snapshot carries no explicit
/// language classification.
pub fn language_for_extension(ext: &str) -> Option<&'static str> {
    match ext.to_ascii_lowercase().as_str() {
        "js" => Some("javascript"),
        "jsx" => Some("jsx"),
        "ts" => Some("typescript"),
        "tsx" => Some("tsx"),
        "css" => Some("css"),
        "json" => Some("json"),
        "html" => Some("html"),
        "md" => Some("markdown"),
        "rs" => Some("rust"),
        "toml" => Some("toml"),
        "py" => Some("python"),
        "sh" => Some("bash"),
        "yaml" | "yml" => Some("yaml"),
        _ => None,
    }
}

/// Classify a file by its extension.
pub fn language_for_path(path: &Path) -> Option<&'static str> {
    path.extension()
        .and_then(OsStr::to_str)
        .and_then(language_for_extension)
}

/// Resolution order for a snapshot: explicit tag from the host, extension
/// lookup on the display name, plaintext fallback.
pub fn resolve_language(snapshot: &FileSnapshot) -> String {
    if let Some(language) = snapshot.language.as_deref()
        && !language.is_empty()
    {
        return language.to_string();
    }
    language_for_path(Path::new(&snapshot.name))
        .unwrap_or(PLAIN_TEXT)
        .to_string()
}
