//! Terminal front end for the recent-file carousel.
//!
//! The session tracks the files opened through it (bounded, most recent
//! first), and the picker presents them as a single-active-card carousel
//! with syntax-highlighted previews. Selecting a card reopens that file in
//! the configured editor.

use std::sync::Arc;
use std::sync::mpsc::channel;

mod app;
mod app_event;
mod app_event_sender;
pub mod carousel;
pub mod cli;
pub mod highlight;
mod key_hint;
pub mod language;
pub mod panel;
pub mod recent_files;
pub mod snapshot;
mod tui;
pub mod workspace;

pub use cli::Cli;

use crate::app::App;
use crate::app_event_sender::AppEventSender;
use crate::highlight::SyntectHighlighter;
use crate::tui::Tui;
use crate::workspace::FsWorkspace;

pub fn run_main(cli: Cli) -> anyhow::Result<()> {
    let _log_guard = init_logging(&cli)?;

    let workspace = Arc::new(FsWorkspace::new(cli.editor.clone()));
    let highlighter = Arc::new(SyntectHighlighter::new());

    let (tx, rx) = channel();
    let sender = AppEventSender::new(tx);

    let mut tui = Tui::init()?;
    tui.spawn_input_thread(sender.clone());

    let mut app = App::new(workspace, highlighter, sender, rx, &cli.paths);
    let result = app.run(&mut tui);
    tui.restore();
    result
}

/// Logging goes to a file; stdout belongs to the TUI. `RUST_LOG` overrides
/// the default `warn` filter.
fn init_logging(cli: &Cli) -> anyhow::Result<tracing_appender::non_blocking::WorkerGuard> {
    let (directory, file_name) = match &cli.log_file {
        Some(path) => {
            let directory = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map(std::path::Path::to_path_buf)
                .unwrap_or_else(|| std::path::PathBuf::from("."));
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "switcher.log".to_string());
            (directory, file_name)
        }
        None => {
            let directory = dirs::state_dir()
                .or_else(dirs::data_local_dir)
                .unwrap_or_else(std::env::temp_dir)
                .join("switcher");
            (directory, "switcher.log".to_string())
        }
    };
    std::fs::create_dir_all(&directory)?;

    let appender = tracing_appender::rolling::never(directory, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();
    Ok(guard)
}
