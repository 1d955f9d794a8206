use clap::Parser;
use std::path::PathBuf;

/// Cycle through recently viewed files in a carousel and reopen one.
#[derive(Parser, Debug, Default)]
#[command(name = "switcher", version)]
pub struct Cli {
    /// Seed the recent-file list with these paths (oldest first).
    pub paths: Vec<PathBuf>,

    /// Editor command used to open the selected file. Defaults to $VISUAL,
    /// then $EDITOR.
    #[arg(long)]
    pub editor: Option<String>,

    /// Write logs to this file instead of the default state directory.
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}
