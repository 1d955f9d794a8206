use clap::Parser;
use switcher_tui::Cli;
use switcher_tui::run_main;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_main(cli)
}
