#![allow(non_snake_case)]

use std::path::PathBuf;

use clap::Parser;

/// Terminal product catalog browser: a paginated, tag-searchable list of
/// product cards.
#[derive(Parser, Debug)]
#[command(name = "cardZoom", version, about)]
struct Cli {
    /// Path to a JSON catalog file (an array of products). The bundled
    /// sample catalog is used when omitted.
    #[arg(long)]
    data: Option<PathBuf>,

    /// Color theme to start with ("dark" or "light"). Overrides the
    /// settings file for this run.
    #[arg(long)]
    theme: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Keep the guard alive until exit so buffered log lines are flushed.
    let _log_guard = cardZoom::runner::logging::init_logging();

    cardZoom::runner::run_app(cli.data, cli.theme)
}
