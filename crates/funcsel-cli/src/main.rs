//! CLI entrypoint for funcsel.

mod classify;
mod cli;
mod completions;
mod expand;
mod selspec;

use clap::Parser;

use cli::{Cli, Command};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Expand {
            file,
            selections,
            steps,
            restore,
            json,
        } => expand::run_expand(&file, &selections, steps, restore, json),
        Command::Classify { file, json } => classify::run_classify(&file, json),
        Command::Completions { shell } => completions::run_completions(shell),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}
