//! CLI definitions for funcsel.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "funcsel",
    version,
    about = "Expand selections to enclosing JavaScript functions",
    infer_subcommands = true,
    after_help = "Examples:\n  funcsel expand app.js --at 120            # cursor at byte 120\n  funcsel expand app.js --at 40..55 --steps 2\n  funcsel classify app.js                   # show string/comment/regex spans"
)]
pub struct Cli {
    /// Show debug details on stderr.
    #[arg(long, short, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Expand selections to the enclosing function.
    Expand {
        /// JavaScript source file.
        file: PathBuf,
        /// Selection to expand: a byte offset or a start..end range.
        /// Repeat for multiple selections.
        #[arg(long = "at", value_name = "OFFSET|START..END", required = true)]
        selections: Vec<String>,
        /// Expansion steps to apply.
        #[arg(long, default_value = "1")]
        steps: u32,
        /// Restore steps to apply after expanding.
        #[arg(long, default_value = "0")]
        restore: u32,
        /// Emit JSON instead of human-readable output.
        #[arg(long)]
        json: bool,
    },
    /// Print the lexical context classification of a file.
    Classify {
        /// JavaScript source file.
        file: PathBuf,
        /// Emit JSON instead of human-readable output.
        #[arg(long)]
        json: bool,
    },
    /// Generate shell completions.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}
