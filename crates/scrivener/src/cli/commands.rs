//! CLI command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Scrivener - writes Reddit posts and replies with a language model
#[derive(Parser, Debug)]
#[command(name = "scrivener")]
#[command(about = "Writes Reddit posts and replies with a language model", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute (defaults to `once`)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Read trending posts but only log what would be submitted
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Settings file (defaults to ./scrivener.toml when present)
    #[arg(short, long, global = true, env = "SCRIVENER_CONFIG")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// The selected command.
    pub fn selected_command(&self) -> Commands {
        self.command.unwrap_or_default()
    }
}

/// Available commands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Commands {
    /// Post once, then comment once, then exit
    #[default]
    Once,

    /// Run the post and comment jobs daily until interrupted
    Schedule,
}
