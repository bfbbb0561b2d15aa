//! Command-line interface.

pub mod completions;
pub mod fetch;
pub mod output;
pub mod trigger;

use clap::{Parser, Subcommand};

use crate::error::Result;
use trigger::TriggerArgs;

/// Keydash - trigger the key-generation workflow and render key listings.
#[derive(Parser)]
#[command(
    name = "keydash",
    about = "Trigger the key-generation workflow and render key listings",
    version,
    after_help = "Cut the keys. Mind the expiry. 🔑"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Dispatch the remote key-generation workflow
    Trigger(TriggerArgs),

    /// Fetch a key listing document and render it
    Fetch {
        /// URL of the published key listing (e.g. .../latest.json)
        url: String,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
pub async fn execute(command: Command) -> Result<()> {
    match command {
        Command::Trigger(args) => trigger::execute(args).await,
        Command::Fetch { url } => fetch::execute(&url).await,
        Command::Completions { shell } => completions::execute(shell),
    }
}
