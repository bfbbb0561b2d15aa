//! Keydash - trigger the key-generation workflow and render key listings.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use keydash::cli::output;
use keydash::cli::{execute, Cli};
use keydash::error::KeydashError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("KEYDASH_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("keydash=debug")
        } else {
            EnvFilter::new("keydash=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).without_time())
        .init();

    if let Err(e) = execute(cli.command).await {
        tracing::debug!(error = %e, "command failed");

        let suggestion = match &e {
            KeydashError::MissingField("token") => Some("pass --token or set KEYDASH_TOKEN"),
            KeydashError::Dispatch { status: 401, .. } | KeydashError::Dispatch { status: 403, .. } => {
                Some("check the token and its workflow scope")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
