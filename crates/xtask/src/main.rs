//! Development tasks for the hex strategy rules engine
//!
//! This binary provides development utilities using the cargo-xtask pattern.
//! Run with: `cargo xtask <command>`

mod commands;
mod utils;

use anyhow::Result;
use clap::Parser;
use commands::{Actions, Replay, Units};

/// Development tasks for the hex strategy rules engine
#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development tools for the rules engine", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// List the unit catalog
    Units(Units),

    /// Replay an action script against a scenario
    Replay(Replay),

    /// List the actions a unit can take in a scenario
    Actions(Actions),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for CONTENT_DIR and RUST_LOG)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Units(cmd) => cmd.execute(),
        Command::Replay(cmd) => cmd.execute(),
        Command::Actions(cmd) => cmd.execute(),
    }
}
