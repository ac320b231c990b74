//! HEXVERSI CLI - Command-line interface
//!
//! Commands:
//! - play: Play one game in the terminal (humans and/or strategies)
//! - match: Run a series of strategy-vs-strategy games

mod console;
mod match_cmd;
mod play_cmd;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hexversi")]
#[command(about = "Reversi on a hexagonal board")]
struct Cli {
    /// Random seed for reproducible strategies
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a single game in the terminal
    Play(play_cmd::PlayArgs),
    /// Play a match between two strategies
    Match(match_cmd::MatchArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize logging (RUST_LOG overrides the default level)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => play_cmd::run(args, cli.seed),
        Commands::Match(args) => match_cmd::run(args, cli.seed),
    }
}
