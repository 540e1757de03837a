//! Pokinator - think of a pokemon and answer yes/no questions until it is guessed.

mod config;
mod fetch;
mod game;

use anyhow::{Context, Result};
use clap::Parser;
use dialoguer::Confirm;
use narrowing_core::NarrowingEngine;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::PokinatorConfig;
use game::TerminalPlayer;

#[derive(Debug, Parser)]
#[command(name = "pokinator", version, about)]
struct Cli {
    /// Catalog cache file; created from PokeAPI when missing.
    #[arg(long)]
    cache: PathBuf,

    /// TOML config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override how many pokemon to download.
    #[arg(long)]
    limit: Option<usize>,

    /// Re-download the catalog even if the cache exists.
    #[arg(long)]
    refresh: bool,

    /// Log question selection.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = match &cli.config {
        Some(path) => PokinatorConfig::load(path)?,
        None => PokinatorConfig::default(),
    };
    if let Some(limit) = cli.limit {
        config.limit = limit;
    }

    let catalog = fetch::acquire_catalog(&cli.cache, &config, cli.refresh)?;
    let mut engine =
        NarrowingEngine::new(catalog, &config.schema()).context("failed to build engine")?;
    info!(items = engine.catalog().len(), "ready");

    let mut player = TerminalPlayer;
    let mut stdout = std::io::stdout();
    loop {
        game::play_round(&mut engine, &mut player, &mut stdout)?;

        let again = Confirm::new()
            .with_prompt("Play again?")
            .default(true)
            .interact()?;
        if !again {
            break;
        }
        engine.reset();
    }

    Ok(())
}
