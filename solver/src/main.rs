//! Solver - exhaustive game-tree analysis from the command line
//!
//! A one-shot process that:
//! 1. Loads settings from config.toml, environment overrides and flags
//! 2. Creates the requested game from the registry
//! 3. Builds the complete game tree and backs up minimax values
//! 4. Prints the predicted winner and best play as text or JSON

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

mod config;
mod report;

use crate::config::Config;

fn init_tracing(level: &str) -> Result<()> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // Logs go to stderr so stdout carries only the report.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    Ok(())
}

fn main() -> Result<()> {
    let config = Config::parse();
    config.validate()?;

    init_tracing(&config.log_level)?;
    debug!(config = %serde_json::to_string(&config)?, "Configuration loaded");

    engine_games::register_all_games();
    let params = config.solve_params()?;
    let game = engine_games::create_game(&config.game, &params).with_context(|| {
        format!(
            "cannot create game '{}' (available: {})",
            config.game,
            engine_games::list_registered_games().join(", ")
        )
    })?;

    info!(
        game = %config.game,
        first = %params.first,
        verify = config.verify,
        "Solving"
    );
    let analysis = game
        .analyze(config.verify)
        .with_context(|| format!("failed to solve {}", config.game))?;
    info!(
        size = analysis.size,
        root_value = %analysis.root_value,
        winner = %analysis.predicted_winner,
        "Solved"
    );

    if config.json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        let text = report::render(&analysis, &game.metadata(), &game.describe_start())
            .context("failed to render report")?;
        print!("{text}");
    }

    Ok(())
}
