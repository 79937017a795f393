//! Configuration for the solver
//!
//! Configuration is loaded from config.toml with environment variable overrides.
//! CLI arguments take highest priority, followed by env vars, then config.toml.

use anyhow::{anyhow, Context, Result};
use clap::{ArgAction, Parser};
use engine_config::{load_config, CentralConfig};
use engine_core::Side;
use engine_games::SolveParams;
use once_cell::sync::Lazy;
use serde::Serialize;
use tracing::level_filters::LevelFilter;

// Load central config once at startup
static CENTRAL_CONFIG: Lazy<CentralConfig> = Lazy::new(load_config);

// Default value functions that read from central config
fn default_game() -> String {
    CENTRAL_CONFIG.solve.game.clone()
}

fn default_first() -> String {
    CENTRAL_CONFIG.solve.first.clone()
}

fn default_verify() -> bool {
    CENTRAL_CONFIG.solve.verify
}

fn default_stacks() -> usize {
    CENTRAL_CONFIG.nim.stacks
}

fn default_max_take() -> u32 {
    CENTRAL_CONFIG.nim.max_take
}

fn default_log_level() -> String {
    CENTRAL_CONFIG.common.log_level.clone()
}

#[derive(Parser, Debug, Clone, Serialize)]
#[command(name = "solver")]
#[command(about = "Exhaustive minimax solver for small two-player games")]
#[command(
    long_about = "Builds the complete game tree from the starting position of a registered
game, backs up minimax values and reports who wins under perfect play.

Configuration is loaded from config.toml with environment variable overrides.
CLI arguments take highest priority."
)]
pub struct Config {
    /// Game to solve (nim, tictactoe)
    #[arg(long, default_value_t = default_game())]
    pub game: String,

    /// Side to move first (maximizing/computer or minimizing/player)
    #[arg(long, default_value_t = default_first())]
    pub first: String,

    /// Nim: number of stacks; stack i starts with i objects
    #[arg(long, default_value_t = default_stacks())]
    pub stacks: usize,

    /// Nim: most objects a single move may take
    #[arg(long, default_value_t = default_max_take())]
    pub max_take: u32,

    /// Replay the finished tree against the game and check its invariants
    #[arg(long, action = ArgAction::Set, default_value_t = default_verify())]
    pub verify: bool,

    /// Print the analysis as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value_t = default_log_level())]
    pub log_level: String,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.game.is_empty() {
            return Err(anyhow!("game cannot be empty"));
        }

        self.first_side()?;

        if self.max_take == 0 {
            return Err(anyhow!("max_take must be greater than 0"));
        }

        if self.log_level.parse::<LevelFilter>().is_err() {
            return Err(anyhow!(
                "invalid log level '{}', expected one of trace, debug, info, warn, error",
                self.log_level
            ));
        }

        Ok(())
    }

    /// Parsed side to move at the start
    pub fn first_side(&self) -> Result<Side> {
        self.first
            .parse()
            .with_context(|| format!("invalid first side '{}'", self.first))
    }

    /// Parameters handed to the game factory
    pub fn solve_params(&self) -> Result<SolveParams> {
        Ok(SolveParams::default()
            .with_first(self.first_side()?)
            .with_nim(self.stacks, self.max_take))
    }
}
