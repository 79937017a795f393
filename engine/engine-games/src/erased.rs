//! Erased game interface for runtime polymorphism
//!
//! Typed states have different move types, so the registry cannot hold them
//! directly. Every game is wrapped in a [`GameAdapter`](crate::GameAdapter)
//! and exposed through [`ErasedGame`], whose results are plain text and
//! serializable summaries.

use engine_core::{GameMetadata, Outcome, Side};
use game_tree::{BuildError, InvariantViolation, Prediction, TreeStats};
use serde::Serialize;
use thiserror::Error;

/// Runtime error for registry lookups and analysis
#[derive(Debug, Error)]
pub enum GameError {
    #[error("unknown game '{0}'")]
    UnknownGame(String),

    #[error("invalid parameters for {game}: {reason}")]
    InvalidParams { game: String, reason: String },

    #[error("tree construction failed: {0}")]
    Build(#[from] BuildError),

    #[error("tree failed verification: {0}")]
    Invariant(#[from] InvariantViolation),
}

/// Everything a factory needs to set up a starting position.
///
/// Fields a game does not use are ignored by its factory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveParams {
    /// Side to move at the start
    pub first: Side,
    /// Nim: number of stacks, stack i holding i objects
    pub nim_stacks: usize,
    /// Nim: most objects one move may take
    pub nim_max_take: u32,
}

impl Default for SolveParams {
    fn default() -> Self {
        Self {
            first: Side::Maximizing,
            nim_stacks: 2,
            nim_max_take: games_nim::DEFAULT_MAX_TAKE,
        }
    }
}

impl SolveParams {
    pub fn with_first(mut self, first: Side) -> Self {
        self.first = first;
        self
    }

    pub fn with_nim(mut self, stacks: usize, max_take: u32) -> Self {
        self.nim_stacks = stacks;
        self.nim_max_take = max_take;
        self
    }
}

/// Result of solving a game from its starting position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    /// Registry id of the game
    pub game: String,
    pub display_name: String,
    /// Side to move at the root
    pub first: Side,
    /// Backed-up root value
    pub root_value: Outcome,
    pub prediction: Prediction,
    /// Prediction phrased with the game's side labels ("computer", "player", "no one")
    pub predicted_winner: String,
    /// Best first move for the side to move, absent at a terminal start
    pub best_move: Option<String>,
    /// Best play for both sides from the start to the end of the game
    pub principal_variation: Vec<String>,
    /// Total number of tree nodes
    pub size: usize,
    pub stats: TreeStats,
    /// Whether the tree was replayed against the game after construction
    pub verified: bool,
}

/// Type-erased game that can be stored in the registry.
pub trait ErasedGame: Send + Sync + std::fmt::Debug + 'static {
    /// Get game metadata for labels and descriptions
    fn metadata(&self) -> GameMetadata;

    /// Render the starting position
    fn describe_start(&self) -> String;

    /// Build the complete tree from the starting position and summarize it.
    ///
    /// With `verify` set, the finished tree is also replayed against a fresh
    /// copy of the start before the summary is produced.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Build` if the state breaks its contract during
    /// construction, or `GameError::Invariant` if verification fails.
    fn analyze(&self, verify: bool) -> Result<Analysis, GameError>;
}
