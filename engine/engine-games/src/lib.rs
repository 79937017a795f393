//! Game registration and type-erased analysis for the game-tree solver
//!
//! This crate ties the typed games to the search: each game is wrapped in a
//! [`GameAdapter`], registered under its id, and analyzed through the
//! object-safe [`ErasedGame`] trait so callers can pick a game at runtime.
//!
//! # Usage
//!
//! ```rust
//! use engine_core::Side;
//! use engine_games::{create_game, register_all_games, SolveParams};
//!
//! // Call once at startup - safe to call multiple times
//! register_all_games();
//!
//! let params = SolveParams::default().with_first(Side::Maximizing).with_nim(2, 3);
//! let game = create_game("nim", &params).unwrap();
//! let analysis = game.analyze(false).unwrap();
//!
//! assert_eq!(analysis.predicted_winner, "computer");
//! assert_eq!(analysis.size, 12);
//! ```

use std::sync::Once;

use engine_core::GameMetadata;
use games_nim::NimState;
use games_tictactoe::TicTacToeState;

pub mod adapter;
pub mod erased;
pub mod registry;

pub use adapter::GameAdapter;
pub use erased::{Analysis, ErasedGame, GameError, SolveParams};
pub use registry::{create_game, is_registered, list_registered_games, register_game};

/// Largest Nim configuration accepted by the registry.
///
/// Nim with five stacks already has close to a billion move sequences.
pub const MAX_NIM_STACKS: usize = 4;

static INIT: Once = Once::new();

/// Register all available games with the registry.
///
/// This function uses `std::sync::Once` to ensure registration only
/// happens once, even if called multiple times. Safe to call from
/// multiple threads.
///
/// Currently registers:
/// - Nim (`"nim"`)
/// - Tic-Tac-Toe (`"tictactoe"`)
pub fn register_all_games() {
    INIT.call_once(|| {
        register_nim();
        register_tictactoe();
    });
}

/// Register Nim under `"nim"`
pub fn register_nim() {
    register_game("nim", nim_factory);
}

/// Register Tic-Tac-Toe under `"tictactoe"`
pub fn register_tictactoe() {
    register_game("tictactoe", tictactoe_factory);
}

fn nim_factory(params: &SolveParams) -> Result<Box<dyn ErasedGame>, GameError> {
    let invalid = |reason: String| GameError::InvalidParams {
        game: "nim".to_string(),
        reason,
    };
    if params.nim_stacks > MAX_NIM_STACKS {
        return Err(invalid(format!(
            "{} stacks requested, at most {} supported",
            params.nim_stacks, MAX_NIM_STACKS
        )));
    }
    if params.nim_max_take == 0 {
        return Err(invalid("max_take must be at least 1".to_string()));
    }

    let start = NimState::new(params.nim_stacks, params.first).with_max_take(params.nim_max_take);
    Ok(Box::new(GameAdapter::new(start, nim_metadata(params.nim_max_take))))
}

fn nim_metadata(max_take: u32) -> GameMetadata {
    let metadata = games_nim::metadata();
    if max_take == games_nim::DEFAULT_MAX_TAKE {
        return metadata;
    }
    metadata.with_description(format!(
        "Take 1-{max_take} objects from one stack; whoever takes the last object wins"
    ))
}

fn tictactoe_factory(params: &SolveParams) -> Result<Box<dyn ErasedGame>, GameError> {
    Ok(Box::new(GameAdapter::new(
        TicTacToeState::new(params.first),
        games_tictactoe::metadata(),
    )))
}
