//! Core traits and types for the game-tree engine
//!
//! This crate provides the fundamental abstractions shared by the search and
//! the games it solves:
//! - `State`: capability contract every game position implements
//! - `Side` / `Outcome`: explicit turn identity and value-sign convention
//! - `GameMetadata`: presentation data for a game variant
//! - `game_utils`: line tables shared by grid games

pub mod game_utils;
pub mod metadata;
pub mod side;
pub mod state;

// Re-export main types for convenience
pub use metadata::GameMetadata;
pub use side::{InvalidScore, Outcome, ParseSideError, Side};
pub use state::{State, StateError};
