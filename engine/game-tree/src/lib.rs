//! Exhaustive game-tree search for two-player zero-sum games.
//!
//! This crate provides a game-agnostic minimax solver that works with any
//! game implementing the `engine-core` State trait.
//!
//! # Overview
//!
//! [`GameTree::build`] materializes every position reachable from a starting
//! state and performs backward induction while it builds:
//!
//! 1. **Expansion**: enumerate legal moves, apply each one to the shared state
//! 2. **Recursion**: build the subtree for the resulting position
//! 3. **Undo**: restore the shared state before the next sibling
//! 4. **Backup**: the side to move takes the best child value (max for the
//!    maximizing side, min for the minimizing side), first one wins ties
//!
//! Every node ends up with a value in `{-1, 0, +1}` and a cached best child.
//!
//! # Usage
//!
//! ```rust
//! use engine_core::{Outcome, Side};
//! use game_tree::{GameTree, Prediction};
//! use games_nim::{NimMove, NimState};
//!
//! let mut state = NimState::new(2, Side::Maximizing);
//! let tree = GameTree::build(&mut state).unwrap();
//!
//! assert_eq!(tree.root_value(), Outcome::MaximizerWins);
//! assert_eq!(tree.best_move(tree.root()), Some(&NimMove::new(1, 1)));
//! assert_eq!(tree.prediction(tree.root()), Prediction::MaximizerWins);
//! assert_eq!(tree.size(), 12);
//! ```
//!
//! # Replaying moves
//!
//! Drivers that let a human play against the tree follow their moves with
//! [`GameTree::find_child`] (or [`GameTree::replay`] for a whole sequence)
//! and answer with the cached best child.
//!
//! # Cost
//!
//! The whole tree is built eagerly with no pruning or transpositions. Memory
//! and time grow with the number of distinct move sequences, which for larger
//! Nim configurations gets large quickly.

pub mod build;
pub mod node;
pub mod prediction;
pub mod tree;
pub mod verify;

// Re-export main types
pub use build::BuildError;
pub use node::{Node, NodeId};
pub use prediction::Prediction;
pub use tree::{GameTree, TreeStats};
pub use verify::InvariantViolation;

#[cfg(test)]
pub(crate) mod test_utils;
