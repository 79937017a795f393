//! Structural invariant checks for built trees.
//!
//! These walks recompute everything independently of the builder: node count,
//! terminal shape, backed-up values, and the first-best tie-break. With a
//! starting state they also replay every edge to confirm the tree matches the
//! game.

use std::fmt::Display;

use engine_core::{Outcome, Side, State};
use thiserror::Error;

use crate::node::NodeId;
use crate::tree::GameTree;

/// A broken tree invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("tree reports {reported} nodes but {counted} are reachable from the root")]
    SizeMismatch { reported: usize, counted: usize },

    #[error("node {node:?} has value {actual} but its children back up to {expected}")]
    ValueMismatch {
        node: NodeId,
        expected: Outcome,
        actual: Outcome,
    },

    #[error("node {node:?} caches best child {actual:?}, expected {expected:?}")]
    BestChildMismatch {
        node: NodeId,
        expected: Option<NodeId>,
        actual: Option<NodeId>,
    },

    #[error("node {node:?} disagrees with the game: terminal={tree_terminal}, game over={game_over}")]
    ShapeMismatch {
        node: NodeId,
        tree_terminal: bool,
        game_over: bool,
    },

    #[error("node {node:?} children do not match the moves enumerated by the game")]
    MovesMismatch { node: NodeId },

    #[error("move '{mv}' stored under node {node:?} was rejected by the game")]
    MoveRejected { node: NodeId, mv: String },

    #[error("terminal node {node:?} stores {stored} but the game values it {actual:?}")]
    TerminalValueMismatch {
        node: NodeId,
        stored: Outcome,
        actual: Option<Outcome>,
    },
}

impl<M> GameTree<M> {
    /// Check the backup rule, tie-break and node count.
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        let counted = self.check_subtree(self.root)?;
        if counted != self.size() {
            return Err(InvariantViolation::SizeMismatch {
                reported: self.size(),
                counted,
            });
        }
        Ok(())
    }

    /// Returns the number of nodes in the subtree rooted at `id`.
    fn check_subtree(&self, id: NodeId) -> Result<usize, InvariantViolation> {
        let node = self.get(id);

        let mut count = 1;
        for &child in &node.children {
            count += self.check_subtree(child)?;
        }

        let values = node.children.iter().map(|&child| self.get(child).value);
        let optimum = match node.to_move {
            Side::Maximizing => values.max(),
            Side::Minimizing => values.min(),
        };
        let expected_best = optimum.and_then(|optimum| {
            node.children
                .iter()
                .copied()
                .find(|&child| self.get(child).value == optimum)
        });

        if node.best_child != expected_best {
            return Err(InvariantViolation::BestChildMismatch {
                node: id,
                expected: expected_best,
                actual: node.best_child,
            });
        }
        if let Some(optimum) = optimum {
            if node.value != optimum {
                return Err(InvariantViolation::ValueMismatch {
                    node: id,
                    expected: optimum,
                    actual: node.value,
                });
            }
        }

        Ok(count)
    }
}

impl<M> GameTree<M>
where
    M: PartialEq + Display,
{
    /// Replay the whole tree against the game it was built from.
    ///
    /// Counts the positions visited by an independent do/undo walk and checks
    /// that terminal nodes are exactly the game-over positions with matching
    /// values. `state` must be at the tree's starting position and is
    /// restored before returning.
    pub fn verify_against<S>(&self, state: &mut S) -> Result<(), InvariantViolation>
    where
        S: State<Move = M> + ?Sized,
    {
        self.validate()?;

        let visited = self.replay_subtree(self.root, state)?;
        if visited != self.size() {
            return Err(InvariantViolation::SizeMismatch {
                reported: self.size(),
                counted: visited,
            });
        }
        Ok(())
    }

    fn replay_subtree<S>(&self, id: NodeId, state: &mut S) -> Result<usize, InvariantViolation>
    where
        S: State<Move = M> + ?Sized,
    {
        let node = self.get(id);
        let game_over = state.game_over();

        if node.is_terminal() != game_over {
            return Err(InvariantViolation::ShapeMismatch {
                node: id,
                tree_terminal: node.is_terminal(),
                game_over,
            });
        }

        if game_over {
            let actual = state.value().ok();
            if actual != Some(node.value) {
                return Err(InvariantViolation::TerminalValueMismatch {
                    node: id,
                    stored: node.value,
                    actual,
                });
            }
            return Ok(1);
        }

        let moves = state.find_all_moves();
        let stored: Vec<&M> = node
            .children
            .iter()
            .filter_map(|&child| self.get(child).mv())
            .collect();
        if moves.len() != stored.len() || moves.iter().zip(&stored).any(|(a, b)| a != *b) {
            return Err(InvariantViolation::MovesMismatch { node: id });
        }

        let mut visited = 1;
        for &child in &node.children {
            let Some(mv) = self.get(child).mv() else {
                return Err(InvariantViolation::MovesMismatch { node: id });
            };
            if !state.do_move(mv) {
                return Err(InvariantViolation::MoveRejected {
                    node: id,
                    mv: mv.to_string(),
                });
            }
            let result = self.replay_subtree(child, state);
            state.undo_move(mv);
            visited += result?;
        }

        Ok(visited)
    }
}
