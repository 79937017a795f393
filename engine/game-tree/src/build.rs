//! Exhaustive tree construction with minimax backup.
//!
//! Construction is a single-threaded depth-first recursion over one shared
//! `State`:
//! 1. Create a node tagged with the move that reached it
//! 2. Terminal: record the state's value and stop
//! 3. Otherwise, for each enumerated move: apply, recurse, undo
//! 4. Back up the children: the side to move takes the max (maximizing) or
//!    min (minimizing) child value; the first child in enumeration order that
//!    achieves it becomes the best child
//!
//! The state is never copied per branch. A parallel builder would have to give
//! each branch its own clone, since siblings share the one mutable position.

use std::fmt::{Debug, Display};

use engine_core::{Outcome, Side, State, StateError};
use thiserror::Error;
use tracing::{debug, trace};

use crate::node::{Node, NodeId};
use crate::tree::GameTree;

/// Errors that abort tree construction.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("enumerated move '{mv}' was rejected by the state at depth {depth}")]
    MoveRejected { mv: String, depth: u32 },

    #[error("non-terminal position at depth {depth} enumerated no moves")]
    NoMoves { depth: u32 },

    #[error("state contract violation: {0}")]
    State(#[from] StateError),
}

impl<M> GameTree<M>
where
    M: Clone + PartialEq + Debug + Display,
{
    /// Build the complete tree reachable from `state`.
    ///
    /// `state` is mutated in place during construction and restored to its
    /// starting position before this returns, on success and on error.
    ///
    /// # Errors
    ///
    /// * [`BuildError::MoveRejected`] if `do_move` refuses an enumerated move
    /// * [`BuildError::NoMoves`] if a non-terminal position enumerates nothing
    /// * [`BuildError::State`] if a terminal position cannot report its value
    pub fn build<S>(state: &mut S) -> Result<Self, BuildError>
    where
        S: State<Move = M> + ?Sized,
    {
        debug!(to_move = %state.side_to_move(), "Building game tree");

        let mut tree = GameTree {
            nodes: Vec::new(),
            root: NodeId(0),
        };
        tree.root = tree.expand(state, None, 0)?;

        debug!(
            size = tree.size(),
            root_value = %tree.root_value(),
            "Game tree built"
        );
        Ok(tree)
    }

    /// Build from a copy of `start`, leaving the caller's state untouched.
    ///
    /// The copy is made once here; construction itself still shares a single
    /// mutable position.
    pub fn from_start<S>(start: &S) -> Result<Self, BuildError>
    where
        S: State<Move = M> + Clone,
    {
        let mut state = start.clone();
        Self::build(&mut state)
    }

    /// Allocate a new node and return its ID.
    fn allocate(&mut self, node: Node<M>) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    fn expand<S>(&mut self, state: &mut S, mv: Option<M>, depth: u32) -> Result<NodeId, BuildError>
    where
        S: State<Move = M> + ?Sized,
    {
        // Captured before any child is explored; the backup rule depends on it.
        let to_move = state.side_to_move();
        let id = self.allocate(Node::new(mv, to_move));

        if state.game_over() {
            self.nodes[id.index()].value = state.value()?;
            return Ok(id);
        }

        let moves = state.find_all_moves();
        let mut children = Vec::with_capacity(moves.len());

        for m in moves {
            if !state.do_move(&m) {
                return Err(BuildError::MoveRejected {
                    mv: m.to_string(),
                    depth,
                });
            }
            let child = self.expand(state, Some(m.clone()), depth + 1);
            // Undo before propagating so the caller's position survives a failure.
            state.undo_move(&m);
            children.push(child?);
        }

        let (best_child, value) = self
            .back_up(&children, to_move)
            .ok_or(BuildError::NoMoves { depth })?;

        trace!(
            node = id.0,
            depth,
            children = children.len(),
            value = %value,
            "Expanded node"
        );

        let node = &mut self.nodes[id.index()];
        node.children = children;
        node.best_child = Some(best_child);
        node.value = value;

        Ok(id)
    }
}

impl<M> GameTree<M> {
    /// Minimax backup over `children` for the side to move.
    ///
    /// Returns the first child achieving the optimum and its value, or `None`
    /// if there are no children. Later children only replace the current best
    /// when strictly better, which makes the earliest optimal move win ties.
    pub(crate) fn back_up(&self, children: &[NodeId], to_move: Side) -> Option<(NodeId, Outcome)> {
        let mut iter = children.iter().copied();
        let first = iter.next()?;
        let mut best = (first, self.get(first).value);

        for child in iter {
            let value = self.get(child).value;
            if value.improves_on(best.1, to_move) {
                best = (child, value);
            }
        }

        Some(best)
    }
}
