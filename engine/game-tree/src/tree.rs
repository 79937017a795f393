//! Game tree structure with arena allocation.
//!
//! The tree uses arena allocation for node storage. Nodes are stored in a
//! contiguous Vec and referenced by NodeId indices, so the whole tree is owned
//! by the `GameTree` value and dropped with it.

use serde::Serialize;

use engine_core::Outcome;

use crate::node::{Node, NodeId};
use crate::prediction::Prediction;

/// Fully materialized game tree with minimax values at every node.
///
/// Built by [`GameTree::build`]; see the `build` module.
#[derive(Debug, Clone)]
pub struct GameTree<M> {
    /// Arena storing all nodes
    pub(crate) nodes: Vec<Node<M>>,

    /// Root node index (always 0 after construction)
    pub(crate) root: NodeId,
}

impl<M> GameTree<M> {
    /// Get the root node ID.
    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Get a reference to the root node.
    #[inline]
    pub fn root_node(&self) -> &Node<M> {
        self.get(self.root)
    }

    /// Get a reference to a node by ID.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this tree.
    #[inline]
    pub fn get(&self, id: NodeId) -> &Node<M> {
        &self.nodes[id.index()]
    }

    /// Total number of nodes created during construction, root and
    /// terminals included.
    #[inline]
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    /// Get the arena slice for read access.
    #[inline]
    pub fn arena(&self) -> &[Node<M>] {
        &self.nodes
    }

    /// Backed-up value of the root position.
    #[inline]
    pub fn root_value(&self) -> Outcome {
        self.root_node().value
    }

    /// Children of a node in move-enumeration order.
    #[inline]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.get(id).children
    }

    /// Cached best child of a node.
    #[inline]
    pub fn best_child(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).best_child
    }

    /// Move leading to the cached best child of a node.
    pub fn best_move(&self, id: NodeId) -> Option<&M> {
        self.best_child(id).and_then(|child| self.get(child).mv())
    }

    /// Forecast for the position at `id`.
    pub fn prediction(&self, id: NodeId) -> Prediction {
        Prediction::from(self.get(id).value)
    }

    /// Chain of best moves from `id` down to a terminal position.
    pub fn principal_variation(&self, id: NodeId) -> Vec<&M> {
        let mut line = Vec::new();
        let mut current = self.best_child(id);

        while let Some(child) = current {
            let node = self.get(child);
            if let Some(mv) = node.mv() {
                line.push(mv);
            }
            current = node.best_child;
        }

        line
    }

    /// Get statistics about the tree.
    pub fn stats(&self) -> TreeStats {
        let mut stats = TreeStats {
            total_nodes: self.nodes.len(),
            ..TreeStats::default()
        };
        self.collect_stats(self.root, 0, &mut stats);
        stats
    }

    fn collect_stats(&self, id: NodeId, depth: u32, stats: &mut TreeStats) {
        let node = self.get(id);
        stats.max_depth = stats.max_depth.max(depth);

        if node.is_terminal() {
            stats.terminal_nodes += 1;
            match node.value {
                Outcome::MaximizerWins => stats.maximizer_wins += 1,
                Outcome::MinimizerWins => stats.minimizer_wins += 1,
                Outcome::Draw => stats.draws += 1,
            }
            return;
        }

        for &child in &node.children {
            self.collect_stats(child, depth + 1, stats);
        }
    }
}

impl<M: PartialEq> GameTree<M> {
    /// Find the direct child of `id` produced by move `m`.
    ///
    /// Linear scan comparing moves structurally, so a move rebuilt from user
    /// input matches the one enumerated during construction.
    pub fn find_child(&self, id: NodeId, m: &M) -> Option<NodeId> {
        self.get(id)
            .children
            .iter()
            .copied()
            .find(|&child| self.get(child).mv() == Some(m))
    }

    /// Follow a sequence of moves from the root.
    ///
    /// Returns `None` as soon as a move has no matching child.
    pub fn replay<'a, I>(&self, moves: I) -> Option<NodeId>
    where
        I: IntoIterator<Item = &'a M>,
        M: 'a,
    {
        moves
            .into_iter()
            .try_fold(self.root, |current, m| self.find_child(current, m))
    }
}

/// Statistics about a game tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TreeStats {
    pub total_nodes: usize,
    pub terminal_nodes: usize,
    pub max_depth: u32,
    pub maximizer_wins: usize,
    pub minimizer_wins: usize,
    pub draws: usize,
}
