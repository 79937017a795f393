//! Game-tree node representation.
//!
//! Each node represents one position reached by applying a move to its
//! parent's position. Nodes carry the backed-up minimax value and a cached
//! pointer to the child that realizes it.

use engine_core::{Outcome, Side};

/// Index into the node arena. Using a newtype for type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// A node in the game tree.
#[derive(Debug, Clone)]
pub struct Node<M> {
    /// Move that led to this node from its parent (None for root)
    pub(crate) mv: Option<M>,

    /// Backed-up value from the maximizing side's perspective
    pub(crate) value: Outcome,

    /// Side to move in the position this node represents
    pub(crate) to_move: Side,

    /// Children in move-enumeration order. Empty iff the position is terminal.
    pub(crate) children: Vec<NodeId>,

    /// First child (in enumeration order) whose value equals `value`
    pub(crate) best_child: Option<NodeId>,
}

impl<M> Node<M> {
    /// Create an unexpanded node. The value is a placeholder until the
    /// builder assigns the terminal value or backs up the children.
    pub(crate) fn new(mv: Option<M>, to_move: Side) -> Self {
        Self {
            mv,
            value: Outcome::Draw,
            to_move,
            children: Vec::new(),
            best_child: None,
        }
    }

    /// The move that produced this node, `None` at the root.
    #[inline]
    pub fn mv(&self) -> Option<&M> {
        self.mv.as_ref()
    }

    #[inline]
    pub fn value(&self) -> Outcome {
        self.value
    }

    #[inline]
    pub fn to_move(&self) -> Side {
        self.to_move
    }

    #[inline]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    #[inline]
    pub fn best_child(&self) -> Option<NodeId> {
        self.best_child
    }

    /// Terminal nodes have no children.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.children.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_node_is_unexpanded() {
        let node: Node<u8> = Node::new(Some(3), Side::Minimizing);

        assert_eq!(node.mv(), Some(&3));
        assert_eq!(node.to_move(), Side::Minimizing);
        assert!(node.is_terminal());
        assert!(node.best_child().is_none());
    }

    #[test]
    fn test_root_has_no_move() {
        let node: Node<u8> = Node::new(None, Side::Maximizing);
        assert!(node.mv().is_none());
    }

    #[test]
    fn test_node_id_index() {
        assert_eq!(NodeId(0).index(), 0);
        assert_eq!(NodeId(41).index(), 41);
        assert!(NodeId(1) < NodeId(2));
    }
}
