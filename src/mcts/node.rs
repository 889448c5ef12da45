//! MCTS node structures.
//!
//! Uses arena-based allocation with index references (NodeId) for efficiency
//! and serializability. A node's parent is an index, never an owner.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Index into the MctsTree node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel value representing no node.
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Create a new node ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Check if this is the NONE sentinel.
    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    /// Get the raw index value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "NodeId(NONE)")
        } else {
            write!(f, "NodeId({})", self.0)
        }
    }
}

/// Visit and win counts of a node.
///
/// Wins are counted for the target player of the `update` call that
/// produced them, whatever player moves at the node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeStats {
    pub visits: u32,
    pub wins: u32,
}

impl NodeStats {
    /// Smoothed win rate `wins / (visits + 1)`.
    ///
    /// The `+ 1` keeps unvisited nodes at 0 instead of dividing by zero.
    #[inline]
    #[must_use]
    pub fn q_value(self) -> f64 {
        self.wins as f64 / (self.visits as f64 + 1.0)
    }
}

/// A node in the MCTS tree.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MctsNode<S> {
    /// Position this node represents.
    pub state: S,

    /// Parent node (NONE for root).
    pub parent: NodeId,

    /// Children in successor order. Empty until expanded.
    /// SmallVec optimizes for small boards.
    pub children: SmallVec<[NodeId; 8]>,

    /// Total visits to this node.
    pub visits: u32,

    /// Visits whose playout was won by the target player.
    pub wins: u32,

    /// Depth in tree (root = 0).
    pub depth: u16,
}

impl<S> MctsNode<S> {
    /// Create a new node.
    pub fn new(state: S, parent: NodeId, depth: u16) -> Self {
        Self {
            state,
            parent,
            children: SmallVec::new(),
            visits: 0,
            wins: 0,
            depth,
        }
    }

    /// Create a root node.
    pub fn root(state: S) -> Self {
        Self::new(state, NodeId::NONE, 0)
    }

    /// Check if this is a root node.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Check if the node has materialized children.
    ///
    /// A node without children is either unexpanded or terminal; only its
    /// state can tell which.
    #[must_use]
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Visit and win counts.
    #[inline]
    #[must_use]
    pub fn stats(&self) -> NodeStats {
        NodeStats {
            visits: self.visits,
            wins: self.wins,
        }
    }

    /// Record one playout through this node.
    #[inline]
    pub fn record(&mut self, won: bool) {
        self.visits += 1;
        if won {
            self.wins += 1;
        }
    }
}
