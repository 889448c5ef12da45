//! Arena-based MCTS tree.
//!
//! Uses a flat `Vec<MctsNode>` with index-based references for efficiency,
//! cache-friendliness, and serializability.

use std::collections::VecDeque;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::node::{MctsNode, NodeId};
use crate::core::{GameState, GridMove, MctsError, Result};

/// Statistics of one child in a visit distribution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildDistribution {
    /// Visits of this child.
    pub visits: u32,

    /// Target-player wins through this child.
    pub wins: u32,

    /// Sum of visits over all children of the same parent.
    pub visits_sum: u32,
}

/// Arena-based MCTS tree.
///
/// Nodes are stored in a flat vector and referenced by `NodeId` indices.
/// This avoids reference counting overhead and enables serialization.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MctsTree<S> {
    /// All nodes in the tree.
    nodes: Vec<MctsNode<S>>,

    /// The root node ID (always 0 after initialization).
    root: NodeId,
}

impl<S> MctsTree<S> {
    /// Create a new tree with a root node for `state`.
    pub fn new(state: S) -> Self {
        Self::with_capacity(state, 1024)
    }

    /// Create a tree with custom initial capacity.
    pub fn with_capacity(state: S, capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity.max(1));
        nodes.push(MctsNode::root(state));
        Self {
            nodes,
            root: NodeId::new(0),
        }
    }

    /// Get the root node ID.
    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Get a node by ID.
    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> &MctsNode<S> {
        &self.nodes[id.raw() as usize]
    }

    /// Get a mutable node by ID.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut MctsNode<S> {
        &mut self.nodes[id.raw() as usize]
    }

    /// Check if `id` addresses a node of this tree.
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        (id.raw() as usize) < self.nodes.len()
    }

    /// Allocate a new node, returning its ID.
    pub fn alloc(&mut self, node: MctsNode<S>) -> NodeId {
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Children of a node, in successor order.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.get(id).children
    }

    /// Parent of a node (`None` for the root).
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        let parent = self.get(id).parent;
        (!parent.is_none()).then_some(parent)
    }

    /// Get the root node.
    #[must_use]
    pub fn root_node(&self) -> &MctsNode<S> {
        self.get(self.root)
    }

    /// Iterate over all nodes.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &MctsNode<S>)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId::new(i as u32), n))
    }

    /// Make `new_root` the root, dropping every node outside its subtree.
    ///
    /// Statistics inside the subtree are kept. Node IDs are reassigned, so
    /// IDs obtained before the call are invalid afterwards.
    pub fn advance_root(&mut self, new_root: NodeId) -> Result<()> {
        if !self.contains(new_root) {
            return Err(MctsError::InvalidState(format!("{new_root} is not in the tree")));
        }

        let mut slots: Vec<Option<MctsNode<S>>> =
            std::mem::take(&mut self.nodes).into_iter().map(Some).collect();
        let mut remap = vec![NodeId::NONE; slots.len()];

        // Breadth-first so every parent is renumbered before its children
        let mut order = Vec::new();
        let mut queue = VecDeque::from([new_root]);
        while let Some(id) = queue.pop_front() {
            remap[id.raw() as usize] = NodeId::new(order.len() as u32);
            order.push(id);
            if let Some(node) = &slots[id.raw() as usize] {
                queue.extend(node.children.iter().copied());
            }
        }

        let base_depth = slots[new_root.raw() as usize].as_ref().map_or(0, |n| n.depth);
        let mut nodes = Vec::with_capacity(order.len());
        for id in order {
            if let Some(mut node) = slots[id.raw() as usize].take() {
                node.parent = if id == new_root {
                    NodeId::NONE
                } else {
                    remap[node.parent.raw() as usize]
                };
                node.children = node.children.iter().map(|c| remap[c.raw() as usize]).collect();
                node.depth -= base_depth;
                nodes.push(node);
            }
        }

        self.nodes = nodes;
        self.root = NodeId::new(0);
        Ok(())
    }
}

impl<S: GameState> MctsTree<S> {
    /// Materialize one child per legal successor of the node's state.
    ///
    /// No-op if the node already has children. Returns the number of
    /// children created, which is 0 for a terminal state.
    pub fn expand(&mut self, id: NodeId) -> usize {
        if self.get(id).has_children() {
            return 0;
        }

        let depth = self.get(id).depth.saturating_add(1);
        let successors = self.get(id).state.legal_successor_states();
        let children: SmallVec<[NodeId; 8]> = successors
            .into_iter()
            .map(|state| self.alloc(MctsNode::new(state, id, depth)))
            .collect();

        let count = children.len();
        self.get_mut(id).children = children;
        count
    }

    /// Visit statistics of every child keyed by the move that produced it.
    ///
    /// Fails with `InvalidState` if the node has no children.
    pub fn distribution_over_children(
        &self,
        id: NodeId,
    ) -> Result<FxHashMap<S::Move, ChildDistribution>> {
        let children = self.children(id);
        if children.is_empty() {
            return Err(MctsError::InvalidState(format!("{id} has no children")));
        }

        let visits_sum: u32 = children.iter().map(|&c| self.get(c).visits).sum();

        let mut distribution = FxHashMap::default();
        for &child_id in children {
            let child = self.get(child_id);
            let mv = child.state.originating_move().ok_or_else(|| {
                MctsError::InvalidState(format!("child {child_id} has no originating move"))
            })?;
            distribution.insert(
                mv.clone(),
                ChildDistribution {
                    visits: child.visits,
                    wins: child.wins,
                    visits_sum,
                },
            );
        }
        Ok(distribution)
    }

    /// Get statistics about the tree.
    #[must_use]
    pub fn stats(&self) -> TreeStats {
        let max_depth = self.nodes.iter().map(|n| n.depth).max().unwrap_or(0);
        let terminal_count = self.nodes.iter().filter(|n| n.state.is_terminal()).count();
        let expanded_count = self.nodes.iter().filter(|n| n.has_children()).count();
        let total_children: usize = self.nodes.iter().map(|n| n.children.len()).sum();

        TreeStats {
            node_count: self.nodes.len(),
            max_depth,
            terminal_count,
            expanded_count,
            total_children,
        }
    }
}

impl<S> MctsTree<S>
where
    S: GameState,
    S::Move: GridMove,
{
    /// `board_size x board_size` grid of child visit fractions.
    ///
    /// Each child's share of the sibling visits is written at its move's
    /// coordinates; cells without a child stay 0. If no child has been
    /// visited yet the grid is all zeros.
    pub fn dense_distribution(&self, id: NodeId, board_size: usize) -> Result<Vec<Vec<f64>>> {
        let distribution = self.distribution_over_children(id)?;
        let mut grid = vec![vec![0.0; board_size]; board_size];

        for (mv, entry) in &distribution {
            let (row, col) = mv.coordinates();
            if row >= board_size || col >= board_size {
                return Err(MctsError::InvalidState(format!(
                    "move {mv:?} lies outside a {board_size}x{board_size} board"
                )));
            }
            if entry.visits_sum > 0 {
                grid[row][col] = entry.visits as f64 / entry.visits_sum as f64;
            }
        }
        Ok(grid)
    }
}

/// Statistics about the MCTS tree.
#[derive(Clone, Debug, Default)]
pub struct TreeStats {
    /// Total number of nodes.
    pub node_count: usize,

    /// Maximum depth reached.
    pub max_depth: u16,

    /// Number of nodes whose state has a winner.
    pub terminal_count: usize,

    /// Number of nodes with children.
    pub expanded_count: usize,

    /// Total number of child links.
    pub total_children: usize,
}

impl TreeStats {
    /// Get the branching factor (average children per expanded node).
    #[must_use]
    pub fn branching_factor(&self) -> f64 {
        if self.expanded_count == 0 {
            0.0
        } else {
            self.total_children as f64 / self.expanded_count as f64
        }
    }
}
