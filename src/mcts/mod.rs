//! Monte Carlo Tree Search for two-player zero-sum games.
//!
//! ## Overview
//!
//! - **Arena tree**: nodes live in a flat vector, parents are indices
//! - **Minimax tree policy**: statistics are kept for one target player; the
//!   search maximizes where that player moves and minimizes elsewhere
//! - **Actor playouts**: frontier nodes are scored by epsilon-greedy playouts
//!   of a pluggable [`Actor`](crate::actor::Actor)
//! - **Training targets**: visit distributions over a node's children, as a
//!   move map or a dense board grid
//! - **Serializable**: tree, config and statistics derive serde
//!
//! ## Usage
//!
//! ```
//! use onpolicy_mcts::actor::RandomActor;
//! use onpolicy_mcts::core::PlayerId;
//! use onpolicy_mcts::games::hex::HexState;
//! use onpolicy_mcts::mcts::{MctsSearch, MctsTree, SearchParameters};
//!
//! let config = SearchParameters::default().with_simulations(200);
//! let mut search = MctsSearch::new(RandomActor, config).unwrap();
//!
//! let mut tree = MctsTree::new(HexState::new(3, PlayerId::FIRST));
//! let root = tree.root();
//! let chosen = search.select_action(&mut tree, root, PlayerId::FIRST, false).unwrap();
//!
//! // Visit counts of the root's children, for training a policy
//! let grid = tree.dense_distribution(root, 3).unwrap();
//! assert_eq!(grid.len(), 3);
//!
//! // Reuse the chosen subtree for the next move
//! tree.advance_root(chosen).unwrap();
//! ```
//!
//! ## Custom Policies
//!
//! The tree policy is a [`SelectionPolicy`] trait object:
//!
//! ```rust,ignore
//! let search = MctsSearch::new(actor, config)?.with_selection(MyPolicy);
//! ```

pub mod config;
pub mod node;
pub mod policy;
pub mod search;
pub mod stats;
pub mod tree;

// Re-export main types
pub use config::SearchParameters;
pub use node::{MctsNode, NodeId, NodeStats};
pub use policy::{best_index, exploration_bonus, MinimaxUcb, SelectionPolicy};
pub use search::{MctsSearch, SearchObserver};
pub use stats::SearchStats;
pub use tree::{ChildDistribution, MctsTree, TreeStats};
