//! # onpolicy-mcts
//!
//! Monte Carlo Tree Search for two-player zero-sum games, with playouts
//! driven by a learned (or any other) move policy.
//!
//! ## Design Principles
//!
//! 1. **Game-Agnostic**: a game is anything implementing [`GameState`].
//!    The search never looks inside a state beyond that trait.
//!
//! 2. **One Target Player**: every search counts wins for a single player,
//!    and the tree policy flips direction where the opponent moves.
//!
//! 3. **Reproducible**: all randomness comes from a seeded [`GameRng`].
//!
//! ## Architecture
//!
//! - **Arena Tree**: nodes addressed by [`NodeId`], no reference counting.
//!
//! - **On-Policy Playouts**: an [`Actor`] plays frontier states out with
//!   epsilon-greedy moves, so search and policy improve each other.
//!
//! ## Modules
//!
//! - `core`: players, RNG, the `GameState` trait, errors
//! - `actor`: playout policies
//! - `nn`: policy network glue (encoder, network trait, actor)
//! - `mcts`: tree, tree policy, search engine, distributions
//! - `games`: Hex, the reference game

pub mod core;
pub mod actor;
pub mod nn;
pub mod mcts;
pub mod games;

// Re-export commonly used types
pub use crate::core::{GameRng, GameState, GridMove, MctsError, PlayerId, Result};

pub use crate::actor::{Actor, RandomActor};

pub use crate::nn::{EncodedState, HexEncoder, PolicyActor, PolicyNetwork, StateEncoder, UniformPolicy};

pub use crate::mcts::{
    ChildDistribution, MctsNode, MctsSearch, MctsTree, MinimaxUcb, NodeId, NodeStats,
    SearchObserver, SearchParameters, SearchStats, SelectionPolicy, TreeStats,
};
