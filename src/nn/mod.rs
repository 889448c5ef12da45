//! Neural network integration for playouts.
//!
//! The search consumes a learned policy only through the [`Actor`] trait.
//! This module provides the glue for the common case of a policy network:
//!
//! - **Traits**: `PolicyNetwork`
//! - **Encoding**: `StateEncoder` trait and `HexEncoder` implementation
//! - **Actor**: `PolicyActor`, which plays the best-rated legal move
//! - **Baseline**: `UniformPolicy` for testing
//!
//! ## Usage
//!
//! ```
//! use onpolicy_mcts::actor::Actor;
//! use onpolicy_mcts::core::{GameRng, PlayerId};
//! use onpolicy_mcts::games::hex::HexState;
//! use onpolicy_mcts::nn::{HexEncoder, PolicyActor, UniformPolicy};
//!
//! let actor = PolicyActor::new(UniformPolicy::new(16), HexEncoder::new(4));
//! let state = HexState::new(4, PlayerId::FIRST);
//! let mut rng = GameRng::new(42);
//!
//! let mv = actor.epsilon_greedy_action(&state, 0.3, &mut rng).unwrap();
//! println!("playout move: {mv}");
//! ```
//!
//! [`Actor`]: crate::actor::Actor

pub mod actor;
pub mod encoder;
pub mod traits;

// Re-export main types
pub use actor::PolicyActor;
pub use encoder::{HexEncoder, StateEncoder};
pub use traits::{EncodedState, PolicyNetwork, UniformPolicy};
