//! Actors choose moves during playouts.
//!
//! An actor is the default policy of the search: from the node picked by the
//! tree policy it plays moves until the game ends. The search only calls
//! [`Actor::epsilon_greedy_action`]; how the preferred move is produced
//! (a network, a heuristic, a coin flip) is up to the implementation.

use crate::core::{GameRng, GameState, MctsError, Result};

/// Move-selection policy used for playouts.
pub trait Actor<S: GameState> {
    /// The move this actor prefers in `state`.
    ///
    /// Returns `NoLegalMoves` if `state` has no legal moves.
    fn preferred_move(&self, state: &S, rng: &mut GameRng) -> Result<S::Move>;

    /// With probability `epsilon` a uniformly random legal move, otherwise
    /// the preferred move.
    fn epsilon_greedy_action(&self, state: &S, epsilon: f64, rng: &mut GameRng) -> Result<S::Move> {
        if rng.gen_bool(epsilon) {
            let moves = state.legal_moves();
            return rng.choose(&moves).cloned().ok_or(MctsError::NoLegalMoves);
        }
        self.preferred_move(state, rng)
    }
}

/// Uniform random actor.
///
/// Prefers a uniformly random legal move, which turns playouts into plain
/// random rollouts regardless of epsilon.
#[derive(Clone, Debug, Default)]
pub struct RandomActor;

impl<S: GameState> Actor<S> for RandomActor {
    fn preferred_move(&self, state: &S, rng: &mut GameRng) -> Result<S::Move> {
        let moves = state.legal_moves();
        rng.choose(&moves).cloned().ok_or(MctsError::NoLegalMoves)
    }
}
