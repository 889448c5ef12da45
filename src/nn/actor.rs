//! Network-guided playout actor.

use crate::actor::Actor;
use crate::core::{GameRng, GameState, MctsError, Result};
use crate::nn::encoder::StateEncoder;
use crate::nn::traits::PolicyNetwork;

/// Actor that prefers the legal move the policy network rates highest.
///
/// Probabilities the network assigns to illegal moves are ignored. Among
/// equally rated legal moves the first in `legal_moves` order wins.
#[derive(Clone, Debug)]
pub struct PolicyActor<N, E> {
    network: N,
    encoder: E,
}

impl<N, E> PolicyActor<N, E> {
    /// Pair a policy network with the encoder that produces its input.
    pub fn new(network: N, encoder: E) -> Self {
        Self { network, encoder }
    }

    /// Get the network reference.
    pub fn network(&self) -> &N {
        &self.network
    }
}

impl<S, N, E> Actor<S> for PolicyActor<N, E>
where
    S: GameState,
    N: PolicyNetwork,
    E: StateEncoder<S>,
{
    fn preferred_move(&self, state: &S, _rng: &mut GameRng) -> Result<S::Move> {
        let moves = state.legal_moves();
        if moves.is_empty() {
            return Err(MctsError::NoLegalMoves);
        }

        let probs = self.network.predict(&self.encoder.encode(state));
        if probs.len() != self.encoder.action_space_size() {
            return Err(MctsError::Network(format!(
                "policy has {} outputs, expected {}",
                probs.len(),
                self.encoder.action_space_size()
            )));
        }

        let mut best: Option<(&S::Move, f32)> = None;
        for mv in &moves {
            let idx = self.encoder.action_index(mv);
            let p = *probs.get(idx).ok_or_else(|| {
                MctsError::Network(format!("move {mv:?} maps to index {idx} outside the policy"))
            })?;
            if best.map_or(true, |(_, best_p)| p > best_p) {
                best = Some((mv, p));
            }
        }

        best.map(|(mv, _)| mv.clone()).ok_or(MctsError::NoLegalMoves)
    }
}
