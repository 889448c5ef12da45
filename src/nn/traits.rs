//! Neural network traits for policy prediction.
//!
//! These traits define the interface between the search and a learned move
//! policy. Training and persistence of the network happen elsewhere.

use serde::{Deserialize, Serialize};

/// Encoded game state as a flat tensor for neural network input.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EncodedState {
    /// Flattened tensor data (row-major order).
    pub tensor: Vec<f32>,

    /// Shape of the tensor (e.g., [cells, channels]).
    pub shape: Vec<usize>,
}

impl EncodedState {
    /// Create a new encoded state.
    pub fn new(tensor: Vec<f32>, shape: Vec<usize>) -> Self {
        debug_assert_eq!(
            tensor.len(),
            shape.iter().product::<usize>(),
            "Tensor length must match shape product"
        );
        Self { tensor, shape }
    }

    /// Get the total number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tensor.len()
    }

    /// Check if the tensor is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tensor.is_empty()
    }
}

/// Policy network outputs move probabilities.
///
/// Given an encoded state, returns a probability distribution over the
/// encoder's action space. Probabilities of illegal moves are ignored by the
/// caller, so the network does not need to mask them.
pub trait PolicyNetwork: Send + Sync {
    /// Predict action probabilities for the given state.
    fn predict(&self, encoded: &EncodedState) -> Vec<f32>;
}

/// Uniform random policy (baseline for testing).
#[derive(Clone, Debug, Default)]
pub struct UniformPolicy {
    action_space_size: usize,
}

impl UniformPolicy {
    /// Create a new uniform policy.
    pub fn new(action_space_size: usize) -> Self {
        Self { action_space_size }
    }
}

impl PolicyNetwork for UniformPolicy {
    fn predict(&self, _encoded: &EncodedState) -> Vec<f32> {
        if self.action_space_size == 0 {
            return vec![];
        }
        let prob = 1.0 / self.action_space_size as f32;
        vec![prob; self.action_space_size]
    }
}
