//! State encoding for neural network input.
//!
//! Transforms game state into tensor representations suitable for neural
//! networks, and maps moves onto the indices of the policy output.

use crate::core::{GameState, GridMove, PlayerId};
use crate::games::hex::{HexMove, HexState};
use crate::nn::traits::EncodedState;

/// Encodes game state into tensors for neural network input.
///
/// Each encoder defines:
/// - How to convert a state to a tensor
/// - The shape of the output tensor
/// - The size of the action space and where each move sits in it
pub trait StateEncoder<S: GameState>: Send + Sync {
    /// Encode the game state.
    fn encode(&self, state: &S) -> EncodedState;

    /// Get the shape of encoded states.
    fn output_shape(&self) -> Vec<usize>;

    /// Get the total number of possible actions.
    ///
    /// This defines the size of the policy output vector.
    fn action_space_size(&self) -> usize;

    /// Index of `mv` in the policy output vector.
    fn action_index(&self, mv: &S::Move) -> usize;
}

/// Encoder for Hex boards.
///
/// Encodes a state as `size * size + 1` one-hot pairs:
/// - Row 0: the player to move (`[1, 0]` first player, `[0, 1]` second)
/// - Rows 1..: each cell in row-major order (`[0, 0]` when empty)
///
/// Moves map to `row * size + col`.
#[derive(Clone, Debug)]
pub struct HexEncoder {
    size: usize,
}

impl HexEncoder {
    /// Create an encoder for `size x size` boards.
    pub fn new(size: usize) -> Self {
        Self { size }
    }

    fn one_hot(owner: Option<PlayerId>) -> [f32; 2] {
        match owner {
            Some(PlayerId::FIRST) => [1.0, 0.0],
            Some(_) => [0.0, 1.0],
            None => [0.0, 0.0],
        }
    }
}

impl StateEncoder<HexState> for HexEncoder {
    fn encode(&self, state: &HexState) -> EncodedState {
        debug_assert_eq!(state.size(), self.size, "Encoder built for a different board size");

        let mut tensor = Vec::with_capacity((self.size * self.size + 1) * 2);
        tensor.extend(Self::one_hot(Some(state.current_player())));
        for row in 0..self.size {
            for col in 0..self.size {
                tensor.extend(Self::one_hot(state.cell(row, col)));
            }
        }

        EncodedState::new(tensor, self.output_shape())
    }

    fn output_shape(&self) -> Vec<usize> {
        vec![self.size * self.size + 1, 2]
    }

    fn action_space_size(&self) -> usize {
        self.size * self.size
    }

    fn action_index(&self, mv: &HexMove) -> usize {
        let (row, col) = mv.coordinates();
        row * self.size + col
    }
}
