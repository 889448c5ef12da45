//! Game state capability consumed by the search.
//!
//! The search never looks inside a position. Everything it needs (whose
//! turn it is, whether someone has won, which positions follow) goes
//! through [`GameState`].

use std::fmt::Debug;
use std::hash::Hash;

use super::player::PlayerId;

/// One immutable position of a two-player, perfect-information game.
///
/// ## Implementation Notes
///
/// - `legal_successor_states`: return an empty vec once the game is won.
///   The search treats a childless node as a frontier or terminal leaf.
/// - `apply_move`: must not mutate `self`; successors are fresh values.
/// - `originating_move`: `None` only for a root position that was not
///   produced by a move.
pub trait GameState: Clone {
    /// Move type used to key visit distributions.
    type Move: Clone + Eq + Hash + Debug;

    /// Player to move next.
    fn current_player(&self) -> PlayerId;

    /// Winner of the game, or `None` while the game is ongoing.
    fn winner(&self) -> Option<PlayerId>;

    /// All positions reachable with one legal move, in a stable order.
    fn legal_successor_states(&self) -> Vec<Self>;

    /// Position after the current player plays `mv`.
    fn apply_move(&self, mv: &Self::Move) -> Self;

    /// The move that produced this position from its parent.
    fn originating_move(&self) -> Option<&Self::Move>;

    /// Legal moves, in the same order as `legal_successor_states`.
    ///
    /// The default derives them from the successors; games with a cheaper
    /// move generator should override it.
    fn legal_moves(&self) -> Vec<Self::Move> {
        self.legal_successor_states()
            .iter()
            .filter_map(|s| s.originating_move().cloned())
            .collect()
    }

    /// Check if the game has ended.
    fn is_terminal(&self) -> bool {
        self.winner().is_some()
    }
}

/// A move that addresses a cell of a square board.
pub trait GridMove {
    /// `(row, col)` of the cell this move targets.
    fn coordinates(&self) -> (usize, usize);
}
