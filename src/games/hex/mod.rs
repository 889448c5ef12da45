//! Hex on an `n x n` rhombic board.
//!
//! - Players alternate placing a stone on any empty cell
//! - The first player wins by joining the top and bottom rows
//! - The second player wins by joining the left and right columns
//! - A full board always has exactly one winner, so playouts terminate
//!
//! Used as the reference game for the search and its training targets.

mod game;

pub use game::{HexMove, HexState, MAX_SIZE};
