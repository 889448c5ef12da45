//! Hex rules and board representation.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{GameState, GridMove, PlayerId};

/// Largest supported board edge.
pub const MAX_SIZE: usize = 26;

/// Placement of a stone on the cell at `(row, col)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HexMove {
    pub row: u8,
    pub col: u8,
}

impl HexMove {
    /// Create a move targeting `(row, col)`.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

impl GridMove for HexMove {
    fn coordinates(&self) -> (usize, usize) {
        (self.row as usize, self.col as usize)
    }
}

impl std::fmt::Display for HexMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Column letter, 1-based row: (0, 0) is "a1"
        write!(f, "{}{}", (b'a' + self.col) as char, self.row + 1)
    }
}

/// A Hex position.
///
/// Cells live in an `im::Vector`, so the clone made for every successor
/// and playout step shares structure with its parent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HexState {
    size: usize,
    cells: Vector<Option<PlayerId>>,
    to_move: PlayerId,
    last_move: Option<HexMove>,
    winner: Option<PlayerId>,
}

impl HexState {
    /// Empty `size x size` board with `first_player` to move.
    ///
    /// # Panics
    /// If `size` is zero or larger than [`MAX_SIZE`].
    pub fn new(size: usize, first_player: PlayerId) -> Self {
        assert!(size > 0, "Board must have at least one cell");
        assert!(size <= MAX_SIZE, "At most {MAX_SIZE}x{MAX_SIZE} boards supported");

        Self {
            size,
            cells: std::iter::repeat(None).take(size * size).collect(),
            to_move: first_player,
            last_move: None,
            winner: None,
        }
    }

    /// Play a sequence of `(row, col)` placements from an empty board.
    ///
    /// Placements are not validated; see `apply_move`.
    pub fn from_moves(size: usize, first_player: PlayerId, moves: &[(u8, u8)]) -> Self {
        moves.iter().fold(Self::new(size, first_player), |state, &(row, col)| {
            state.apply_move(&HexMove::new(row, col))
        })
    }

    /// Board edge length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Owner of the cell at `(row, col)`, if any.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<PlayerId> {
        self.cells.get(row * self.size + col).copied().flatten()
    }

    /// Number of stones on the board.
    #[must_use]
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    fn empty_cells(&self) -> impl Iterator<Item = HexMove> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_none())
            .map(move |(i, _)| HexMove::new((i / size) as u8, (i % size) as u8))
    }

    fn neighbours(&self, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> {
        const OFFSETS: [(isize, isize); 6] = [(-1, 0), (-1, 1), (0, -1), (0, 1), (1, -1), (1, 0)];
        let size = self.size as isize;
        OFFSETS.into_iter().filter_map(move |(dr, dc)| {
            let (r, c) = (row as isize + dr, col as isize + dc);
            (r >= 0 && r < size && c >= 0 && c < size).then_some((r as usize, c as usize))
        })
    }

    /// Whether `player` has a chain joining their two edges.
    ///
    /// The first player joins the top and bottom rows, the second player
    /// the left and right columns.
    #[must_use]
    pub fn connects(&self, player: PlayerId) -> bool {
        let n = self.size;
        let vertical = player == PlayerId::FIRST;
        let start = |i: usize| if vertical { (0, i) } else { (i, 0) };
        let reached_goal = |(r, c): (usize, usize)| if vertical { r == n - 1 } else { c == n - 1 };

        let mut seen = vec![false; n * n];
        let mut stack: Vec<(usize, usize)> = (0..n)
            .map(start)
            .filter(|&(r, c)| self.cell(r, c) == Some(player))
            .collect();
        for &(r, c) in &stack {
            seen[r * n + c] = true;
        }

        while let Some(pos) = stack.pop() {
            if reached_goal(pos) {
                return true;
            }
            for (r, c) in self.neighbours(pos.0, pos.1) {
                if !seen[r * n + c] && self.cell(r, c) == Some(player) {
                    seen[r * n + c] = true;
                    stack.push((r, c));
                }
            }
        }
        false
    }
}

impl GameState for HexState {
    type Move = HexMove;

    fn current_player(&self) -> PlayerId {
        self.to_move
    }

    fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    fn legal_successor_states(&self) -> Vec<Self> {
        if self.winner.is_some() {
            return Vec::new();
        }
        self.empty_cells().map(|mv| self.apply_move(&mv)).collect()
    }

    /// Places the mover's stone at `mv`.
    ///
    /// Legality is only checked by debug assertions. In release builds an
    /// occupied cell is overwritten and an off-board cell panics, so callers
    /// pass moves from `legal_moves` or `legal_successor_states`.
    fn apply_move(&self, mv: &HexMove) -> Self {
        let (row, col) = mv.coordinates();
        let idx = row * self.size + col;
        debug_assert!(row < self.size && col < self.size, "move {mv} is off the board");
        debug_assert!(self.cells[idx].is_none(), "cell {mv} is already occupied");

        let mover = self.to_move;
        let mut next = self.clone();
        next.cells.set(idx, Some(mover));
        next.last_move = Some(*mv);
        next.to_move = mover.opponent();
        if next.winner.is_none() && next.connects(mover) {
            next.winner = Some(mover);
        }
        next
    }

    fn originating_move(&self) -> Option<&HexMove> {
        self.last_move.as_ref()
    }

    fn legal_moves(&self) -> Vec<HexMove> {
        if self.winner.is_some() {
            return Vec::new();
        }
        self.empty_cells().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const P0: PlayerId = PlayerId::FIRST;
    const P1: PlayerId = PlayerId::SECOND;

    #[test]
    fn test_new_board() {
        let state = HexState::new(4, P1);

        assert_eq!(state.size(), 4);
        assert_eq!(state.current_player(), P1);
        assert_eq!(state.winner(), None);
        assert_eq!(state.stone_count(), 0);
        assert!(state.originating_move().is_none());
        assert_eq!(state.legal_moves().len(), 16);
    }

    #[test]
    fn test_apply_move_alternates_and_records() {
        let state = HexState::new(3, P0);
        let next = state.apply_move(&HexMove::new(1, 2));

        assert_eq!(next.cell(1, 2), Some(P0));
        assert_eq!(next.current_player(), P1);
        assert_eq!(next.originating_move(), Some(&HexMove::new(1, 2)));
        // Parent untouched
        assert_eq!(state.cell(1, 2), None);
        assert_eq!(state.stone_count(), 0);
    }

    #[test]
    fn test_successors_match_legal_moves() {
        let state = HexState::from_moves(3, P0, &[(0, 0), (1, 1)]);
        let successors = state.legal_successor_states();
        let moves = state.legal_moves();

        assert_eq!(successors.len(), 7);
        let from_successors: Vec<_> = successors
            .iter()
            .map(|s| *s.originating_move().unwrap())
            .collect();
        assert_eq!(from_successors, moves);
    }

    #[test]
    fn test_first_player_wins_top_to_bottom() {
        // P0 plays column 0, P1 plays column 2
        let state = HexState::from_moves(3, P0, &[(0, 0), (0, 2), (1, 0), (1, 2)]);
        assert_eq!(state.winner(), None);

        let state = state.apply_move(&HexMove::new(2, 0));
        assert_eq!(state.winner(), Some(P0));
        assert!(state.is_terminal());
        assert!(state.legal_successor_states().is_empty());
        assert!(state.legal_moves().is_empty());
    }

    #[test]
    fn test_second_player_wins_left_to_right() {
        let state = HexState::from_moves(3, P1, &[(1, 0), (0, 0), (1, 1), (0, 1), (1, 2)]);
        assert_eq!(state.winner(), Some(P1));
    }

    #[test]
    fn test_diagonal_neighbours_connect() {
        // (0,2) -> (1,1) -> (2,0) is a connected chain for P0
        let state = HexState::from_moves(3, P0, &[(0, 2), (0, 0), (1, 1), (1, 0), (2, 0)]);
        assert_eq!(state.winner(), Some(P0));
    }

    #[test]
    fn test_anti_diagonal_does_not_connect() {
        // (0,0), (1,1), (2,2) are not hex neighbours
        let state = HexState::from_moves(3, P0, &[(0, 0), (0, 2), (1, 1), (2, 1), (2, 2)]);
        assert_eq!(state.winner(), None);
        assert!(!state.connects(P0));
    }

    #[test]
    fn test_single_cell_board() {
        let state = HexState::new(1, P1).apply_move(&HexMove::new(0, 0));
        assert_eq!(state.winner(), Some(P1));
    }

    #[test]
    fn test_full_board_has_winner() {
        // Hex cannot end in a draw: fill the board in reading order
        let mut state = HexState::new(4, P0);
        while !state.is_terminal() {
            let mv = state.legal_moves()[0];
            state = state.apply_move(&mv);
        }
        assert!(state.winner().is_some());
    }

    #[test]
    fn test_move_display() {
        assert_eq!(HexMove::new(0, 0).to_string(), "a1");
        assert_eq!(HexMove::new(3, 2).to_string(), "c4");
        assert_eq!(HexMove::new(3, 2).coordinates(), (3, 2));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "already occupied")]
    fn test_occupied_cell_is_rejected_in_debug() {
        HexState::from_moves(3, P0, &[(1, 1), (1, 1)]);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "off the board")]
    fn test_off_board_move_is_rejected_in_debug() {
        HexState::new(3, P0).apply_move(&HexMove::new(3, 0));
    }

    #[test]
    fn test_serialization() {
        let state = HexState::from_moves(3, P0, &[(0, 1), (2, 2)]);
        let json = serde_json::to_string(&state).unwrap();
        let back: HexState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, back);
    }
}
