//! Player identification for two-player games.
//!
//! Player indices are 0-based: the first player is `PlayerId(0)`.

use serde::{Deserialize, Serialize};

/// Player identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// The player who conventionally moves first.
    pub const FIRST: PlayerId = PlayerId(0);

    /// The player who conventionally moves second.
    pub const SECOND: PlayerId = PlayerId(1);

    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other player of a two-player game.
    ///
    /// ```
    /// use onpolicy_mcts::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::FIRST.opponent(), PlayerId::SECOND);
    /// assert_eq!(PlayerId::SECOND.opponent(), PlayerId::FIRST);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self(1 - (self.0 & 1))
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id() {
        let p = PlayerId::new(1);
        assert_eq!(p.index(), 1);
        assert_eq!(p, PlayerId::SECOND);
        assert_eq!(format!("{}", p), "Player 1");
    }

    #[test]
    fn test_opponent_is_involution() {
        for p in [PlayerId::FIRST, PlayerId::SECOND] {
            assert_ne!(p.opponent(), p);
            assert_eq!(p.opponent().opponent(), p);
        }
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&PlayerId::SECOND).unwrap();
        let back: PlayerId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, PlayerId::SECOND);
    }
}
