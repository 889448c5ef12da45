//! MCTS search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one `update` call.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Simulation cycles completed.
    pub iterations: u32,

    /// Nodes whose children were materialized.
    pub nodes_expanded: u32,

    /// Playouts (rollouts) performed.
    pub playouts: u32,

    /// Moves played across all playouts.
    pub playout_moves: u64,

    /// Maximum depth of a selected frontier node.
    pub max_depth: u16,

    /// Total time spent searching (microseconds).
    pub time_us: u64,

    /// Whether the time limit cut the cycle budget short.
    pub stopped_early: bool,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Calculate iterations per second.
    #[must_use]
    pub fn iterations_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.iterations as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }

    /// Calculate average playout length in moves.
    #[must_use]
    pub fn avg_playout_length(&self) -> f64 {
        if self.playouts == 0 {
            0.0
        } else {
            self.playout_moves as f64 / self.playouts as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_default() {
        let stats = SearchStats::new();
        assert_eq!(stats.iterations, 0);
        assert_eq!(stats.playouts, 0);
        assert!(!stats.stopped_early);
    }

    #[test]
    fn test_stats_iterations_per_second() {
        let mut stats = SearchStats::new();
        stats.iterations = 1000;
        stats.time_us = 1_000_000; // 1 second

        assert_eq!(stats.iterations_per_second(), 1000.0);
    }

    #[test]
    fn test_avg_playout_length() {
        let mut stats = SearchStats::new();
        assert_eq!(stats.avg_playout_length(), 0.0);

        stats.playouts = 4;
        stats.playout_moves = 10;
        assert_eq!(stats.avg_playout_length(), 2.5);
    }

    #[test]
    fn test_stats_reset() {
        let mut stats = SearchStats::new();
        stats.iterations = 100;
        stats.playouts = 50;
        stats.stopped_early = true;

        stats.reset();

        assert_eq!(stats, SearchStats::default());
    }

    #[test]
    fn test_stats_serialization() {
        let mut stats = SearchStats::new();
        stats.iterations = 42;

        let json = serde_json::to_string(&stats).unwrap();
        let deserialized: SearchStats = serde_json::from_str(&json).unwrap();

        assert_eq!(stats.iterations, deserialized.iterations);
    }
}
