//! Tree policy: how to score children during descent.
//!
//! Scores are always from the target player's point of view. At a node
//! where the opponent moves, the search looks for the *lowest* score, so a
//! policy subtracts its exploration bonus there instead of adding it.

use super::config::SearchParameters;
use super::node::NodeStats;

/// Policy for scoring a child during tree descent.
pub trait SelectionPolicy: Send + Sync {
    /// Score `child` of a parent visited `parent_visits` times.
    ///
    /// `is_opponent` is true when the parent's mover is not the target
    /// player; the search then picks the minimum score instead of the
    /// maximum.
    fn score(
        &self,
        parent_visits: u32,
        child: NodeStats,
        is_opponent: bool,
        config: &SearchParameters,
    ) -> f64;
}

/// Upper/lower confidence bound for two-player zero-sum search.
///
/// Formula: `Q ± C * sqrt(ln(N) / (n + 1))` with `Q = w / (n + 1)`,
/// plus when the target player moves and minus when the opponent does.
#[derive(Clone, Debug, Default)]
pub struct MinimaxUcb;

impl SelectionPolicy for MinimaxUcb {
    fn score(
        &self,
        parent_visits: u32,
        child: NodeStats,
        is_opponent: bool,
        config: &SearchParameters,
    ) -> f64 {
        let q = child.q_value();
        let u = exploration_bonus(config.exploration_constant, parent_visits, child.visits);
        if is_opponent {
            q - u
        } else {
            q + u
        }
    }
}

/// `C * sqrt(ln(parent_visits) / (child_visits + 1))`.
///
/// An unvisited parent has no defined logarithm; its children get an
/// infinite bonus instead, or none at all when `C` is 0.
#[must_use]
pub fn exploration_bonus(c: f64, parent_visits: u32, child_visits: u32) -> f64 {
    if c == 0.0 {
        return 0.0;
    }
    if parent_visits == 0 {
        return f64::INFINITY;
    }
    c * ((parent_visits as f64).ln() / (child_visits as f64 + 1.0)).sqrt()
}

/// Index of the best score: the lowest if `minimize`, else the highest.
///
/// Only a strictly better score replaces the running best, so the first
/// of several equal scores wins. Falls back to index 0 when no score beats
/// the initial bound (e.g. all NaN). Returns `None` for no scores.
pub fn best_index(scores: impl IntoIterator<Item = f64>, minimize: bool) -> Option<usize> {
    let mut best: Option<usize> = None;
    let mut extremum = if minimize { f64::INFINITY } else { f64::NEG_INFINITY };

    for (i, score) in scores.into_iter().enumerate() {
        if best.is_none() {
            best = Some(0);
        }
        let improves = if minimize { score < extremum } else { score > extremum };
        if improves {
            extremum = score;
            best = Some(i);
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(visits: u32, wins: u32) -> NodeStats {
        NodeStats { visits, wins }
    }

    #[test]
    fn test_exploration_bonus() {
        // ln(1) = 0
        assert_eq!(exploration_bonus(1.4, 1, 0), 0.0);

        let expected = 2.0 * ((10f64).ln() / 5.0).sqrt();
        assert!((exploration_bonus(2.0, 10, 4) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_unvisited_parent_is_guarded() {
        assert_eq!(exploration_bonus(1.4, 0, 0), f64::INFINITY);
        assert_eq!(exploration_bonus(0.0, 0, 0), 0.0);

        let config = SearchParameters::default();
        let score = MinimaxUcb.score(0, stats(0, 0), false, &config);
        assert_eq!(score, f64::INFINITY);
        let score = MinimaxUcb.score(0, stats(0, 0), true, &config);
        assert_eq!(score, f64::NEG_INFINITY);
    }

    #[test]
    fn test_opponent_flips_bonus_sign() {
        let config = SearchParameters::default().with_exploration(1.0);
        let child = stats(3, 2);
        let q = 0.5;
        let u = ((20f64).ln() / 4.0).sqrt();

        let ours = MinimaxUcb.score(20, child, false, &config);
        let theirs = MinimaxUcb.score(20, child, true, &config);

        assert!((ours - (q + u)).abs() < 1e-12);
        assert!((theirs - (q - u)).abs() < 1e-12);
    }

    #[test]
    fn test_zero_exploration_is_pure_q() {
        let config = SearchParameters::default().with_exploration(0.0);

        let rarely_visited = MinimaxUcb.score(100, stats(1, 0), false, &config);
        let good = MinimaxUcb.score(100, stats(50, 40), false, &config);

        assert_eq!(rarely_visited, 0.0);
        assert!((good - 40.0 / 51.0).abs() < 1e-12);
    }

    #[test]
    fn test_best_index_direction() {
        let scores = [0.3, 0.9, 0.1, 0.5];
        assert_eq!(best_index(scores, false), Some(1));
        assert_eq!(best_index(scores, true), Some(2));
    }

    #[test]
    fn test_best_index_first_seen_wins_ties() {
        assert_eq!(best_index([0.2, 0.7, 0.7], false), Some(1));
        assert_eq!(best_index([0.4, 0.1, 0.1], true), Some(1));
        assert_eq!(best_index([f64::INFINITY, f64::INFINITY], false), Some(0));
    }

    #[test]
    fn test_best_index_degenerate() {
        assert_eq!(best_index(std::iter::empty(), false), None);
        assert_eq!(best_index([f64::NAN, f64::NAN], true), Some(0));
    }
}
