//! MCTS configuration parameters.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::{MctsError, Result};

/// MCTS configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchParameters {
    /// Exploration constant `C` of the tree policy (default: 1.4).
    /// Higher values favor exploration over exploitation; 0 is pure
    /// exploitation.
    pub exploration_constant: f64,

    /// Simulation cycles run by `select_action` (default: 6400).
    pub num_simulations: u32,

    /// Probability that the playout actor plays a uniformly random move
    /// instead of its preferred one (default: 0.3).
    pub epsilon: f64,

    /// Wall-clock budget per `update` call, checked between cycles
    /// (default: 10s).
    pub time_limit: Duration,

    /// Random seed for expansion, playouts and randomized selection.
    /// Same seed produces deterministic searches.
    pub seed: u64,

    /// Maximum moves in one playout before it is reported as
    /// non-terminating.
    pub max_playout_length: u32,
}

impl Default for SearchParameters {
    fn default() -> Self {
        Self {
            exploration_constant: 1.4,
            num_simulations: 6400,
            epsilon: 0.3,
            time_limit: Duration::from_secs(10),
            seed: 42,
            max_playout_length: 10_000,
        }
    }
}

impl SearchParameters {
    /// Create a new config with custom exploration constant.
    pub fn with_exploration(mut self, c: f64) -> Self {
        self.exploration_constant = c;
        self
    }

    /// Create a new config with custom simulation budget.
    pub fn with_simulations(mut self, num_simulations: u32) -> Self {
        self.num_simulations = num_simulations;
        self
    }

    /// Create a new config with custom playout epsilon.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Create a new config with custom time limit.
    pub fn with_time_limit(mut self, time_limit: Duration) -> Self {
        self.time_limit = time_limit;
        self
    }

    /// Create a new config with custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Create a new config with custom playout length bound.
    pub fn with_max_playout_length(mut self, max_playout_length: u32) -> Self {
        self.max_playout_length = max_playout_length;
        self
    }

    /// Check every parameter is in range.
    pub fn validate(&self) -> Result<()> {
        if !self.exploration_constant.is_finite() || self.exploration_constant < 0.0 {
            return Err(MctsError::InvalidConfig(format!(
                "exploration_constant must be finite and >= 0, got {}",
                self.exploration_constant
            )));
        }
        if self.num_simulations == 0 {
            return Err(MctsError::InvalidConfig("num_simulations must be > 0".into()));
        }
        if !(0.0..=1.0).contains(&self.epsilon) {
            return Err(MctsError::InvalidConfig(format!(
                "epsilon must be in [0, 1], got {}",
                self.epsilon
            )));
        }
        if self.time_limit.is_zero() {
            return Err(MctsError::InvalidConfig("time_limit must be > 0".into()));
        }
        if self.max_playout_length == 0 {
            return Err(MctsError::InvalidConfig("max_playout_length must be > 0".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SearchParameters::default();
        assert_eq!(config.exploration_constant, 1.4);
        assert_eq!(config.num_simulations, 6400);
        assert_eq!(config.epsilon, 0.3);
        assert_eq!(config.time_limit, Duration::from_secs(10));
        assert_eq!(config.seed, 42);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = SearchParameters::default()
            .with_exploration(2.0)
            .with_simulations(100)
            .with_epsilon(0.0)
            .with_time_limit(Duration::from_millis(250))
            .with_seed(123)
            .with_max_playout_length(50);

        assert_eq!(config.exploration_constant, 2.0);
        assert_eq!(config.num_simulations, 100);
        assert_eq!(config.epsilon, 0.0);
        assert_eq!(config.time_limit, Duration::from_millis(250));
        assert_eq!(config.seed, 123);
        assert_eq!(config.max_playout_length, 50);
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let bad = [
            SearchParameters::default().with_exploration(-0.1),
            SearchParameters::default().with_exploration(f64::NAN),
            SearchParameters::default().with_simulations(0),
            SearchParameters::default().with_epsilon(1.5),
            SearchParameters::default().with_epsilon(-0.01),
            SearchParameters::default().with_time_limit(Duration::ZERO),
            SearchParameters::default().with_max_playout_length(0),
        ];

        for config in bad {
            assert!(
                matches!(config.validate(), Err(MctsError::InvalidConfig(_))),
                "{config:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_zero_exploration_is_valid() {
        assert!(SearchParameters::default().with_exploration(0.0).validate().is_ok());
    }

    #[test]
    fn test_serialization() {
        let config = SearchParameters::default().with_time_limit(Duration::from_millis(1500));
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SearchParameters = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
