//! Core types: players, RNG, the game state capability and errors.

pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use error::{MctsError, Result};
pub use player::PlayerId;
pub use rng::GameRng;
pub use state::{GameState, GridMove};
