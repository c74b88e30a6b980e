//! Engine configuration.
//!
//! Only the table is configurable: how many players sit down and, optionally,
//! the dice seed. Rule constants (six dice, 10 000 to win) are fixed.

use serde::{Deserialize, Serialize};

use super::error::EngineError;
use super::player::MAX_PLAYERS;

/// Points a player must reach to win.
pub const WINNING_SCORE: u32 = 10_000;

/// Dice in play.
pub const DICE_COUNT: usize = 6;

/// Configuration for a `FarkleEngine`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Number of players (1-255).
    pub player_count: usize,

    /// Dice seed. `None` seeds from system entropy.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            player_count: 2,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Create a config with the default two players.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the player count.
    pub fn with_players(mut self, player_count: usize) -> Self {
        self.player_count = player_count;
        self
    }

    /// Set a fixed dice seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Reject configurations the engine cannot seat.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.player_count == 0 || self.player_count > MAX_PLAYERS {
            return Err(EngineError::InvalidPlayerCount(self.player_count));
        }
        Ok(())
    }
}
