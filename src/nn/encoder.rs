//! State encoding for policy network input.
//!
//! Transforms engine state into a flat feature vector from the current
//! player's perspective.

use crate::core::{FaceSource, WINNING_SCORE};
use crate::rules::FarkleEngine;

/// Length of an encoded observation.
pub const OBSERVATION_SIZE: usize = 16;

/// Encoded engine state.
pub type Observation = [f32; OBSERVATION_SIZE];

/// Encodes engine state as 16 features:
///
/// | index    | feature                                   |
/// |----------|-------------------------------------------|
/// | `0..6`   | die face / 6, in die id order             |
/// | `6..12`  | die state / 2 (rolled 0, kept 1, banked 2) |
/// | `12`     | turn score / scale                        |
/// | `13`     | current keep score / scale                |
/// | `14`     | current player's score / scale            |
/// | `15`     | next player's score / scale               |
///
/// Scores are not clamped; a winning total encodes above 1.0.
#[derive(Clone, Debug)]
pub struct ObservationEncoder {
    score_scale: f32,
}

impl Default for ObservationEncoder {
    fn default() -> Self {
        Self {
            score_scale: WINNING_SCORE as f32,
        }
    }
}

impl ObservationEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the divisor applied to score features.
    pub fn with_score_scale(mut self, scale: f32) -> Self {
        self.score_scale = scale;
        self
    }

    /// Encode the engine from the current player's perspective.
    pub fn encode<S: FaceSource>(&self, engine: &FarkleEngine<S>) -> Observation {
        let mut obs = [0.0f32; OBSERVATION_SIZE];

        for (i, die) in engine.dice().iter().enumerate() {
            obs[i] = f32::from(die.value) / 6.0;
            obs[i + 6] = f32::from(die.state.code()) / 2.0;
        }

        let me = engine.current_player();
        let next = me.next(engine.player_count());

        obs[12] = engine.turn_score() as f32 / self.score_scale;
        obs[13] = engine.current_keep_score() as f32 / self.score_scale;
        obs[14] = engine.player_score(me) as f32 / self.score_scale;
        obs[15] = engine.player_score(next) as f32 / self.score_scale;

        obs
    }
}
